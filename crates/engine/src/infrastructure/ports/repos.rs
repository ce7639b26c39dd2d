//! Repository port traits for warp persistence.

use async_trait::async_trait;
use warpsigns_domain::WarpEntry;

use super::error::RepoError;

// =============================================================================
// Warp Storage
// =============================================================================

/// Storage for the logical owner -> point map of every world.
///
/// `save` receives the complete snapshot in insertion order and replaces
/// whatever was stored before; `load` returns rows in the order they were
/// saved.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarpStore: Send + Sync {
    async fn load(&self) -> Result<Vec<WarpEntry>, RepoError>;
    async fn save(&self, entries: &[WarpEntry]) -> Result<(), RepoError>;
}
