//! Entity modules wrapping the warp state the engine owns.
//!
//! - `WarpDirectory` - per-world owner -> point map with teardown and persistence
//! - `DisplayCache` - short-lived resolved sign displays per `(world, owner)`
//! - `listing` - recency ordering and the two-phase listing ticket

pub mod display_cache;
pub mod listing;
pub mod warp_directory;

pub use display_cache::DisplayCache;
pub use listing::{sort_by_recency, DirectoryListing, ListingError, ListingTicket, MAX_WARPS};
pub use warp_directory::WarpDirectory;
