//! Warp entry - one owner's warp in one world.

use serde::{Deserialize, Serialize};

use crate::{OwnerId, WarpPoint, WorldId};

/// A snapshot of one directory mapping.
///
/// The directory holds at most one entry per `(world_id, owner_id)` and at
/// most one owner per `point`. Entries handed out by the directory are copies;
/// mutating one never touches directory state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarpEntry {
    pub world_id: WorldId,
    pub owner_id: OwnerId,
    pub point: WarpPoint,
}

impl WarpEntry {
    pub fn new(owner_id: OwnerId, point: WarpPoint) -> Self {
        Self {
            world_id: point.world_id,
            owner_id,
            point,
        }
    }
}
