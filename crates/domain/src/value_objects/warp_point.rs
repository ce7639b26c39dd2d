//! Block coordinates of a warp sign.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::BlockFace;
use crate::WorldId;

/// A block position inside one world.
///
/// This is the anchor of a warp: the block holding the sign. The sign's
/// orientation is read from the world at the I/O boundary, never stored here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WarpPoint {
    pub world_id: WorldId,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl WarpPoint {
    pub fn new(world_id: WorldId, x: i32, y: i32, z: i32) -> Self {
        Self { world_id, x, y, z }
    }

    /// The neighbouring block one step towards `face`.
    pub fn relative(&self, face: BlockFace) -> Self {
        let (dx, dy, dz) = face.offset();
        Self {
            world_id: self.world_id,
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    pub fn down(&self) -> Self {
        self.relative(BlockFace::Down)
    }

    /// Chunk column `(x, z)` containing this block.
    pub fn chunk(&self) -> (i32, i32) {
        (self.x >> 4, self.z >> 4)
    }
}

impl fmt::Display for WarpPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{},{},{}", self.world_id, self.x, self.y, self.z)
    }
}
