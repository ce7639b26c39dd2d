//! Arrival pose for a teleport.

use serde::{Deserialize, Serialize};

use super::{BlockFace, WarpPoint};

/// Pitch applied to every warp arrival.
pub const ARRIVAL_PITCH: f32 = 30.0;

/// Exact position and facing a teleported player arrives at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArrivalPose {
    pub world_id: crate::WorldId,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub yaw: f32,
    pub pitch: f32,
}

impl ArrivalPose {
    /// Stand at the centre of `block` looking along `facing`.
    pub fn facing(block: WarpPoint, facing: BlockFace) -> Self {
        Self {
            world_id: block.world_id,
            x: f64::from(block.x) + 0.5,
            y: f64::from(block.y),
            z: f64::from(block.z) + 0.5,
            yaw: facing.yaw(),
            pitch: ARRIVAL_PITCH,
        }
    }
}
