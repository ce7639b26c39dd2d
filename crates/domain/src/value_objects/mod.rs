//! Value objects for warp signs.
//!
//! Immutable, comparable-by-value building blocks used by the entities and by
//! every engine port.

mod block_face;
mod environment;
mod material;
mod pose;
mod warp_point;

pub use block_face::BlockFace;
pub use environment::Environment;
pub use material::MaterialId;
pub use pose::{ArrivalPose, ARRIVAL_PITCH};
pub use warp_point::WarpPoint;
