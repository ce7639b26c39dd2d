//! Teleport use cases.

mod warp_player;

pub use warp_player::{ArrivalFeedback, WarpOutcome, WarpPlayer};
