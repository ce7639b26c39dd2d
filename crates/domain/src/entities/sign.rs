//! Sign state as read from the world.

use serde::{Deserialize, Serialize};

use crate::{BlockFace, MaterialId};

/// Text and item material of a sign block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignReading {
    /// All sign lines in order, including the welcome line and blank lines.
    pub lines: Vec<String>,
    /// Item form of the sign material (`OAK_WALL_SIGN` reads as `OAK_SIGN`).
    pub item_material: MaterialId,
}

/// What occupies a warp anchor block.
///
/// Decided once by the sign adapter; the core never inspects material names
/// to tell wall signs from standing signs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignState {
    /// Sign attached to a wall, facing away from it.
    Wall {
        facing: BlockFace,
        reading: SignReading,
    },
    /// Free-standing sign on a post.
    Standing {
        rotation: BlockFace,
        reading: SignReading,
    },
    /// The block is no longer a sign.
    NotASign,
}

impl SignState {
    pub fn is_sign(&self) -> bool {
        !matches!(self, Self::NotASign)
    }

    pub fn reading(&self) -> Option<&SignReading> {
        match self {
            Self::Wall { reading, .. } | Self::Standing { reading, .. } => Some(reading),
            Self::NotASign => None,
        }
    }
}
