//! Block faces: the direction a sign faces or is rotated towards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A block face in the host's 16-point horizontal compass plus up/down.
///
/// Offsets follow the host convention: north is `-z`, east is `+x`. The
/// sixteenth-wind faces (e.g. `NorthNorthEast`) combine two faces, so their
/// offsets reach two blocks along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockFace {
    North,
    East,
    South,
    West,
    Up,
    Down,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
    WestNorthWest,
    NorthNorthWest,
    NorthNorthEast,
    EastNorthEast,
    EastSouthEast,
    SouthSouthEast,
    SouthSouthWest,
    WestSouthWest,
    #[serde(rename = "SELF")]
    Here,
}

impl BlockFace {
    /// Block offset `(x, y, z)` one step in this direction.
    pub fn offset(&self) -> (i32, i32, i32) {
        match self {
            Self::North => (0, 0, -1),
            Self::East => (1, 0, 0),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::Up => (0, 1, 0),
            Self::Down => (0, -1, 0),
            Self::NorthEast => (1, 0, -1),
            Self::NorthWest => (-1, 0, -1),
            Self::SouthEast => (1, 0, 1),
            Self::SouthWest => (-1, 0, 1),
            Self::WestNorthWest => (-2, 0, -1),
            Self::NorthNorthWest => (-1, 0, -2),
            Self::NorthNorthEast => (1, 0, -2),
            Self::EastNorthEast => (2, 0, -1),
            Self::EastSouthEast => (2, 0, 1),
            Self::SouthSouthEast => (1, 0, 2),
            Self::SouthSouthWest => (-1, 0, 2),
            Self::WestSouthWest => (-2, 0, 1),
            Self::Here => (0, 0, 0),
        }
    }

    /// Compass bearing in degrees used as the arrival yaw.
    ///
    /// North is 0 and bearings grow clockwise in 22.5 degree steps. Faces
    /// without a horizontal bearing (up, down, self) map to 0.
    pub fn yaw(&self) -> f32 {
        match self {
            Self::North | Self::Up | Self::Down | Self::Here => 0.0,
            Self::NorthNorthEast => 22.5,
            Self::NorthEast => 45.0,
            Self::EastNorthEast => 67.5,
            Self::East => 90.0,
            Self::EastSouthEast => 112.5,
            Self::SouthEast => 135.0,
            Self::SouthSouthEast => 157.5,
            Self::South => 180.0,
            Self::SouthSouthWest => 202.5,
            Self::SouthWest => 225.0,
            Self::WestSouthWest => 247.5,
            Self::West => 270.0,
            Self::WestNorthWest => 292.5,
            Self::NorthWest => 315.0,
            Self::NorthNorthWest => 337.5,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
            Self::Up => "UP",
            Self::Down => "DOWN",
            Self::NorthEast => "NORTH_EAST",
            Self::NorthWest => "NORTH_WEST",
            Self::SouthEast => "SOUTH_EAST",
            Self::SouthWest => "SOUTH_WEST",
            Self::WestNorthWest => "WEST_NORTH_WEST",
            Self::NorthNorthWest => "NORTH_NORTH_WEST",
            Self::NorthNorthEast => "NORTH_NORTH_EAST",
            Self::EastNorthEast => "EAST_NORTH_EAST",
            Self::EastSouthEast => "EAST_SOUTH_EAST",
            Self::SouthSouthEast => "SOUTH_SOUTH_EAST",
            Self::SouthSouthWest => "SOUTH_SOUTH_WEST",
            Self::WestSouthWest => "WEST_SOUTH_WEST",
            Self::Here => "SELF",
        }
    }
}

impl fmt::Display for BlockFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockFace {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let face = match s.trim().to_ascii_uppercase().as_str() {
            "NORTH" => Self::North,
            "EAST" => Self::East,
            "SOUTH" => Self::South,
            "WEST" => Self::West,
            "UP" => Self::Up,
            "DOWN" => Self::Down,
            "NORTH_EAST" => Self::NorthEast,
            "NORTH_WEST" => Self::NorthWest,
            "SOUTH_EAST" => Self::SouthEast,
            "SOUTH_WEST" => Self::SouthWest,
            "WEST_NORTH_WEST" => Self::WestNorthWest,
            "NORTH_NORTH_WEST" => Self::NorthNorthWest,
            "NORTH_NORTH_EAST" => Self::NorthNorthEast,
            "EAST_NORTH_EAST" => Self::EastNorthEast,
            "EAST_SOUTH_EAST" => Self::EastSouthEast,
            "SOUTH_SOUTH_EAST" => Self::SouthSouthEast,
            "SOUTH_SOUTH_WEST" => Self::SouthSouthWest,
            "WEST_SOUTH_WEST" => Self::WestSouthWest,
            "SELF" => Self::Here,
            other => return Err(DomainError::parse(format!("Unknown block face: {}", other))),
        };
        Ok(face)
    }
}
