//! World environment classes.

use serde::{Deserialize, Serialize};

/// Environment class of a world; selects which PvP flag applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Normal,
    Nether,
    TheEnd,
    /// Any other environment the host reports. No PvP flag applies.
    #[serde(other)]
    Custom,
}
