//! Display records - cached sign text and icon for the warp panel.

use serde::{Deserialize, Serialize};

use crate::MaterialId;

/// Resolved panel content for a live warp sign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignDisplay {
    /// Formatted description lines (welcome line and blanks removed).
    pub lines: Vec<String>,
    pub icon: MaterialId,
}

/// Either the resolved content of a sign, or proof that the sign is gone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayRecord {
    Present(SignDisplay),
    /// The backing sign no longer exists.
    Absent,
}

impl DisplayRecord {
    pub fn is_real(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    pub fn display(&self) -> Option<&SignDisplay> {
        match self {
            Self::Present(display) => Some(display),
            Self::Absent => None,
        }
    }
}
