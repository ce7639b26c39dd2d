//! Localizable player messages.
//!
//! The core only names translation keys and placeholder values; the host
//! resolves them against its locale files.

use serde::{Deserialize, Serialize};

/// Translation keys used by the warp system.
pub mod message_keys {
    pub const DOES_NOT_EXIST: &str = "warps.error.does-not-exist";
    pub const NOT_SAFE: &str = "warps.error.not-safe";
    pub const SIGN_REMOVED: &str = "warps.sign-removed";
    pub const PLAYER_WARPED: &str = "warps.player-warped";
    pub const PVP_ENABLED: &str = "protection.flags.PVP_OVERWORLD.enabled";
    pub const FALLING_HINT: &str = "protection.flags.PREVENT_TELEPORT_WHEN_FALLING.hint";
    pub const PANEL_TITLE: &str = "warps.title";
    pub const RANDOM: &str = "warps.random";
    pub const PREVIOUS: &str = "warps.previous";
    pub const NEXT: &str = "warps.next";

    /// Placeholder replaced with the warping player's name.
    pub const NAME_PLACEHOLDER: &str = "[name]";
}

/// A translation key plus placeholder substitutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub key: String,
    pub placeholders: Vec<(String, String)>,
}

impl Message {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            placeholders: Vec::new(),
        }
    }

    pub fn with(mut self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.placeholders.push((placeholder.into(), value.into()));
        self
    }
}
