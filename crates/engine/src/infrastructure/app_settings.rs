//! Warp addon settings.
//!
//! Settings arrive either from the host's config file (serde, with defaults
//! for every missing field) or from `WARPS_*` environment variables.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_welcome_line() -> String {
    "[WELCOME]".to_string()
}

fn default_lore_format() -> String {
    "&f".to_string()
}

fn default_name_format() -> String {
    "&f".to_string()
}

fn default_icon() -> String {
    "OAK_SIGN".to_string()
}

fn default_random_allowed() -> bool {
    true
}

fn default_display_cache_ttl_secs() -> u64 {
    600
}

fn default_sqlite_path() -> String {
    "./data/warps.db".to_string()
}

/// Settings for the warp directory, panel and display cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarpSettings {
    /// First line a sign must carry to become a warp, without colour codes.
    #[serde(default = "default_welcome_line")]
    pub welcome_line: String,

    /// `&`-coded prefix applied to every sign line shown in the panel.
    #[serde(default = "default_lore_format")]
    pub lore_format: String,

    /// `&`-coded prefix applied to owner names in the panel.
    #[serde(default = "default_name_format")]
    pub name_format: String,

    /// Default panel icon. Any sign material means "use the sign itself".
    #[serde(default = "default_icon")]
    pub icon: String,

    /// Show the random-warp shortcut as the first panel slot.
    #[serde(default = "default_random_allowed")]
    pub random_allowed: bool,

    /// How long a resolved sign display stays fresh.
    #[serde(default = "default_display_cache_ttl_secs")]
    pub display_cache_ttl_secs: u64,

    /// SQLite file backing the warp store.
    #[serde(default = "default_sqlite_path")]
    pub sqlite_path: String,
}

impl Default for WarpSettings {
    fn default() -> Self {
        Self {
            welcome_line: default_welcome_line(),
            lore_format: default_lore_format(),
            name_format: default_name_format(),
            icon: default_icon(),
            random_allowed: default_random_allowed(),
            display_cache_ttl_secs: default_display_cache_ttl_secs(),
            sqlite_path: default_sqlite_path(),
        }
    }
}

impl WarpSettings {
    /// Load settings from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            welcome_line: env::var("WARPS_WELCOME_LINE").unwrap_or(defaults.welcome_line),
            lore_format: env::var("WARPS_LORE_FORMAT").unwrap_or(defaults.lore_format),
            name_format: env::var("WARPS_NAME_FORMAT").unwrap_or(defaults.name_format),
            icon: env::var("WARPS_ICON").unwrap_or(defaults.icon),
            random_allowed: match env::var("WARPS_RANDOM_ALLOWED") {
                Ok(raw) => parse_flag(&raw)
                    .with_context(|| format!("WARPS_RANDOM_ALLOWED must be a boolean, got {raw:?}"))?,
                Err(_) => defaults.random_allowed,
            },
            display_cache_ttl_secs: env::var("WARPS_DISPLAY_CACHE_TTL_SECS")
                .unwrap_or_else(|_| defaults.display_cache_ttl_secs.to_string())
                .parse()
                .context("WARPS_DISPLAY_CACHE_TTL_SECS must be a number of seconds")?,
            sqlite_path: env::var("WARPS_SQLITE_PATH").unwrap_or(defaults.sqlite_path),
        })
    }

    pub fn display_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.display_cache_ttl_secs)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
