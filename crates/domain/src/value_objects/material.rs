//! Symbolic material identifiers used for panel icons.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized host material name, e.g. `OAK_SIGN` or `PLAYER_HEAD`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MaterialId(String);

impl MaterialId {
    pub const PLAYER_HEAD: &'static str = "PLAYER_HEAD";
    pub const END_CRYSTAL: &'static str = "END_CRYSTAL";
    pub const COBBLESTONE: &'static str = "COBBLESTONE";
    pub const STONE: &'static str = "STONE";

    /// Parse a user-supplied material name.
    ///
    /// Accepts an optional `minecraft:` namespace, any letter case, and
    /// spaces or dashes in place of underscores. Returns `None` when the
    /// result is empty or contains anything but `A-Z`, `0-9` and `_`.
    pub fn parse(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        let unprefixed = match trimmed.get(..10) {
            Some(ns) if ns.eq_ignore_ascii_case("minecraft:") => &trimmed[10..],
            _ => trimmed,
        };
        let normalized: String = unprefixed
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();
        let valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
        valid.then_some(Self(normalized))
    }

    /// Build from a name already known to be well-formed.
    pub fn from_static(name: &'static str) -> Self {
        Self(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this names any sign block or item.
    pub fn is_sign(&self) -> bool {
        self.0.contains("SIGN")
    }

    pub fn is_player_head(&self) -> bool {
        self.0 == Self::PLAYER_HEAD
    }
}

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MaterialId {
    type Error = crate::DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
            .ok_or_else(|| crate::DomainError::parse(format!("Invalid material id: {}", value)))
    }
}

impl From<MaterialId> for String {
    fn from(value: MaterialId) -> Self {
        value.0
    }
}
