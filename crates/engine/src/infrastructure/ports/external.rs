//! Host service port traits (world, players, panels, events).
//!
//! Everything the core needs from the game server is behind one of these
//! traits. They are synchronous: the host answers them from its main thread,
//! and only the recency listing is moved onto a blocking worker.

use serde::{Deserialize, Serialize};
use warpsigns_domain::{
    ArrivalPose, Environment, MaterialId, Message, OwnerId, SignState, WarpPoint, WorldId,
};

use super::error::HostError;
use crate::use_cases::panel::Page;

// =============================================================================
// World Ports
// =============================================================================

/// Colour state of a sign's welcome line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignTone {
    /// Green welcome line: the warp is live.
    Active,
    /// Red welcome line: the warp was removed.
    Inactive,
}

/// Reads and repaints signs in the world.
#[cfg_attr(test, mockall::automock)]
pub trait SignPort: Send + Sync {
    /// Authoritative answer to "does this warp still exist".
    fn read_sign(&self, point: WarpPoint) -> SignState;

    fn is_chunk_loaded(&self, point: WarpPoint) -> bool;

    /// Recolour the welcome line, but only if the sign still shows
    /// `welcome_line` in the opposite tone.
    fn paint_sign(
        &self,
        point: WarpPoint,
        welcome_line: &str,
        tone: SignTone,
    ) -> Result<(), HostError>;
}

/// Whether a player can stand at a block. Never cached.
#[cfg_attr(test, mockall::automock)]
pub trait SafetyPort: Send + Sync {
    fn is_safe(&self, point: WarpPoint) -> bool;
}

/// Why a teleport happened, as reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeleportCause {
    Command,
}

/// Fire-and-forget player movement.
#[cfg_attr(test, mockall::automock)]
pub trait TeleportPort: Send + Sync {
    fn teleport(&self, player: OwnerId, pose: ArrivalPose, cause: TeleportCause);
}

/// Game-mode and island policy for worlds.
#[cfg_attr(test, mockall::automock)]
pub trait GameWorldPort: Send + Sync {
    fn environment(&self, world: WorldId) -> Environment;

    /// True when `world` belongs to a game mode.
    fn is_game_world(&self, world: WorldId) -> bool;

    /// True when the game mode forbids teleporting while falling.
    fn prevents_falling_teleport(&self, world: WorldId) -> bool;

    /// PvP flag of the owner's island for `environment`, `None` without an island.
    fn island_pvp(&self, world: WorldId, owner: OwnerId, environment: Environment)
        -> Option<bool>;

    /// Permission prefix of the game mode owning `world`, e.g. `bskyblock.`.
    fn permission_prefix(&self, world: WorldId) -> Option<String>;

    /// Whether the host has an item material named `material`.
    fn is_item_material(&self, material: &MaterialId) -> bool;
}

// =============================================================================
// Player Ports
// =============================================================================

/// Recency oracle: last time a player was active.
#[cfg_attr(test, mockall::automock)]
pub trait RecencyPort: Send + Sync {
    /// Milliseconds since the epoch, 0 if never seen. May block.
    fn last_active(&self, player: OwnerId) -> i64;
}

/// Host sounds the warp system plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sound {
    ArrowHit,
    BatTakeoff,
}

/// Online presence, messaging and per-player state.
#[cfg_attr(test, mockall::automock)]
pub trait PresencePort: Send + Sync {
    fn is_online(&self, player: OwnerId) -> bool;

    /// Whether `viewer` can currently see `target`.
    fn can_see(&self, viewer: OwnerId, target: OwnerId) -> bool;

    /// Last known name; works for offline players too.
    fn display_name(&self, player: OwnerId) -> String;

    fn current_world(&self, player: OwnerId) -> Option<WorldId>;

    fn fall_distance(&self, player: OwnerId) -> f32;

    fn send_message(&self, player: OwnerId, message: Message);

    fn play_sound(&self, player: OwnerId, sound: Sound);

    /// Translate `key` into the player's locale.
    fn translate(&self, player: OwnerId, key: &str) -> String;
}

/// Effective permission nodes of players.
#[cfg_attr(test, mockall::automock)]
pub trait PermissionPort: Send + Sync {
    /// `None` unless `player` is an online player.
    fn effective_permissions(&self, player: OwnerId) -> Option<Vec<String>>;
}

/// Inventory panel rendering.
#[cfg_attr(test, mockall::automock)]
pub trait PanelPort: Send + Sync {
    fn open(&self, viewer: OwnerId, page: Page);
    fn close(&self, viewer: OwnerId);
}

// =============================================================================
// Events
// =============================================================================

/// Published after a warp was created and saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarpCreated {
    pub world_id: WorldId,
    pub owner_id: OwnerId,
    pub point: WarpPoint,
}

#[cfg_attr(test, mockall::automock)]
pub trait WarpEventPort: Send + Sync {
    fn warp_created(&self, event: WarpCreated);
}
