// Port traits define the full contract - some methods exist for host adapters only
#![allow(dead_code)]

//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Warp persistence (could swap SQLite -> host database)
//! - Host world access (signs, safety checks, teleports)
//! - Host player access (presence, messaging, permissions, panels)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::WarpStore;

// =============================================================================
// Host Service Ports
// =============================================================================
pub use external::{
    GameWorldPort, PanelPort, PermissionPort, PresencePort, RecencyPort, SafetyPort, SignPort,
    SignTone, Sound, TeleportCause, TeleportPort, WarpCreated, WarpEventPort,
};

// =============================================================================
// Test-Only Mocks (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::MockWarpStore;

#[cfg(test)]
pub use external::{
    MockGameWorldPort, MockPanelPort, MockPermissionPort, MockPresencePort, MockRecencyPort,
    MockSafetyPort, MockSignPort, MockTeleportPort, MockWarpEventPort,
};

#[cfg(test)]
pub use testing::{MockClockPort, MockRandomPort};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::{ClockPort, RandomPort};

// =============================================================================
// Error Types
// =============================================================================
pub use error::{HostError, RepoError};
