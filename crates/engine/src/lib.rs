//! WarpSigns Engine library.
//!
//! Server-side core of the warp sign system: the per-world warp directory,
//! the sign display cache, warp panel pages and teleport resolution.
//!
//! ## Structure
//!
//! - `entities/` - Directory, display cache and recency listings
//! - `use_cases/` - Panel page building and warping players
//! - `infrastructure/` - Port traits plus clock, settings and SQLite adapters
//! - `app` - Application composition

pub mod app;
pub mod entities;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for in-crate tests.
#[cfg(test)]
pub mod test_fixtures;

pub use app::{App, HostPorts};
