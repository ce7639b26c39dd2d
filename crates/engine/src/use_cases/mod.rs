//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific area. Use cases
//! orchestrate across entity modules to fulfill user stories.

pub mod panel;
pub mod teleport;

pub use panel::BuildWarpPage;
pub use teleport::WarpPlayer;
