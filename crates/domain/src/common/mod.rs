//! Common utility functions shared across the WarpSigns crates.
//!
//! Pure functions only - no side effects, no I/O.

pub mod string;

pub use string::{none_if_empty, translate_color_codes};
