//! Domain entities for the warp directory.

mod display_record;
mod sign;
mod warp_entry;

pub use display_record::{DisplayRecord, SignDisplay};
pub use sign::{SignReading, SignState};
pub use warp_entry::WarpEntry;
