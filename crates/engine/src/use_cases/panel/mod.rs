//! Warp panel use cases.

mod build_page;
mod types;

pub use build_page::{BuildWarpPage, PanelError, PANEL_MAX_SIZE};
pub use types::{Page, PanelAction, PanelSlot, SlotIcon, SlotKind};
