//! Warp panel page model handed to the host's panel renderer.

use serde::{Deserialize, Serialize};
use warpsigns_domain::{MaterialId, OwnerId, WorldId};

/// Icon of a panel slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotIcon {
    Material(MaterialId),
    /// Head of the named player.
    PlayerHead(String),
}

/// What a click on a slot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PanelAction {
    /// Close the panel and warp the clicker to `owner_id`.
    Warp { world_id: WorldId, owner_id: OwnerId },
    /// Close the panel and open page `index`.
    OpenPage { world_id: WorldId, index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SlotKind {
    /// Shortcut to a randomly drawn owner.
    RandomWarp(OwnerId),
    Warp(OwnerId),
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSlot {
    pub kind: SlotKind,
    pub name: String,
    pub description: Vec<String>,
    pub icon: SlotIcon,
    pub action: PanelAction,
}

/// One page of the warp panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub world_id: WorldId,
    pub viewer: OwnerId,
    /// Page index after clamping, 0-based.
    pub index: usize,
    pub title: String,
    pub slots: Vec<PanelSlot>,
}

impl Page {
    /// Owners of the regular warp slots, in slot order.
    pub fn warp_owners(&self) -> Vec<OwnerId> {
        self.slots
            .iter()
            .filter_map(|slot| match slot.kind {
                SlotKind::Warp(owner) => Some(owner),
                _ => None,
            })
            .collect()
    }

    pub fn random_owner(&self) -> Option<OwnerId> {
        self.slots.iter().find_map(|slot| match slot.kind {
            SlotKind::RandomWarp(owner) => Some(owner),
            _ => None,
        })
    }

    pub fn has_previous(&self) -> bool {
        self.slots.iter().any(|s| s.kind == SlotKind::Previous)
    }

    pub fn has_next(&self) -> bool {
        self.slots.iter().any(|s| s.kind == SlotKind::Next)
    }
}
