//! Build one page of the warp panel.

use std::sync::Arc;

use warpsigns_domain::common::translate_color_codes;
use warpsigns_domain::{message_keys, MaterialId, OwnerId, SignDisplay, WorldId};

use super::types::{Page, PanelAction, PanelSlot, SlotIcon, SlotKind};
use crate::entities::{DisplayCache, ListingError, WarpDirectory};
use crate::infrastructure::ports::{PresencePort, RandomPort};

/// Entry slots per page; the remaining two slots hold navigation.
pub const PANEL_MAX_SIZE: usize = 52;

#[derive(Debug, thiserror::Error)]
pub enum PanelError {
    #[error("Listing failed: {0}")]
    Listing(#[from] ListingError),
}

/// Build warp panel page use case.
///
/// Orchestrates: recency listing, display resolution with pruning of stale
/// warps, the random shortcut, paging and navigation.
pub struct BuildWarpPage {
    directory: Arc<WarpDirectory>,
    display_cache: Arc<DisplayCache>,
    presence: Arc<dyn PresencePort>,
    random: Arc<dyn RandomPort>,
    random_allowed: bool,
    name_prefix: String,
}

impl BuildWarpPage {
    pub fn new(
        directory: Arc<WarpDirectory>,
        display_cache: Arc<DisplayCache>,
        presence: Arc<dyn PresencePort>,
        random: Arc<dyn RandomPort>,
        random_allowed: bool,
        name_format: &str,
    ) -> Self {
        Self {
            directory,
            display_cache,
            presence,
            random,
            random_allowed,
            name_prefix: translate_color_codes('&', name_format),
        }
    }

    /// Build page `index` of the panel for `viewer`.
    ///
    /// An index past the last page shows the last page.
    pub async fn execute(
        &self,
        world: WorldId,
        viewer: OwnerId,
        index: usize,
    ) -> Result<Page, PanelError> {
        let listing = self.directory.list_sorted(world).await?;

        let mut warps: Vec<(OwnerId, SignDisplay)> = Vec::with_capacity(listing.len() + 1);
        for owner in listing.into_owners() {
            let anchor = self.directory.get(world, owner);
            match self.display_cache.get(world, owner, anchor).display() {
                Some(display) => warps.push((owner, display.clone())),
                None => {
                    tracing::info!(
                        world_id = %world,
                        owner_id = %owner,
                        "Removing warp whose sign is gone"
                    );
                    self.directory.remove_owner(world, owner).await;
                }
            }
        }

        let random_shortcut = self.random_allowed && !warps.is_empty();
        if random_shortcut {
            let pick = warps[self.random.gen_index(warps.len())].clone();
            warps.insert(0, pick);
        }

        let total = warps.len();
        let index = index.min(total / PANEL_MAX_SIZE);

        let mut slots = Vec::with_capacity(PANEL_MAX_SIZE + 2);
        let mut i = index * PANEL_MAX_SIZE;
        while slots.len() < PANEL_MAX_SIZE && i < total {
            let (owner, display) = &warps[i];
            let slot = if random_shortcut && i == 0 {
                self.random_slot(world, viewer, *owner)
            } else {
                self.warp_slot(world, *owner, display)
            };
            slots.push(slot);
            i += 1;
        }

        if index > 0 && i > PANEL_MAX_SIZE {
            slots.push(self.nav_slot(
                world,
                viewer,
                SlotKind::Previous,
                index - 1,
                message_keys::PREVIOUS,
                MaterialId::COBBLESTONE,
            ));
        }
        if i < total {
            slots.push(self.nav_slot(
                world,
                viewer,
                SlotKind::Next,
                index + 1,
                message_keys::NEXT,
                MaterialId::STONE,
            ));
        }

        tracing::debug!(
            world_id = %world,
            viewer = %viewer,
            index,
            total,
            slots = slots.len(),
            "Built warp panel page"
        );

        Ok(Page {
            world_id: world,
            viewer,
            index,
            title: format!(
                "{} {}",
                self.presence.translate(viewer, message_keys::PANEL_TITLE),
                index + 1
            ),
            slots,
        })
    }

    fn warp_slot(&self, world: WorldId, owner: OwnerId, display: &SignDisplay) -> PanelSlot {
        let name = self.presence.display_name(owner);
        let icon = if display.icon.is_player_head() {
            SlotIcon::PlayerHead(name.clone())
        } else {
            SlotIcon::Material(display.icon.clone())
        };
        PanelSlot {
            kind: SlotKind::Warp(owner),
            name: format!("{}{}", self.name_prefix, name),
            description: display.lines.clone(),
            icon,
            action: PanelAction::Warp {
                world_id: world,
                owner_id: owner,
            },
        }
    }

    fn random_slot(&self, world: WorldId, viewer: OwnerId, owner: OwnerId) -> PanelSlot {
        PanelSlot {
            kind: SlotKind::RandomWarp(owner),
            name: format!(
                "{}{}",
                self.name_prefix,
                self.presence.translate(viewer, message_keys::RANDOM)
            ),
            description: Vec::new(),
            icon: SlotIcon::Material(MaterialId::from_static(MaterialId::END_CRYSTAL)),
            action: PanelAction::Warp {
                world_id: world,
                owner_id: owner,
            },
        }
    }

    fn nav_slot(
        &self,
        world: WorldId,
        viewer: OwnerId,
        kind: SlotKind,
        target: usize,
        key: &str,
        icon: &'static str,
    ) -> PanelSlot {
        PanelSlot {
            kind,
            name: self.presence.translate(viewer, key),
            description: Vec::new(),
            icon: SlotIcon::Material(MaterialId::from_static(icon)),
            action: PanelAction::OpenPage {
                world_id: world,
                index: target,
            },
        }
    }
}
