//! Warp directory - the owner -> point map of every world.
//!
//! All mutation goes through `add`/`remove_*`, which also perform the host
//! side effects of a removal (sign repaint, owner message, cache purge) and
//! persist the whole map before returning.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use warpsigns_domain::{message_keys, Message, OwnerId, WarpEntry, WarpPoint, WorldId};

use super::display_cache::DisplayCache;
use super::listing::{sort_by_recency, DirectoryListing, ListingError, ListingTicket, MAX_WARPS};
use crate::infrastructure::ports::{
    PresencePort, RecencyPort, RepoError, SignPort, SignTone, WarpCreated, WarpEventPort,
    WarpStore,
};

#[derive(Debug, Clone, Copy)]
struct Mapping {
    point: WarpPoint,
    /// Insertion sequence; orders recency ties first-seen first.
    seq: u64,
}

/// Warps of a single world.
#[derive(Debug, Default)]
struct WorldWarps {
    owners: HashMap<OwnerId, Mapping>,
    next_seq: u64,
}

impl WorldWarps {
    fn owner_at(&self, point: &WarpPoint) -> Option<OwnerId> {
        self.owners
            .iter()
            .find(|(_, mapping)| mapping.point == *point)
            .map(|(owner, _)| *owner)
    }

    /// Map `owner` to `point`, evicting any other owner already at `point`.
    fn insert(&mut self, owner: OwnerId, point: WarpPoint) -> Option<OwnerId> {
        let evicted = self.owner_at(&point).filter(|existing| *existing != owner);
        if let Some(evicted) = evicted {
            self.owners.remove(&evicted);
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.owners.insert(owner, Mapping { point, seq });
        evicted
    }

    fn remove_at(&mut self, point: &WarpPoint) -> Vec<OwnerId> {
        let owners: Vec<OwnerId> = self
            .owners
            .iter()
            .filter(|(_, mapping)| mapping.point == *point)
            .map(|(owner, _)| *owner)
            .collect();
        for owner in &owners {
            self.owners.remove(owner);
        }
        owners
    }

    fn in_order(&self) -> Vec<(OwnerId, WarpPoint)> {
        let mut mapped: Vec<(u64, OwnerId, WarpPoint)> = self
            .owners
            .iter()
            .map(|(owner, mapping)| (mapping.seq, *owner, mapping.point))
            .collect();
        mapped.sort_by_key(|(seq, _, _)| *seq);
        mapped
            .into_iter()
            .map(|(_, owner, point)| (owner, point))
            .collect()
    }
}

/// Registry of warp signs, partitioned per world.
pub struct WarpDirectory {
    worlds: DashMap<WorldId, WorldWarps>,
    /// Held from snapshot to commit so saves land in mutation order.
    save_lock: Mutex<()>,
    welcome_line: String,
    store: Arc<dyn WarpStore>,
    signs: Arc<dyn SignPort>,
    presence: Arc<dyn PresencePort>,
    recency: Arc<dyn RecencyPort>,
    events: Arc<dyn WarpEventPort>,
    display_cache: Arc<DisplayCache>,
}

impl WarpDirectory {
    pub fn new(
        welcome_line: impl Into<String>,
        store: Arc<dyn WarpStore>,
        signs: Arc<dyn SignPort>,
        presence: Arc<dyn PresencePort>,
        recency: Arc<dyn RecencyPort>,
        events: Arc<dyn WarpEventPort>,
        display_cache: Arc<DisplayCache>,
    ) -> Self {
        Self {
            worlds: DashMap::new(),
            save_lock: Mutex::new(()),
            welcome_line: welcome_line.into(),
            store,
            signs,
            presence,
            recency,
            events,
            display_cache,
        }
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Replace the in-memory map with the stored one.
    ///
    /// A stored warp is dropped when its chunk is loaded and the block there
    /// is no longer a sign. Unloaded chunks are trusted until read.
    pub async fn load(&self) -> Result<usize, RepoError> {
        tracing::info!("Loading warps...");
        let stored = self.store.load().await?;
        self.worlds.clear();

        let mut loaded = 0;
        for entry in stored {
            if self.signs.is_chunk_loaded(entry.point) && !self.signs.read_sign(entry.point).is_sign()
            {
                tracing::debug!(
                    world_id = %entry.world_id,
                    owner_id = %entry.owner_id,
                    point = %entry.point,
                    "Skipping stored warp without a sign"
                );
                continue;
            }
            self.worlds
                .entry(entry.world_id)
                .or_default()
                .insert(entry.owner_id, entry.point);
            loaded += 1;
        }
        tracing::info!(loaded, "Loaded warps");
        Ok(loaded)
    }

    /// Persist the complete map. Failures are logged, never returned.
    pub async fn save(&self) {
        let _guard = self.save_lock.lock().await;
        let entries = self.snapshot();
        if let Err(e) = self.store.save(&entries).await {
            tracing::error!(error = %e, warps = entries.len(), "Failed to save warp list");
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Register `point` as the warp of `owner`.
    ///
    /// Returns `false` (and changes nothing) for a nil owner. Another owner's
    /// warp at the same point is removed with the full teardown first.
    pub async fn add(&self, owner: OwnerId, point: WarpPoint) -> bool {
        if owner.is_nil() {
            tracing::debug!(point = %point, "Rejected warp without an owner");
            return false;
        }
        let world = point.world_id;

        let evicted = self.worlds.entry(world).or_default().insert(owner, point);
        if let Some(evicted) = evicted {
            tracing::info!(
                world_id = %world,
                owner_id = %evicted,
                point = %point,
                "Warp displaced by a new sign at the same point"
            );
            self.teardown(world, evicted, point);
        }
        // A re-placed sign must be read again.
        self.display_cache.invalidate(world, owner);

        self.save().await;
        self.events.warp_created(WarpCreated {
            world_id: world,
            owner_id: owner,
            point,
        });
        true
    }

    /// Remove whatever warp sits at `point`.
    pub async fn remove_at(&self, point: WarpPoint) {
        let world = point.world_id;
        self.paint_inactive(point);
        let removed = self
            .worlds
            .get_mut(&world)
            .map(|mut warps| warps.remove_at(&point))
            .unwrap_or_default();
        for owner in removed {
            tracing::info!(world_id = %world, owner_id = %owner, "Removed warp at point");
            self.notify_removed(owner);
            self.display_cache.invalidate(world, owner);
        }
        self.save().await;
    }

    /// Remove the warp owned by `owner` in `world`, if any.
    pub async fn remove_owner(&self, world: WorldId, owner: OwnerId) {
        let removed = self
            .worlds
            .get_mut(&world)
            .and_then(|mut warps| warps.owners.remove(&owner));
        if let Some(mapping) = removed {
            tracing::info!(world_id = %world, owner_id = %owner, "Removed warp");
            self.paint_inactive(mapping.point);
            self.notify_removed(owner);
        }
        self.display_cache.invalidate(world, owner);
        self.save().await;
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn get(&self, world: WorldId, owner: OwnerId) -> Option<WarpPoint> {
        self.worlds
            .get(&world)
            .and_then(|warps| warps.owners.get(&owner).map(|mapping| mapping.point))
    }

    pub fn owner_at(&self, point: WarpPoint) -> Option<OwnerId> {
        self.worlds
            .get(&point.world_id)
            .and_then(|warps| warps.owner_at(&point))
    }

    /// Name of the owner at `point`, or an empty string.
    pub fn owner_name_at(&self, point: WarpPoint) -> String {
        self.owner_at(point)
            .map(|owner| self.presence.display_name(owner))
            .unwrap_or_default()
    }

    pub fn has_warp(&self, world: WorldId, owner: OwnerId) -> bool {
        self.get(world, owner).is_some()
    }

    /// Every owner with a warp in `world`.
    pub fn list_all(&self, world: WorldId) -> HashSet<OwnerId> {
        self.worlds
            .get(&world)
            .map(|warps| warps.owners.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Warps of `world` in insertion order.
    pub fn entries(&self, world: WorldId) -> Vec<WarpEntry> {
        self.worlds
            .get(&world)
            .map(|warps| {
                warps
                    .in_order()
                    .into_iter()
                    .map(|(owner, point)| WarpEntry::new(owner, point))
                    .collect()
            })
            .unwrap_or_default()
    }

    // =========================================================================
    // Listing
    // =========================================================================

    /// Start a recency listing of `world`.
    ///
    /// The owner set is captured now; recency look-ups run on a blocking
    /// worker. Must be called from within a tokio runtime.
    pub fn request_sorted(&self, world: WorldId) -> ListingTicket {
        let owners: Vec<OwnerId> = self
            .entries(world)
            .into_iter()
            .map(|entry| entry.owner_id)
            .collect();
        let recency = Arc::clone(&self.recency);
        let handle = tokio::task::spawn_blocking(move || {
            let stamped = owners
                .into_iter()
                .map(|owner| (owner, recency.last_active(owner)))
                .collect();
            sort_by_recency(stamped, MAX_WARPS)
        });
        ListingTicket::new(world, handle)
    }

    /// Request and await a listing in one step.
    pub async fn list_sorted(&self, world: WorldId) -> Result<DirectoryListing, ListingError> {
        self.request_sorted(world).wait().await
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn snapshot(&self) -> Vec<WarpEntry> {
        let mut worlds: Vec<WorldId> = self.worlds.iter().map(|w| *w.key()).collect();
        worlds.sort();
        worlds
            .into_iter()
            .flat_map(|world| self.entries(world))
            .collect()
    }

    fn teardown(&self, world: WorldId, owner: OwnerId, point: WarpPoint) {
        self.paint_inactive(point);
        self.notify_removed(owner);
        self.display_cache.invalidate(world, owner);
    }

    fn paint_inactive(&self, point: WarpPoint) {
        if let Err(e) = self
            .signs
            .paint_sign(point, &self.welcome_line, SignTone::Inactive)
        {
            tracing::warn!(point = %point, error = %e, "Could not repaint removed warp sign");
        }
    }

    fn notify_removed(&self, owner: OwnerId) {
        if self.presence.is_online(owner) {
            self.presence
                .send_message(owner, Message::new(message_keys::SIGN_REMOVED));
        }
    }
}
