//! Recency-sorted directory listings.
//!
//! Listing is the only suspension point of the core: the owner snapshot is
//! taken when the listing is requested, recency look-ups run on a blocking
//! worker, and the caller awaits a single-shot [`ListingTicket`].

use std::collections::BTreeMap;

use tokio::task::JoinHandle;
use warpsigns_domain::{OwnerId, WorldId};

/// Upper bound on the number of owners in one listing.
pub const MAX_WARPS: usize = 600;

/// Owners of one world, most recently active first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub world_id: WorldId,
    owners: Vec<OwnerId>,
}

impl DirectoryListing {
    pub fn new(world_id: WorldId, owners: Vec<OwnerId>) -> Self {
        Self { world_id, owners }
    }

    pub fn owners(&self) -> &[OwnerId] {
        &self.owners
    }

    pub fn into_owners(self) -> Vec<OwnerId> {
        self.owners
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Recency lookup for world {world_id} did not complete: {message}")]
    Worker { world_id: WorldId, message: String },
}

/// Pending listing for one world.
///
/// Reflects the directory as it was when the ticket was issued; removals
/// landing afterwards are not seen here.
pub struct ListingTicket {
    world_id: WorldId,
    handle: JoinHandle<Vec<OwnerId>>,
}

impl ListingTicket {
    pub(crate) fn new(world_id: WorldId, handle: JoinHandle<Vec<OwnerId>>) -> Self {
        Self { world_id, handle }
    }

    pub fn world_id(&self) -> WorldId {
        self.world_id
    }

    /// True once the background work has finished and `wait` will not suspend.
    pub fn is_ready(&self) -> bool {
        self.handle.is_finished()
    }

    pub async fn wait(self) -> Result<DirectoryListing, ListingError> {
        let world_id = self.world_id;
        let owners = self.handle.await.map_err(|e| ListingError::Worker {
            world_id,
            message: e.to_string(),
        })?;
        Ok(DirectoryListing::new(world_id, owners))
    }
}

/// Order owners by recency, newest first, keeping at most `cap`.
///
/// `stamped` must be in directory insertion order. A timestamp already taken
/// by an earlier owner is replaced by one below the current minimum, so the
/// later owner lands after every owner seen so far.
pub fn sort_by_recency(stamped: Vec<(OwnerId, i64)>, cap: usize) -> Vec<OwnerId> {
    let mut by_time: BTreeMap<i64, OwnerId> = BTreeMap::new();
    for (owner, mut last_active) in stamped {
        if by_time.contains_key(&last_active) {
            if let Some((&lowest, _)) = by_time.first_key_value() {
                last_active = lowest.saturating_sub(1);
            }
        }
        by_time.insert(last_active, owner);
    }
    let mut owners: Vec<OwnerId> = by_time.into_values().rev().collect();
    owners.truncate(cap);
    owners
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first() {
        let (a, b, c) = (OwnerId::new(), OwnerId::new(), OwnerId::new());
        let sorted = sort_by_recency(vec![(a, 100), (b, 300), (c, 200)], MAX_WARPS);
        assert_eq!(sorted, vec![b, c, a]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let (a, b) = (OwnerId::new(), OwnerId::new());
        let sorted = sort_by_recency(vec![(a, 500), (b, 500)], MAX_WARPS);
        assert_eq!(sorted, vec![a, b]);
    }

    #[test]
    fn tied_owner_drops_below_current_minimum() {
        let (a, b, c) = (OwnerId::new(), OwnerId::new(), OwnerId::new());
        // c ties with a after b is already the minimum; c goes below b.
        let sorted = sort_by_recency(vec![(a, 10), (b, 5), (c, 10)], MAX_WARPS);
        assert_eq!(sorted, vec![a, b, c]);
    }

    #[test]
    fn never_played_owners_cluster_in_insertion_order() {
        let owners: Vec<OwnerId> = (0..5).map(|_| OwnerId::new()).collect();
        let stamped = owners.iter().map(|&o| (o, 0)).collect();
        assert_eq!(sort_by_recency(stamped, MAX_WARPS), owners);
    }

    #[test]
    fn keeps_the_most_recent_when_over_capacity() {
        let owners: Vec<OwnerId> = (0..1000).map(|_| OwnerId::new()).collect();
        let stamped = owners
            .iter()
            .enumerate()
            .map(|(i, &o)| (o, i as i64 + 1))
            .collect();
        let sorted = sort_by_recency(stamped, MAX_WARPS);
        assert_eq!(sorted.len(), MAX_WARPS);
        assert_eq!(sorted[0], owners[999]);
        assert_eq!(sorted[MAX_WARPS - 1], owners[400]);
    }

    #[tokio::test]
    async fn ticket_resolves_to_listing() {
        let owner = OwnerId::new();
        let world = WorldId::new();
        let ticket = ListingTicket::new(world, tokio::spawn(async move { vec![owner] }));
        assert_eq!(ticket.world_id(), world);
        let listing = ticket.wait().await.expect("listing");
        assert_eq!(listing.owners(), &[owner]);
        assert_eq!(listing.world_id, world);
    }

    #[tokio::test]
    async fn panicked_worker_is_reported() {
        let world = WorldId::new();
        let handle: JoinHandle<Vec<OwnerId>> = tokio::spawn(async {
            let owners: Vec<OwnerId> = Vec::new();
            assert!(!owners.is_empty(), "recency backend exploded");
            owners
        });
        let ticket = ListingTicket::new(world, handle);
        assert!(matches!(ticket.wait().await, Err(ListingError::Worker { .. })));
    }
}
