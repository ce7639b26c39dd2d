//! Display cache - resolved sign text and icons for the warp panel.
//!
//! Reading a sign is a round-trip to the host, so every panel render goes
//! through this cache. Removal from the directory always invalidates, which
//! keeps the cache from masking a deletion.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use warpsigns_domain::common::{none_if_empty, translate_color_codes};
use warpsigns_domain::{DisplayRecord, MaterialId, OwnerId, SignDisplay, WarpPoint, WorldId};

use crate::infrastructure::app_settings::WarpSettings;
use crate::infrastructure::ports::{ClockPort, GameWorldPort, PermissionPort, SignPort};

/// Permission node (after the game-mode prefix) that carries a custom icon.
const ICON_PERMISSION: &str = "island.warp";

struct CachedDisplay {
    record: DisplayRecord,
    cached_at: DateTime<Utc>,
}

/// Per `(world, owner)` cache of [`DisplayRecord`]s.
pub struct DisplayCache {
    entries: DashMap<(WorldId, OwnerId), CachedDisplay>,
    ttl: Duration,
    lore_prefix: String,
    default_icon: String,
    signs: Arc<dyn SignPort>,
    permissions: Arc<dyn PermissionPort>,
    worlds: Arc<dyn GameWorldPort>,
    clock: Arc<dyn ClockPort>,
}

impl DisplayCache {
    pub fn new(
        settings: &WarpSettings,
        signs: Arc<dyn SignPort>,
        permissions: Arc<dyn PermissionPort>,
        worlds: Arc<dyn GameWorldPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            entries: DashMap::new(),
            ttl: settings.display_cache_ttl(),
            lore_prefix: translate_color_codes('&', &settings.lore_format),
            default_icon: settings.icon.clone(),
            signs,
            permissions,
            worlds,
            clock,
        }
    }

    /// Cached record for `owner`, reading the sign at `anchor` on a miss.
    ///
    /// `Absent` is cached too and stays until [`invalidate`](Self::invalidate);
    /// present records are re-read once older than the TTL.
    pub fn get(&self, world: WorldId, owner: OwnerId, anchor: Option<WarpPoint>) -> DisplayRecord {
        let key = (world, owner);
        if let Some(cached) = self.entries.get(&key) {
            if self.is_fresh(&cached) {
                return cached.record.clone();
            }
        }

        let record = self.resolve(world, owner, anchor);
        self.entries.insert(
            key,
            CachedDisplay {
                record: record.clone(),
                cached_at: self.clock.now(),
            },
        );
        record
    }

    /// Drop the cached record. Returns whether one was present.
    pub fn invalidate(&self, world: WorldId, owner: OwnerId) -> bool {
        self.entries.remove(&(world, owner)).is_some()
    }

    /// Drop every cached record (shutdown).
    pub fn flush(&self) -> usize {
        let dropped = self.entries.len();
        self.entries.clear();
        tracing::debug!(dropped, "Flushed warp display cache");
        dropped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, cached: &CachedDisplay) -> bool {
        match cached.record {
            DisplayRecord::Absent => true,
            DisplayRecord::Present(_) => self
                .clock
                .now()
                .signed_duration_since(cached.cached_at)
                .to_std()
                // A cached_at in the future counts as brand new.
                .map_or(true, |age| age < self.ttl),
        }
    }

    fn resolve(&self, world: WorldId, owner: OwnerId, anchor: Option<WarpPoint>) -> DisplayRecord {
        let Some(point) = anchor else {
            return DisplayRecord::Absent;
        };
        let state = self.signs.read_sign(point);
        let Some(reading) = state.reading() else {
            return DisplayRecord::Absent;
        };

        // First line is the welcome line.
        let lines = reading
            .lines
            .iter()
            .skip(1)
            .filter(|line| !line.is_empty())
            .map(|line| format!("{}{}", self.lore_prefix, line))
            .collect();

        let icon_name = match self
            .worlds
            .permission_prefix(world)
            .as_deref()
            .and_then(none_if_empty)
        {
            Some(prefix) => {
                let permissions = self.permissions.effective_permissions(owner);
                permission_value(
                    permissions.as_deref(),
                    &format!("{prefix}{ICON_PERMISSION}"),
                    &self.default_icon,
                )
            }
            None => self.default_icon.clone(),
        };

        let icon = MaterialId::parse(&icon_name)
            .filter(|icon| !icon.is_sign() && self.worlds.is_item_material(icon))
            .unwrap_or_else(|| reading.item_material.clone());

        DisplayRecord::Present(SignDisplay { lines, icon })
    }
}

/// Value following `prefix.` in the first matching permission node.
///
/// Wildcard nodes (`prefix.*`) are skipped so a more specific node can win.
/// Players without effective permissions (offline) get `default`.
pub fn permission_value(permissions: Option<&[String]>, prefix: &str, default: &str) -> String {
    let Some(permissions) = permissions else {
        return default.to_string();
    };
    let prefix = format!("{}.", prefix.strip_suffix('.').unwrap_or(prefix));
    let wildcard = format!("{prefix}*");

    permissions
        .iter()
        .filter(|perm| perm.starts_with(&prefix) && !perm.contains(&wildcard))
        .find_map(|perm| {
            let rest = &perm[prefix.len()..];
            let value = rest.find(&prefix).map_or(rest, |end| &rest[..end]);
            (!value.is_empty()).then(|| value.to_string())
        })
        .unwrap_or_else(|| default.to_string())
}
