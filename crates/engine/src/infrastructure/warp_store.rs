//! SQLite-backed warp storage.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;
use warpsigns_domain::{OwnerId, WarpEntry, WarpPoint, WorldId};

use crate::infrastructure::ports::{RepoError, WarpStore};

/// SQLite implementation of the owner -> point map.
///
/// One row per sign location; rows keep their insertion (rowid) order so a
/// reload reproduces the directory's first-seen ordering.
pub struct SqliteWarpStore {
    pool: SqlitePool,
}

impl SqliteWarpStore {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        if let Some(parent) = std::path::Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepoError::database("warp_store", e))?;
            }
        }

        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("warp_store", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS warp_signs (
                world_id TEXT NOT NULL,
                owner_id TEXT NOT NULL,
                x INTEGER NOT NULL,
                y INTEGER NOT NULL,
                z INTEGER NOT NULL,
                PRIMARY KEY (world_id, x, y, z)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("warp_store", e))?;

        Ok(Self { pool })
    }
}

fn parse_uuid(column: &str, raw: &str) -> Result<Uuid, RepoError> {
    Uuid::parse_str(raw).map_err(|e| RepoError::serialization(format!("{column} {raw:?}: {e}")))
}

#[async_trait]
impl WarpStore for SqliteWarpStore {
    async fn load(&self) -> Result<Vec<WarpEntry>, RepoError> {
        let rows = sqlx::query("SELECT world_id, owner_id, x, y, z FROM warp_signs ORDER BY rowid")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("load_warps", e))?;

        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            let world_raw: String = row.get("world_id");
            let owner_raw: String = row.get("owner_id");
            let decoded = parse_uuid("world_id", &world_raw)
                .and_then(|w| parse_uuid("owner_id", &owner_raw).map(|o| (w, o)));
            let (world, owner) = match decoded {
                Ok(ids) => ids,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping malformed warp row");
                    continue;
                }
            };
            let point = WarpPoint::new(
                WorldId::from_uuid(world),
                row.get::<i32, _>("x"),
                row.get::<i32, _>("y"),
                row.get::<i32, _>("z"),
            );
            entries.push(WarpEntry::new(OwnerId::from_uuid(owner), point));
        }
        Ok(entries)
    }

    async fn save(&self, entries: &[WarpEntry]) -> Result<(), RepoError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| RepoError::database("save_warps", e))?;

        sqlx::query("DELETE FROM warp_signs")
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("save_warps", e))?;

        for entry in entries {
            sqlx::query(
                "INSERT OR REPLACE INTO warp_signs (world_id, owner_id, x, y, z) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(entry.world_id.to_string())
            .bind(entry.owner_id.to_string())
            .bind(entry.point.x)
            .bind(entry.point.y)
            .bind(entry.point.z)
            .execute(&mut *tx)
            .await
            .map_err(|e| RepoError::database("save_warps", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| RepoError::database("save_warps", e))
    }
}
