//! WarpSigns Engine - warp store maintenance entry point.
//!
//! Opens the configured warp store and reports how many warps each world
//! holds. Warp rows are never modified.

use std::collections::BTreeMap;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use warpsigns_domain::WorldId;
use warpsigns_engine::infrastructure::{
    app_settings::WarpSettings, ports::WarpStore, warp_store::SqliteWarpStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the engine may run from `crates/engine`).
    load_dotenv_from_repo_root();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warpsigns_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = WarpSettings::from_env()?;
    tracing::info!(path = %settings.sqlite_path, "Opening warp store");

    let store = SqliteWarpStore::new(&settings.sqlite_path).await?;
    let entries = store.load().await?;

    let mut per_world: BTreeMap<WorldId, usize> = BTreeMap::new();
    for entry in &entries {
        *per_world.entry(entry.world_id).or_default() += 1;
    }
    for (world_id, warps) in &per_world {
        tracing::info!(world_id = %world_id, warps, "World warps");
    }
    tracing::info!(
        warps = entries.len(),
        worlds = per_world.len(),
        "Warp store summary"
    );

    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
