//! Test fixtures: an in-memory host and store plus a wired service graph.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::test_fixtures::{FakeHost, TestServices};
//!
//! let host = FakeHost::new();
//! let services = TestServices::new(&host);
//! services.directory.add(owner, point).await;
//! ```

pub mod host_mocks;
pub mod store_mocks;

use std::sync::Arc;

use chrono::{TimeZone, Utc};

pub use host_mocks::{FakeHost, HostState};
pub use store_mocks::InMemoryWarpStore;

use crate::app::App;
use crate::entities::{DisplayCache, WarpDirectory};
use crate::infrastructure::app_settings::WarpSettings;
use crate::infrastructure::clock::{FixedClock, FixedRandom};
use crate::infrastructure::ports::RandomPort;
use crate::use_cases::panel::BuildWarpPage;
use crate::use_cases::teleport::WarpPlayer;

/// A full [`App`] over a [`FakeHost`] and an [`InMemoryWarpStore`].
pub struct TestServices {
    pub app: App,
    pub store: Arc<InMemoryWarpStore>,
    pub directory: Arc<WarpDirectory>,
    pub display_cache: Arc<DisplayCache>,
    pub build_page: Arc<BuildWarpPage>,
    pub warp_player: Arc<WarpPlayer>,
}

impl TestServices {
    /// Default settings, random draws always pick index 0.
    pub fn new(host: &Arc<FakeHost>) -> Self {
        Self::with_settings(host, WarpSettings::default(), Arc::new(FixedRandom(0)))
    }

    pub fn with_settings(
        host: &Arc<FakeHost>,
        settings: WarpSettings,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let store = Arc::new(InMemoryWarpStore::new());
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0)
                .single()
                .expect("valid timestamp"),
        ));
        let app = App::new(settings, store.clone(), host.ports(), clock, random);
        Self {
            store,
            directory: app.directory.clone(),
            display_cache: app.display_cache.clone(),
            build_page: app.use_cases.panel.clone(),
            warp_player: app.use_cases.teleport.clone(),
            app,
        }
    }
}
