//! Application state and composition.

use std::sync::Arc;

use warpsigns_domain::{OwnerId, WorldId};

use crate::entities::{DisplayCache, WarpDirectory};
use crate::infrastructure::{
    app_settings::WarpSettings,
    clock::{SystemClock, SystemRandom},
    ports::{
        ClockPort, GameWorldPort, PanelPort, PermissionPort, PresencePort, RandomPort,
        RecencyPort, RepoError, SafetyPort, SignPort, TeleportPort, WarpEventPort, WarpStore,
    },
};
use crate::use_cases::panel::{BuildWarpPage, PanelAction, PanelError};
use crate::use_cases::teleport::{WarpOutcome, WarpPlayer};

/// Host services the warp system is wired against.
pub struct HostPorts {
    pub signs: Arc<dyn SignPort>,
    pub safety: Arc<dyn SafetyPort>,
    pub teleport: Arc<dyn TeleportPort>,
    pub worlds: Arc<dyn GameWorldPort>,
    pub recency: Arc<dyn RecencyPort>,
    pub presence: Arc<dyn PresencePort>,
    pub permissions: Arc<dyn PermissionPort>,
    pub panels: Arc<dyn PanelPort>,
    pub events: Arc<dyn WarpEventPort>,
}

/// Main application state.
///
/// Built once when the host enables the addon and torn down with
/// [`App::shutdown`].
pub struct App {
    pub settings: WarpSettings,
    pub directory: Arc<WarpDirectory>,
    pub display_cache: Arc<DisplayCache>,
    pub use_cases: UseCases,
    panels: Arc<dyn PanelPort>,
}

/// Container for all use cases.
pub struct UseCases {
    pub panel: Arc<BuildWarpPage>,
    pub teleport: Arc<WarpPlayer>,
}

impl App {
    pub fn new(
        settings: WarpSettings,
        store: Arc<dyn WarpStore>,
        host: HostPorts,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
    ) -> Self {
        let display_cache = Arc::new(DisplayCache::new(
            &settings,
            host.signs.clone(),
            host.permissions.clone(),
            host.worlds.clone(),
            clock,
        ));

        let directory = Arc::new(WarpDirectory::new(
            settings.welcome_line.clone(),
            store,
            host.signs.clone(),
            host.presence.clone(),
            host.recency.clone(),
            host.events.clone(),
            display_cache.clone(),
        ));

        let use_cases = UseCases {
            panel: Arc::new(BuildWarpPage::new(
                directory.clone(),
                display_cache.clone(),
                host.presence.clone(),
                random,
                settings.random_allowed,
                &settings.name_format,
            )),
            teleport: Arc::new(WarpPlayer::new(
                directory.clone(),
                host.signs.clone(),
                host.safety.clone(),
                host.teleport.clone(),
                host.worlds.clone(),
                host.presence.clone(),
            )),
        };

        Self {
            settings,
            directory,
            display_cache,
            use_cases,
            panels: host.panels,
        }
    }

    /// Wire against the system clock and an unseeded random source.
    pub fn with_system_sources(
        settings: WarpSettings,
        store: Arc<dyn WarpStore>,
        host: HostPorts,
    ) -> Self {
        Self::new(
            settings,
            store,
            host,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
        )
    }

    /// Load the stored warps. Called once at startup.
    pub async fn load(&self) -> Result<usize, RepoError> {
        self.directory.load().await
    }

    /// Build page `index` of the warp panel and open it for `viewer`.
    pub async fn show_warp_panel(
        &self,
        world: WorldId,
        viewer: OwnerId,
        index: usize,
    ) -> Result<(), PanelError> {
        let page = self.use_cases.panel.execute(world, viewer, index).await?;
        self.panels.open(viewer, page);
        Ok(())
    }

    /// Handle a click on a panel slot.
    ///
    /// The viewer's panel is closed first. Returns the warp outcome for warp
    /// slots and `None` for navigation.
    pub async fn handle_click(
        &self,
        viewer: OwnerId,
        action: PanelAction,
    ) -> Result<Option<WarpOutcome>, PanelError> {
        self.panels.close(viewer);
        match action {
            PanelAction::Warp { world_id, owner_id } => Ok(Some(
                self.use_cases
                    .teleport
                    .execute(world_id, viewer, owner_id)
                    .await,
            )),
            PanelAction::OpenPage { world_id, index } => {
                self.show_warp_panel(world_id, viewer, index).await?;
                Ok(None)
            }
        }
    }

    /// Flush the display cache and save the directory one last time.
    pub async fn shutdown(&self) {
        self.display_cache.flush();
        self.directory.save().await;
        tracing::info!("Warp system shut down");
    }
}
