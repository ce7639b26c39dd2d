//! In-memory warp store for testing.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use warpsigns_domain::WarpEntry;

use crate::infrastructure::ports::{RepoError, WarpStore};

/// Keeps the last saved list; can be told to fail saves.
#[derive(Default)]
pub struct InMemoryWarpStore {
    rows: Mutex<Vec<WarpEntry>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
    first_save_delay: Mutex<Option<Duration>>,
}

impl InMemoryWarpStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored rows without counting a save.
    pub fn seed(&self, rows: Vec<WarpEntry>) {
        *self.rows.lock().expect("store rows poisoned") = rows;
    }

    pub fn saved(&self) -> Vec<WarpEntry> {
        self.rows.lock().expect("store rows poisoned").clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make the next save sleep for `delay` before it commits.
    pub fn delay_first_save(&self, delay: Duration) {
        *self.first_save_delay.lock().expect("store delay poisoned") = Some(delay);
    }
}

#[async_trait]
impl WarpStore for InMemoryWarpStore {
    async fn load(&self) -> Result<Vec<WarpEntry>, RepoError> {
        Ok(self.saved())
    }

    async fn save(&self, entries: &[WarpEntry]) -> Result<(), RepoError> {
        let delay = self
            .first_save_delay
            .lock()
            .expect("store delay poisoned")
            .take();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(RepoError::database("save", "disk full"));
        }
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.seed(entries.to_vec());
        Ok(())
    }
}
