use super::documents::{save_state, PersistenceError, SavedState};
use crate::achievements::AchievementBook;
use crate::progress::UserProgress;
use crate::store::DailyStore;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Receives a full state snapshot after every mutation
pub trait StateSink {
    fn save(
        &mut self,
        store: &DailyStore,
        progress: &UserProgress,
        achievements: &AchievementBook,
    ) -> Result<(), PersistenceError>;
}

/// Writes the three JSON documents into a directory
#[derive(Debug, Clone)]
pub struct JsonDirSink {
    dir: PathBuf,
}

impl JsonDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &std::path::Path {
        &self.dir
    }
}

impl StateSink for JsonDirSink {
    fn save(
        &mut self,
        store: &DailyStore,
        progress: &UserProgress,
        achievements: &AchievementBook,
    ) -> Result<(), PersistenceError> {
        save_state(&self.dir, store, progress, achievements)
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    saves: usize,
    last: Option<SavedState>,
    failing: bool,
}

/// In-memory sink. Clones share the recorded snapshots.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    inner: Rc<RefCell<MemoryState>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent saves fail, to exercise error paths
    pub fn set_failing(&self, failing: bool) {
        self.inner.borrow_mut().failing = failing;
    }

    pub fn save_count(&self) -> usize {
        self.inner.borrow().saves
    }

    pub fn last(&self) -> Option<SavedState> {
        self.inner.borrow().last.clone()
    }
}

impl StateSink for MemorySink {
    fn save(
        &mut self,
        store: &DailyStore,
        progress: &UserProgress,
        achievements: &AchievementBook,
    ) -> Result<(), PersistenceError> {
        let mut inner = self.inner.borrow_mut();
        if inner.failing {
            return Err(PersistenceError::Write {
                path: PathBuf::from("memory"),
                source: anyhow::anyhow!("memory sink set to fail"),
            });
        }
        inner.saves += 1;
        inner.last = Some(SavedState {
            store: store.clone(),
            progress: progress.clone(),
            achievements: achievements.clone(),
        });
        Ok(())
    }
}
