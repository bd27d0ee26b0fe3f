use super::files::{atomic_write, read_file, ACHIEVEMENT_FILE, STORE_FILE, USER_FILE};
use crate::achievements::AchievementBook;
use crate::domain::Level;
use crate::progress::UserProgress;
use crate::store::DailyStore;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
    #[error("corrupt state file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode state for {}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Everything the tracker persists
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedState {
    pub store: DailyStore,
    pub progress: UserProgress,
    pub achievements: AchievementBook,
}

impl SavedState {
    /// Fresh state for a first run
    pub fn fresh(level: Level, today: NaiveDate) -> Self {
        let mut progress = UserProgress::new(today);
        progress.set_level(level);
        Self {
            store: DailyStore::new(level, today),
            progress,
            achievements: AchievementBook::default(),
        }
    }
}

/// Load a JSON document, or build it with `fallback` when the file is missing
pub fn load_json_or_else<T, F>(path: &Path, fallback: F) -> Result<T, PersistenceError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let content = read_file(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    match content {
        Some(content) if !content.trim().is_empty() => {
            serde_json::from_str(&content).map_err(|source| PersistenceError::Parse {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => Ok(fallback()),
    }
}

/// Save a JSON document atomically, pretty-printed
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<(), PersistenceError> {
    let json = serde_json::to_string_pretty(value).map_err(|source| PersistenceError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    atomic_write(path, &json).map_err(|source| PersistenceError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Load all three documents from `dir`, defaulting whatever is missing
pub fn load_state(dir: &Path, default_level: Level, today: NaiveDate) -> Result<SavedState, PersistenceError> {
    let store = load_json_or_else(&dir.join(STORE_FILE), || DailyStore::new(default_level, today))?;

    let progress: UserProgress = load_json_or_else(&dir.join(USER_FILE), || {
        let mut progress = UserProgress::new(today);
        progress.set_level(store.current_level);
        progress
    })?;

    let achievements = load_json_or_else(&dir.join(ACHIEVEMENT_FILE), AchievementBook::default)?;

    Ok(SavedState {
        store,
        progress: progress.normalized(),
        achievements,
    })
}

/// Write all three documents to `dir`
pub fn save_state(
    dir: &Path,
    store: &DailyStore,
    progress: &UserProgress,
    achievements: &AchievementBook,
) -> Result<(), PersistenceError> {
    save_json(&dir.join(STORE_FILE), store)?;
    save_json(&dir.join(USER_FILE), progress)?;
    save_json(&dir.join(ACHIEVEMENT_FILE), achievements)?;
    Ok(())
}
