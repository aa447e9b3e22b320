use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::model::{Priority, Snapshot, Task, ThemeMode};

/// Storage key for the task/filter/sort snapshot
pub const SNAPSHOT_KEY: &str = "tasks";
/// Storage key for the theme preference
pub const THEME_KEY: &str = "theme";

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

/// Durable key-value store backed by a per-user data directory.
///
/// Each key maps to one file: JSON values live in `<key>.json`, the theme
/// preference is a raw string in `theme`. Writes go through a temp file in
/// the same directory followed by a rename.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at the given directory, creating it if needed
    pub fn open(dir: &Path) -> Result<Store, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Store {
            dir: dir.to_path_buf(),
        })
    }

    /// Default data directory: `$TICK_HOME`, else `$XDG_DATA_HOME/tick`,
    /// else `~/.local/share/tick`
    pub fn default_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("TICK_HOME") {
            return PathBuf::from(dir);
        }
        let data_dir = std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
        data_dir.join("tick")
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Serialize a value and durably write it under the given key
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::Serialize {
            key: key.to_string(),
            source: e,
        })?;
        self.write_atomic(&self.key_path(key), content.as_bytes())
    }

    /// Load and deserialize the value under the given key.
    /// A missing key is `None`; unreadable or unparsable content is an error.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let path = self.key_path(key);
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Read { path, source: e }),
        };
        let value = serde_json::from_str(&content).map_err(|e| StoreError::Parse {
            path,
            source: e,
        })?;
        Ok(Some(value))
    }

    /// Persist the theme preference as a raw string
    pub fn save_theme(&self, mode: ThemeMode) -> Result<(), StoreError> {
        self.write_atomic(&self.dir.join(THEME_KEY), mode.as_str().as_bytes())
    }

    /// Load the theme preference; absent or unrecognized falls back to light
    pub fn load_theme(&self) -> Result<ThemeMode, StoreError> {
        let path = self.dir.join(THEME_KEY);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(ThemeMode::parse(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(ThemeMode::default()),
            Err(e) => Err(StoreError::Read { path, source: e }),
        }
    }

    /// Seed the store with two sample tasks and a default filter/sort state.
    /// Never overwrites an existing snapshot. Returns whether it seeded.
    pub fn initialize_sample_data(&self) -> Result<bool, StoreError> {
        if self.key_path(SNAPSHOT_KEY).exists() {
            return Ok(false);
        }

        let now = chrono::Utc::now().timestamp_millis();
        let snapshot = Snapshot {
            tasks: vec![
                Task::new(
                    now,
                    "Welcome to tick! Your tasks live here".to_string(),
                    None,
                    Priority::Medium,
                    now,
                ),
                Task::new(
                    now + 1,
                    "Check this one off to see it move".to_string(),
                    None,
                    Priority::Low,
                    now + 1,
                ),
            ],
            ..Default::default()
        };
        self.save(SNAPSHOT_KEY, &snapshot)?;
        Ok(true)
    }

    /// Write via a temp file in the same directory, then rename into place
    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<(), StoreError> {
        let write_err = |e: std::io::Error| StoreError::Write {
            path: path.to_path_buf(),
            source: e,
        };
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(content).map_err(write_err)?;
        tmp.persist(path).map_err(|e| StoreError::Write {
            path: path.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}
