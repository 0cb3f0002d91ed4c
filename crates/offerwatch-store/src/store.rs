use std::fs;
use std::io;
use std::path::PathBuf;

use offerwatch_core::Snapshot;

use crate::error::StoreError;

/// File-backed store for the previous run's snapshot.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Loads the previously persisted snapshot.
    ///
    /// A missing file is first-run state and yields the empty snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] for any read failure other than
    /// file-not-found, and [`StoreError::Decode`] when the file exists but
    /// does not hold a valid snapshot.
    pub fn load(&self) -> Result<Snapshot, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no previous snapshot, starting empty");
                return Ok(Snapshot::new());
            }
            Err(e) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source: e,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| StoreError::Decode {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Persists `snapshot`, creating the parent directory when needed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if serialization fails and
    /// [`StoreError::Io`] if the directory or file cannot be written. Save
    /// failures must not be swallowed: an unsaved snapshot re-fires the
    /// next run's diff.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let bytes = serde_json::to_vec_pretty(snapshot).map_err(StoreError::Encode)?;
        fs::write(&self.path, bytes).map_err(|e| StoreError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}
