//! Persisted usage counter.
//!
//! A JSON record `{"count": <n>}` bumped once per program start. The counter is
//! cosmetic: every failure is logged and recovered, never propagated.
//!
//! Read-modify-write is not guarded against concurrent processes.

use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::model::PersistenceError;

/// On-disk shape of the counter record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsageCounterRecord {
    /// Number of program starts recorded so far.
    pub count: u64,
}

/// Counter backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct UsageCounter {
    path: PathBuf,
}

impl UsageCounter {
    /// Counter stored at `path`. Nothing is read until [`Self::increment_and_get`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the JSON record.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored count, increment, write it back and return the new value.
    ///
    /// An absent or malformed record counts as 0. A failed write is logged and
    /// the incremented value is still returned.
    pub fn increment_and_get(&self) -> u64 {
        let previous = match self.load() {
            Ok(Some(record)) => record.count,
            Ok(None) => {
                debug!(path = ?self.path, "No usage counter record, starting from zero");
                0
            }
            Err(err) => {
                warn!(error = %err, "Discarding unreadable usage counter");
                0
            }
        };

        let count = previous.saturating_add(1);
        if let Err(err) = self.store(UsageCounterRecord { count }) {
            warn!(error = %err, count, "Usage counter not persisted");
        }
        count
    }

    /// Read the record. `Ok(None)` if the file does not exist.
    pub fn load(&self) -> Result<Option<UsageCounterRecord>, PersistenceError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(PersistenceError::Read {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| PersistenceError::Malformed {
                path: self.path.clone(),
                source,
            })
    }

    /// Overwrite the record, creating parent directories as needed.
    pub fn store(&self, record: UsageCounterRecord) -> Result<(), PersistenceError> {
        let write_error = |source| PersistenceError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }

        let json = serde_json::to_string(&record)
            .map_err(|err| write_error(std::io::Error::new(ErrorKind::InvalidData, err)))?;
        std::fs::write(&self.path, json).map_err(write_error)
    }
}

#[cfg(test)]
#[path = "counter_tests.rs"]
mod tests;
