//! Local mirror store: a JSON file holding the greeting list, newest first.
//!
//! This is the offline/fallback cache behind the repository. Reads degrade
//! to an empty list and writes to a logged no-op when the file is
//! unavailable, so mirror trouble never breaks an operation that already
//! survived a remote failure.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use tracing::{error, warn};
use uuid::Uuid;

use crate::core::config::AppConfig;
use crate::core::models::Greeting;
use crate::errors::GreetingError;

const DEFAULT_MIRROR_PATH: &str = "/tmp/eid-greetings.json";

/// File-backed mirror of the greeting list.
///
/// Read-modify-write cycles are serialized through an internal mutex; the
/// browser original relied on single-threaded event scheduling for this.
pub struct LocalMirror {
    path: PathBuf,
    lock: Mutex<()>,
}

impl LocalMirror {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Builds a mirror at the configured path, or the default under `/tmp`.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config
                .local_mirror_path
                .as_deref()
                .unwrap_or(DEFAULT_MIRROR_PATH),
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns all mirrored greetings, newest first.
    ///
    /// An unreadable or corrupt mirror degrades to an empty list.
    #[must_use]
    pub fn list(&self) -> Vec<Greeting> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.read_records()
    }

    /// Prepends a greeting to the mirror, assigning an id if it has none,
    /// and returns the stored record.
    ///
    /// A failed write is logged and the record is still returned so the
    /// caller can show it for the rest of the session.
    pub fn save(&self, mut greeting: Greeting) -> Greeting {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut records = self.read_records();
        if greeting.id.is_empty() {
            greeting.id = next_local_id(&records);
        }

        records.insert(0, greeting.clone());
        if let Err(e) = self.write_records(&records) {
            error!("Error saving local greeting: {}", e);
        }

        greeting
    }

    /// Removes the greeting with the given id, if present.
    ///
    /// Returns `true` once the id is no longer in the mirror; deleting an
    /// absent id is a successful no-op.
    pub fn delete(&self, id: &str) -> bool {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut records = self.read_records();
        let before = records.len();
        records.retain(|g| g.id != id);
        if records.len() == before {
            return true;
        }

        match self.write_records(&records) {
            Ok(()) => true,
            Err(e) => {
                error!("Error deleting local greeting: {}", e);
                false
            }
        }
    }

    fn read_records(&self) -> Vec<Greeting> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                warn!("Error loading local greetings: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(records) => records,
            Err(e) => {
                warn!("Error parsing local greetings, treating mirror as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn write_records(&self, records: &[Greeting]) -> Result<(), GreetingError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let encoded = serde_json::to_string(records)?;
        fs::write(&self.path, encoded)?;
        Ok(())
    }
}

/// Client-generated id for a record that only exists in the mirror.
/// Timestamp-derived like the original client; falls back to a UUID when two
/// saves land in the same millisecond.
fn next_local_id(existing: &[Greeting]) -> String {
    let id = Utc::now().timestamp_millis().to_string();
    if existing.iter().any(|g| g.id == id) {
        return Uuid::new_v4().to_string();
    }
    id
}
