//! Caller-owned store of compressed outputs.
//!
//! A session keeps the codes of one compress run together with the exact
//! configuration that produced them, so a later decompress does not need the
//! original upload or the parameters retyped. Each session is one JSON file
//! named after its id.

use crate::error::{CliError, Result};
use log::debug;
use oxilzw::{Code, LzwConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default store directory, relative to the working directory.
pub const DEFAULT_STORE_DIR: &str = ".oxilzw-sessions";

/// One stored compress result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// Store key; also the file stem.
    pub id: String,
    /// Parameters the codes were produced with.
    pub config: LzwConfig,
    /// The compressed output.
    pub codes: Vec<Code>,
    /// Length of the input text in characters.
    pub original_chars: usize,
    /// Path of the compressed file, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Seconds since the Unix epoch.
    pub created: u64,
}

impl SessionRecord {
    pub fn new(
        id: impl Into<String>,
        config: LzwConfig,
        codes: Vec<Code>,
        original_chars: usize,
    ) -> Self {
        let created = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            id: id.into(),
            config,
            codes,
            original_chars,
            source: None,
            created,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Directory-backed session store.
#[derive(Debug, Clone)]
pub struct SessionStore {
    root: PathBuf,
}

impl SessionStore {
    /// Open a store rooted at `root`. The directory is created on first save.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reject ids that could escape the store directory.
    pub fn validate_id(id: &str) -> Result<()> {
        let valid = !id.is_empty()
            && id.len() <= 128
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(CliError::InvalidSessionId { id: id.to_string() })
        }
    }

    fn path_for(&self, id: &str) -> Result<PathBuf> {
        Self::validate_id(id)?;
        Ok(self.root.join(format!("{id}.json")))
    }

    /// Write a record, replacing any session with the same id.
    pub fn save(&self, record: &SessionRecord) -> Result<PathBuf> {
        let path = self.path_for(&record.id)?;
        fs::create_dir_all(&self.root)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(record)?)?;
        fs::rename(&tmp, &path)?;

        debug!(
            "saved session {} ({} codes) to {}",
            record.id,
            record.codes.len(),
            path.display()
        );
        Ok(path)
    }

    pub fn load(&self, id: &str) -> Result<SessionRecord> {
        let path = self.path_for(id)?;
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CliError::session_not_found(id));
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// All sessions, oldest first.
    pub fn list(&self) -> Result<Vec<SessionRecord>> {
        let dir = match fs::read_dir(&self.root) {
            Ok(dir) => dir,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records: Vec<SessionRecord> = Vec::new();
        for entry in dir {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }
            match fs::read(&path)
                .map_err(CliError::from)
                .and_then(|bytes| {
                    serde_json::from_slice::<SessionRecord>(&bytes).map_err(CliError::from)
                })
            {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("skipping unreadable session {}: {}", path.display(), e),
            }
        }

        records.sort_by(|a, b| a.created.cmp(&b.created).then_with(|| a.id.cmp(&b.id)));
        Ok(records)
    }

    pub fn remove(&self, id: &str) -> Result<()> {
        let path = self.path_for(id)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(CliError::session_not_found(id)),
            Err(e) => Err(e.into()),
        }
    }
}
