//! JSONL history reader.
//!
//! Reads the file written by [`JsonlTriageRecorder`](super::JsonlTriageRecorder).
//! Lines are appended in completion order, so newest first is the file
//! reversed.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use triage_application::{HistoryError, TriageHistory};
use triage_domain::HistoryEntry;

/// Read side of the triage history file.
pub struct JsonlTriageHistory {
    path: PathBuf,
}

impl JsonlTriageHistory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unreadable(&self, e: impl std::fmt::Display) -> HistoryError {
        HistoryError::Unreadable {
            location: self.path.display().to_string(),
            message: e.to_string(),
        }
    }
}

impl TriageHistory for JsonlTriageHistory {
    fn entries(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No triage history at {}", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.unreadable(e)),
        };

        let mut entries = Vec::new();
        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| self.unreadable(e))?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<HistoryEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!(
                    "Skipping malformed history line {} in {}: {}",
                    index + 1,
                    self.path.display(),
                    e
                ),
            }
        }

        entries.reverse();
        Ok(entries)
    }
}
