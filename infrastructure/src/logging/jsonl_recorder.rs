//! JSONL file writer for completed triages.
//!
//! Each [`TriageRecord`] is serialized as a single JSON line with a
//! `created_at` timestamp and appended to the file via a buffered writer.

use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use triage_application::{TriageRecord, TriageRecorder};
use triage_domain::{Category, UrgencyScore};

/// One line of the history file.
#[derive(Serialize)]
struct HistoryLine<'a> {
    feedback_text: &'a str,
    category: Category,
    urgency_score: UrgencyScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    processing_time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    provider: Option<&'a str>,
    #[serde(skip_serializing_if = "is_blank")]
    reasoning: &'a str,
    created_at: String,
}

fn is_blank(s: &&str) -> bool {
    s.trim().is_empty()
}

/// Append-only triage history.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and on `Drop`.
pub struct JsonlTriageRecorder {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlTriageRecorder {
    /// Open (or create) the history file at `path` for appending.
    ///
    /// Creates parent directories as needed. Returns `None` if the file
    /// cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create triage history directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open triage history file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the history file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TriageRecorder for JsonlTriageRecorder {
    fn record(&self, record: &TriageRecord) {
        let result = &record.result;
        let line = HistoryLine {
            feedback_text: &record.feedback_text,
            category: result.category,
            urgency_score: result.urgency_score,
            confidence_score: result.confidence_score,
            processing_time: result.processing_time,
            provider: result.provider_name.as_deref(),
            reasoning: &result.reasoning,
            created_at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        };

        let json = match serde_json::to_string(&line) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize triage record: {}", e);
                return;
            }
        };

        if let Ok(mut writer) = self.writer.lock()
            && let Err(e) = writeln!(writer, "{}", json).and_then(|_| writer.flush())
        {
            warn!("Could not write triage history {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlTriageRecorder {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
