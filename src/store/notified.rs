use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::debug;

use crate::error::Result;
use crate::store::{read_json, write_atomic};

/// Persisted record of the last day a reminder went out for each
/// `(task text, due date)` pair.
///
/// On disk this is a flat JSON object keyed by `"<task>_<due>"`. Entries are
/// never removed, so deleted or completed tasks leave their keys behind.
#[derive(Debug)]
pub struct NotifiedLog {
    path: PathBuf,
    entries: BTreeMap<String, NaiveDate>,
}

impl NotifiedLog {
    /// Load the log. A missing file yields an empty log.
    pub fn load(path: &Path) -> Result<Self> {
        let entries: BTreeMap<String, NaiveDate> = read_json(path)?.unwrap_or_default();
        debug!(
            "loaded {} notification record(s) from {}",
            entries.len(),
            path.display()
        );
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Composite key for a task: text and due date joined by `_`.
    pub fn key(text: &str, due: NaiveDate) -> String {
        format!("{text}_{due}")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_notified(&self, text: &str, due: NaiveDate) -> Option<NaiveDate> {
        self.entries.get(&Self::key(text, due)).copied()
    }

    pub fn was_notified_on(&self, text: &str, due: NaiveDate, day: NaiveDate) -> bool {
        self.last_notified(text, due) == Some(day)
    }

    pub fn record(&mut self, text: &str, due: NaiveDate, day: NaiveDate) {
        self.entries.insert(Self::key(text, due), day);
    }

    /// Rewrite the log file in full.
    pub fn save(&self) -> Result<()> {
        let json = serde_json::to_vec(&self.entries)?;
        write_atomic(&self.path, &json)?;
        debug!(
            "wrote {} notification record(s) to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
