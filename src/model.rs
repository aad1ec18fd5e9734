use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DocketError, Result};

/// Canonical on-disk and display form for due dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single to-do item.
///
/// Field order matters: the task file is written in declaration order
/// (`task`, `due`, `completed`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task")]
    pub text: String,
    pub due: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Build a pending task, trimming `text`. Returns `None` for blank input.
    pub fn new(text: &str, due: NaiveDate) -> Option<Self> {
        let text = normalize_text(text)?;
        Some(Self {
            text,
            due,
            completed: false,
        })
    }

    /// Past due and still open, as seen from `reference`.
    pub fn is_overdue(&self, reference: NaiveDate) -> bool {
        !self.completed && self.due < reference
    }
}

/// Position of a task in the store.
///
/// Valid only until the next mutation of the store; callers re-query after
/// add/delete instead of holding on to handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskHandle(pub usize);

impl TaskHandle {
    /// Convert a 1-based row number as shown to users. Row 0 has no handle.
    pub fn from_row(row: usize) -> Option<Self> {
        row.checked_sub(1).map(Self)
    }

    pub fn row(self) -> usize {
        self.0 + 1
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.row())
    }
}

/// Trim user input; blank strings are rejected.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse a user-supplied date: `YYYY-MM-DD` or `today`/`tomorrow`/`yesterday`
/// relative to `today`.
pub fn parse_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let raw = input.trim();
    let relative = match raw.to_ascii_lowercase().as_str() {
        "today" => Some(today),
        "tomorrow" => today.checked_add_days(Days::new(1)),
        "yesterday" => today.checked_sub_days(Days::new(1)),
        _ => None,
    };
    if let Some(date) = relative {
        return Ok(date);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| DocketError::InvalidDate(raw.to_string()))
}
