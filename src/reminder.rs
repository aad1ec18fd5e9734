//! Once-per-day reminders for due and overdue tasks.
//!
//! Evaluation is split in two: [`pending_reminders`] decides what is owed
//! today from the task list and the notification log, and [`run`] sends
//! those reminders, records them in the log and rewrites the log file.

use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;

use crate::error::Result;
use crate::model::Task;
use crate::notify::NotificationSink;
use crate::store::notified::NotifiedLog;

pub const REMINDER_TITLE: &str = "Task Reminder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    DueToday,
    Overdue,
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DueToday => write!(f, "due_today"),
            Self::Overdue => write!(f, "overdue"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reminder {
    pub text: String,
    pub due: NaiveDate,
    pub urgency: Urgency,
}

impl Reminder {
    pub fn message(&self) -> String {
        match self.urgency {
            Urgency::DueToday => format!("'{}' is due today!", self.text),
            Urgency::Overdue => format!("'{}' is due and overdue!", self.text),
        }
    }
}

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReminderReport {
    pub today: NaiveDate,
    pub sent: Vec<Reminder>,
    /// Reminders whose delivery failed. They still count as sent for today.
    pub failed: usize,
}

/// Open tasks due on or before `today` that have not been reminded today.
///
/// Two tasks with the same text and due date share a log key, so only the
/// first of them is reported.
pub fn pending_reminders(tasks: &[Task], log: &NotifiedLog, today: NaiveDate) -> Vec<Reminder> {
    let mut owed: Vec<Reminder> = Vec::new();
    for task in tasks {
        if task.completed || task.due > today {
            continue;
        }
        if log.was_notified_on(&task.text, task.due, today) {
            continue;
        }
        if owed.iter().any(|r| r.text == task.text && r.due == task.due) {
            continue;
        }
        let urgency = if task.due == today {
            Urgency::DueToday
        } else {
            Urgency::Overdue
        };
        owed.push(Reminder {
            text: task.text.clone(),
            due: task.due,
            urgency,
        });
    }
    owed
}

/// Send today's reminders, mark them in `log` and persist the log.
///
/// The log is rewritten even when nothing was sent. Delivery failures are
/// logged and do not stop the scan.
pub fn run(
    tasks: &[Task],
    log: &mut NotifiedLog,
    today: NaiveDate,
    sink: &dyn NotificationSink,
) -> Result<ReminderReport> {
    let owed = pending_reminders(tasks, log, today);
    let mut failed = 0;
    for reminder in &owed {
        let message = reminder.message();
        match sink.notify(REMINDER_TITLE, &message) {
            Ok(()) => info!("reminder sent: {message}"),
            Err(e) => {
                failed += 1;
                warn!("reminder for '{}' not delivered: {e}", reminder.text);
            }
        }
        log.record(&reminder.text, reminder.due, today);
    }
    log.save()?;
    Ok(ReminderReport {
        today,
        sent: owed,
        failed,
    })
}
