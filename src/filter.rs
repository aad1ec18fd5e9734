use chrono::NaiveDate;

use crate::model::{Task, TaskHandle};

/// Visibility flag per task: visible iff its due date equals `reference`.
pub fn filter_by_date(tasks: &[Task], reference: NaiveDate) -> Vec<bool> {
    tasks.iter().map(|t| t.due == reference).collect()
}

/// The visible subset, paired with handles.
pub fn visible(
    tasks: &[Task],
    reference: NaiveDate,
) -> impl Iterator<Item = (TaskHandle, &Task)> {
    tasks
        .iter()
        .enumerate()
        .filter(move |(_, t)| t.due == reference)
        .map(|(i, t)| (TaskHandle(i), t))
}
