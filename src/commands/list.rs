use chrono::NaiveDate;

use crate::error::Result;
use crate::facade::Docket;
use crate::model::TaskHandle;
use crate::output::{self, Format, TaskView};

/// Print tasks in store order, optionally limited to one due date and/or to
/// overdue tasks.
pub fn run(
    docket: &Docket,
    date: Option<NaiveDate>,
    overdue: bool,
    format: Format,
) -> Result<()> {
    let today = docket.today();
    let visible = match date {
        Some(d) => docket.filter_by_date(d),
        None => vec![true; docket.tasks().len()],
    };
    let views: Vec<TaskView<'_>> = docket
        .tasks()
        .iter()
        .enumerate()
        .filter(|(i, _)| visible[*i])
        .map(|(i, task)| TaskView::new(TaskHandle(i), task, today))
        .filter(|view| !overdue || view.overdue)
        .collect();
    output::print_tasks(&views, format)
}
