use crate::error::Result;
use crate::facade::Docket;
use crate::model::TaskHandle;
use crate::output::{self, Format, TaskView};

/// Set or clear the completed flag on one task.
pub fn set(
    docket: &mut Docket,
    handle: TaskHandle,
    completed: bool,
    format: Format,
) -> Result<()> {
    docket.set_completed(handle, completed)?;
    let view = TaskView::new(handle, docket.task(handle)?, docket.today());
    output::print_task(&view, format)
}

/// Set or clear the completed flag on every task.
pub fn all(docket: &mut Docket, completed: bool, format: Format) -> Result<()> {
    let (action, count) = if completed {
        ("completed", docket.mark_all_completed()?)
    } else {
        ("reopened", docket.mark_all_incomplete()?)
    };
    output::print_count(action, count, format)
}
