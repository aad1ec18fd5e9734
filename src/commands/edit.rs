use crate::error::Result;
use crate::facade::Docket;
use crate::model::TaskHandle;
use crate::output::{self, Format, TaskView};

/// Replace a task's text. Blank text prints nothing and succeeds.
pub fn run(docket: &mut Docket, handle: TaskHandle, text: &str, format: Format) -> Result<()> {
    if !docket.edit_task(handle, text)? {
        return Ok(());
    }
    let view = TaskView::new(handle, docket.task(handle)?, docket.today());
    output::print_task(&view, format)
}
