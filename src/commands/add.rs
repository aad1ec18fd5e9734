use chrono::NaiveDate;

use crate::error::Result;
use crate::facade::Docket;
use crate::output::{self, Format, TaskView};

/// Add a task. Blank text prints nothing and succeeds.
pub fn run(docket: &mut Docket, text: &str, due: NaiveDate, format: Format) -> Result<()> {
    let Some(handle) = docket.add_task(text, due)? else {
        return Ok(());
    };
    let view = TaskView::new(handle, docket.task(handle)?, docket.today());
    output::print_task(&view, format)
}
