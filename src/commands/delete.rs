use crate::error::Result;
use crate::facade::Docket;
use crate::model::TaskHandle;
use crate::output::{self, Format, TaskView};

pub fn run(docket: &mut Docket, handle: TaskHandle, format: Format) -> Result<()> {
    let removed = docket.delete_task(handle)?;
    let view = TaskView::new(handle, &removed, docket.today());
    output::print_task(&view, format)
}
