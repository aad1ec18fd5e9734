use crate::error::Result;
use crate::output::{self, Format};
use crate::reminder::ReminderReport;

/// Print what the startup reminder pass sent.
pub fn run(report: &ReminderReport, format: Format) -> Result<()> {
    output::print_report(report, format)
}
