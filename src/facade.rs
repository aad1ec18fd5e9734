//! Entry points for a presentation shell.
//!
//! [`Docket`] owns the task store and the notification log for one process
//! and exposes the operations a UI needs: CRUD on tasks, the startup reminder
//! pass, date filtering and overdue checks. It performs no rendering.

use chrono::{Local, NaiveDate};
use log::debug;

use crate::config::Config;
use crate::error::Result;
use crate::filter;
use crate::model::{Task, TaskHandle};
use crate::notify::NotificationSink;
use crate::reminder::{self, ReminderReport};
use crate::store::notified::NotifiedLog;
use crate::store::tasks::TaskStore;

pub struct Docket {
    store: TaskStore,
    log: NotifiedLog,
    today: NaiveDate,
}

impl Docket {
    /// Load the task store, then the notification log.
    pub fn open(config: &Config, today: NaiveDate) -> Result<Self> {
        let store = TaskStore::load(&config.tasks_file)?;
        let log = NotifiedLog::load(&config.notified_file)?;
        debug!("opened docket for {today}");
        Ok(Self { store, log, today })
    }

    /// Startup sequence: load both files and run the reminder pass.
    /// Returns the ready facade together with what was sent.
    pub fn load_all(
        config: &Config,
        today: NaiveDate,
        sink: &dyn NotificationSink,
    ) -> Result<(Self, ReminderReport)> {
        let mut docket = Self::open(config, today)?;
        let report = docket.remind(sink)?;
        Ok((docket, report))
    }

    /// Run the reminder pass against the current tasks.
    pub fn remind(&mut self, sink: &dyn NotificationSink) -> Result<ReminderReport> {
        reminder::run(self.store.tasks(), &mut self.log, self.today, sink)
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn task(&self, handle: TaskHandle) -> Result<&Task> {
        self.store.get(handle)
    }

    pub fn add_task(&mut self, text: &str, due: NaiveDate) -> Result<Option<TaskHandle>> {
        self.store.add(text, due)
    }

    pub fn edit_task(&mut self, handle: TaskHandle, new_text: &str) -> Result<bool> {
        self.store.edit(handle, new_text)
    }

    pub fn delete_task(&mut self, handle: TaskHandle) -> Result<Task> {
        self.store.delete(handle)
    }

    pub fn set_completed(&mut self, handle: TaskHandle, completed: bool) -> Result<()> {
        self.store.set_completed(handle, completed)
    }

    pub fn mark_all_completed(&mut self) -> Result<usize> {
        self.store.mark_all_completed()
    }

    pub fn mark_all_incomplete(&mut self) -> Result<usize> {
        self.store.mark_all_incomplete()
    }

    pub fn filter_by_date(&self, date: NaiveDate) -> Vec<bool> {
        filter::filter_by_date(self.store.tasks(), date)
    }

    pub fn is_overdue(&self, handle: TaskHandle) -> Result<bool> {
        Ok(self.store.get(handle)?.is_overdue(self.today))
    }
}

/// The local calendar date.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
