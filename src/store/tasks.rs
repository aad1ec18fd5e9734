use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info};

use crate::error::{DocketError, Result};
use crate::model::{Task, TaskHandle, normalize_text};
use crate::store::{read_json, to_json_pretty, write_atomic};

/// Ordered task collection backed by a single JSON file.
///
/// Every mutation rewrites the whole file.
#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Load the task file. A missing file yields an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        let tasks: Vec<Task> = read_json(path)?.unwrap_or_default();
        debug!("loaded {} task(s) from {}", tasks.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            tasks,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, handle: TaskHandle) -> Result<&Task> {
        self.tasks
            .get(handle.0)
            .ok_or(DocketError::TaskNotFound(handle.row()))
    }

    fn get_mut(&mut self, handle: TaskHandle) -> Result<&mut Task> {
        self.tasks
            .get_mut(handle.0)
            .ok_or(DocketError::TaskNotFound(handle.row()))
    }

    /// Append a pending task. Blank text is a silent no-op (`None`).
    pub fn add(&mut self, text: &str, due: NaiveDate) -> Result<Option<TaskHandle>> {
        let Some(task) = Task::new(text, due) else {
            debug!("add ignored: blank task text");
            return Ok(None);
        };
        info!("adding task '{}' due {}", task.text, task.due);
        self.tasks.push(task);
        self.save()?;
        Ok(Some(TaskHandle(self.tasks.len() - 1)))
    }

    /// Replace a task's text, keeping due date and completion.
    /// Returns `false` when `new_text` is blank and nothing changed.
    pub fn edit(&mut self, handle: TaskHandle, new_text: &str) -> Result<bool> {
        let task = self.get_mut(handle)?;
        let Some(text) = normalize_text(new_text) else {
            debug!("edit of task {handle} ignored: blank task text");
            return Ok(false);
        };
        info!("renaming task {handle} '{}' -> '{text}'", task.text);
        task.text = text;
        self.save()?;
        Ok(true)
    }

    pub fn delete(&mut self, handle: TaskHandle) -> Result<Task> {
        self.get(handle)?;
        let removed = self.tasks.remove(handle.0);
        info!("deleted task {handle} '{}'", removed.text);
        self.save()?;
        Ok(removed)
    }

    pub fn set_completed(&mut self, handle: TaskHandle, completed: bool) -> Result<()> {
        let task = self.get_mut(handle)?;
        task.completed = completed;
        info!("task {handle} '{}' completed={completed}", task.text);
        self.save()
    }

    /// Mark every task done. Persists once; returns the number of tasks.
    pub fn mark_all_completed(&mut self) -> Result<usize> {
        self.set_all(true)
    }

    /// Mark every task open. Persists once; returns the number of tasks.
    pub fn mark_all_incomplete(&mut self) -> Result<usize> {
        self.set_all(false)
    }

    fn set_all(&mut self, completed: bool) -> Result<usize> {
        for task in &mut self.tasks {
            task.completed = completed;
        }
        info!("marked {} task(s) completed={completed}", self.tasks.len());
        self.save()?;
        Ok(self.tasks.len())
    }

    /// Serialize the full ordered sequence to the task file.
    pub fn save(&self) -> Result<()> {
        let json = to_json_pretty(&self.tasks)?;
        write_atomic(&self.path, &json)?;
        debug!("wrote {} task(s) to {}", self.tasks.len(), self.path.display());
        Ok(())
    }
}
