//! The task store: exclusive owner of the task list.
//!
//! Tasks stay in insertion order; a per-date occupancy count gives the
//! calendar its O(1) `has_task_on` check.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Task, TaskId};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Task>", into = "Vec<Task>")]
pub struct TaskStore {
    tasks: Vec<Task>,
    /// Number of tasks per date. Rebuilt on deserialize, never persisted.
    by_date: HashMap<NaiveDate, usize>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a task. The title is trimmed before storage; a title that is
    /// empty after trimming is rejected.
    pub fn add_task(&mut self, title: &str, date: NaiveDate) -> Result<Task> {
        let title = valid_title(title)?;
        let task = Task {
            id: TaskId::generate(),
            title,
            date,
            completed: false,
        };
        *self.by_date.entry(date).or_insert(0) += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Rename a task in place. Id, date, and completion are untouched.
    pub fn edit_task(&mut self, id: TaskId, new_title: &str) -> Result<()> {
        let new_title = valid_title(new_title)?;
        let task = self.get_mut(id)?;
        task.title = new_title;
        Ok(())
    }

    pub fn set_completed(&mut self, id: TaskId, completed: bool) -> Result<()> {
        self.get_mut(id)?.completed = completed;
        Ok(())
    }

    /// Remove a task. Deleting an id twice is an explicit `NotFound`, not a
    /// silent success -- callers must re-check existence before retrying.
    pub fn delete_task(&mut self, id: TaskId) -> Result<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(CoreError::NotFound { id })?;
        let task = self.tasks.remove(pos);
        if let Some(count) = self.by_date.get_mut(&task.date) {
            *count -= 1;
            if *count == 0 {
                self.by_date.remove(&task.date);
            }
        }
        Ok(task)
    }

    pub fn get(&self, id: TaskId) -> Result<&Task> {
        self.tasks
            .iter()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound { id })
    }

    /// All tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Tasks on the given date, in insertion order.
    pub fn tasks_for_date(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|t| t.date == date).collect()
    }

    pub fn has_task_on(&self, date: NaiveDate) -> bool {
        self.by_date.contains_key(&date)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(CoreError::NotFound { id })
    }
}

impl From<Vec<Task>> for TaskStore {
    fn from(tasks: Vec<Task>) -> Self {
        let mut by_date = HashMap::new();
        for task in &tasks {
            *by_date.entry(task.date).or_insert(0) += 1;
        }
        Self { tasks, by_date }
    }
}

impl From<TaskStore> for Vec<Task> {
    fn from(store: TaskStore) -> Self {
        store.tasks
    }
}

fn valid_title(title: &str) -> Result<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(CoreError::InvalidInput {
            field: "title",
            message: "title must not be empty".into(),
        });
    }
    Ok(trimmed.to_string())
}
