//! Task types and the date-indexed store.

mod store;

pub use store::TaskStore;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Stable task identity, assigned at creation and never reused.
///
/// Tasks used to be addressed by list position, which broke as soon as a
/// delete and an edit raced; ids are generated instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A user task bound to a calendar date.
///
/// `id` and `date` are immutable after creation; `title` changes through
/// [`TaskStore::edit_task`] and `completed` through
/// [`TaskStore::set_completed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    /// Partition key for all date-based queries, serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}
