//! Task management commands.

use chrono::NaiveDate;
use clap::Subcommand;
use tomate_core::{Clock, SnapshotStore, SystemClock, Task, TaskId};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        /// Task title
        title: String,
        /// Task date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List tasks
    List {
        /// Only tasks on this date
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename a task
    Edit {
        /// Task ID
        id: TaskId,
        /// New title
        title: String,
    },
    /// Mark a task completed
    Done {
        /// Task ID
        id: TaskId,
        /// Mark it not completed instead
        #[arg(long)]
        undo: bool,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: TaskId,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SnapshotStore::open()?;
    let mut snapshot = store.load();

    match action {
        TaskAction::Add { title, date } => {
            let date = date.unwrap_or_else(|| SystemClock.today());
            let task = snapshot.tasks.add_task(&title, date)?;
            store.save(&snapshot)?;
            println!("task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { date, json } => {
            let tasks: Vec<&Task> = match date {
                Some(date) => snapshot.tasks.tasks_for_date(date),
                None => snapshot.tasks.tasks().iter().collect(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&tasks)?);
            } else if tasks.is_empty() {
                println!("no tasks");
            } else {
                for task in tasks {
                    let done = if task.completed { "x" } else { " " };
                    println!("{}  [{done}]  {}  ({})", task.date, task.title, task.id);
                }
            }
        }
        TaskAction::Edit { id, title } => {
            snapshot.tasks.edit_task(id, &title)?;
            store.save(&snapshot)?;
            println!("task updated: {id}");
        }
        TaskAction::Done { id, undo } => {
            snapshot.tasks.set_completed(id, !undo)?;
            store.save(&snapshot)?;
            println!("task updated: {id}");
        }
        TaskAction::Delete { id } => {
            let task = snapshot.tasks.delete_task(id)?;
            store.save(&snapshot)?;
            println!("task deleted: {} ({})", task.id, task.title);
        }
    }
    Ok(())
}
