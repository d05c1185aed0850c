//! # Tomate Core Library
//!
//! Core business logic for Tomate, a personal Pomodoro timer with a
//! date-indexed task list and a month-grid calendar view. All operations are
//! available through this library; the CLI binary is a thin layer over it and
//! owns everything presentational.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a tick-driven state machine. It never arms timers or
//!   spawns threads -- the caller schedules one `tick()` per second while the
//!   engine is running, using the token handed out by `start()`
//! - **Task Store**: owns the task list, keyed by calendar date
//! - **Calendar**: pure 42-cell month-grid computation
//! - **Storage**: JSON snapshot persistence (`{tasks, settings}`), written
//!   atomically; load failures fall back to defaults
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: countdown state machine with mode transitions
//! - [`TaskStore`]: add/edit/delete/query-by-date task ownership
//! - [`render_month`]: derives the calendar grid for rendering
//! - [`SnapshotStore`]: durable snapshot of tasks and settings

pub mod calendar;
pub mod clock;
pub mod error;
pub mod events;
pub mod settings;
pub mod storage;
pub mod task;
pub mod timer;

pub use calendar::{next_month, prev_month, render_month, CalendarCell};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, PersistenceError, Result};
pub use events::Event;
pub use settings::{ReminderMode, Settings, SettingsUpdate};
pub use storage::{Snapshot, SnapshotStore};
pub use task::{Task, TaskId, TaskStore};
pub use timer::{Mode, TickToken, TimerEngine};
