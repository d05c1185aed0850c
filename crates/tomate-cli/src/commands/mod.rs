pub mod calendar;
pub mod config;
pub mod task;
pub mod timer;
