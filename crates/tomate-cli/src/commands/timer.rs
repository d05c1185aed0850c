//! Timer control commands.
//!
//! The CLI is the scheduler collaborator: `run` drives real one-second
//! ticks in-process; the other commands load the persisted engine, apply one
//! transition, and save it back. The engine scratch file lives beside the
//! snapshot and is not part of the durable `{tasks, settings}` state.

use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;
use tomate_core::storage::data_dir;
use tomate_core::{Event, Mode, ReminderMode, Settings, SnapshotStore, SystemClock, TimerEngine};

const ENGINE_FILE: &str = "timer.json";

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or resume) the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Reset to the full duration for the current mode
    Reset,
    /// Switch mode: work, short-break, long-break
    Mode {
        /// Target mode
        mode: String,
    },
    /// Print current timer state as JSON
    Status,
    /// Drive the countdown with real one-second ticks
    Run {
        /// Stop after this many seconds instead of running to completion
        #[arg(long)]
        seconds: Option<u64>,
    },
}

fn engine_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    Ok(data_dir()?.join(ENGINE_FILE))
}

fn load_engine(settings: &Settings) -> TimerEngine {
    if let Ok(path) = engine_path() {
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
                return engine;
            }
        }
    }
    TimerEngine::new(settings)
}

fn save_engine(engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    std::fs::write(engine_path()?, json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let settings = SnapshotStore::open()?.load().settings;
    let mut engine = load_engine(&settings);

    match action {
        TimerAction::Start => {
            if engine.start().is_some() {
                println!("started: {} {}", engine.mode(), engine.display());
            } else {
                println!("already running");
            }
        }
        TimerAction::Pause => {
            engine.pause();
            println!("paused: {} {}", engine.mode(), engine.display());
        }
        TimerAction::Reset => {
            engine.reset(&settings);
            println!("reset: {} {}", engine.mode(), engine.display());
        }
        TimerAction::Mode { mode } => {
            let mode: Mode = mode.parse()?;
            engine.set_mode(mode, &settings);
            println!("mode: {} {}", engine.mode(), engine.display());
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine)?);
        }
        TimerAction::Run { seconds } => {
            run_ticks(&mut engine, &settings, seconds)?;
        }
    }

    save_engine(&engine)?;
    Ok(())
}

/// Tick once per wall-clock second until the interval completes or the
/// budget runs out.
fn run_ticks(
    engine: &mut TimerEngine,
    settings: &Settings,
    seconds: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let clock = SystemClock;
    // Re-attach to a countdown that was already running, else start one.
    let token = match engine.tick_token().or_else(|| engine.start()) {
        Some(token) => token,
        None => return Ok(()),
    };

    let mut budget = seconds;
    loop {
        std::thread::sleep(std::time::Duration::from_secs(1));
        if let Some(event) = engine.tick(token, settings, &clock) {
            println!();
            deliver_reminder(&event, settings.reminder_mode);
            println!("next: {} {}", engine.mode(), engine.display());
            break;
        }
        print!("\r{} {}", engine.mode(), engine.display());
        std::io::stdout().flush()?;
        if let Some(ref mut left) = budget {
            *left = left.saturating_sub(1);
            if *left == 0 {
                engine.pause();
                println!();
                break;
            }
        }
    }
    Ok(())
}

fn deliver_reminder(event: &Event, reminder: ReminderMode) {
    let Event::IntervalCompleted { mode, .. } = event;
    if reminder.wants_sound() {
        print!("\x07");
    }
    if reminder.wants_notification() {
        println!("reminder: {} interval finished", mode);
    }
}
