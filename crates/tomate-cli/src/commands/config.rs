//! Settings commands.
//!
//! All mutation goes through `Settings::update` so validation happens in the
//! core, not here.

use clap::Subcommand;
use tomate_core::{SettingsUpdate, SnapshotStore};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a settings value
    Get {
        /// Key: work_seconds, short_break_seconds, long_break_seconds, reminder_mode
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// Print all settings as JSON
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = SnapshotStore::open()?;
    let mut snapshot = store.load();

    match action {
        ConfigAction::Get { key } => {
            let settings = &snapshot.settings;
            match key.as_str() {
                "work_seconds" => println!("{}", settings.work_seconds),
                "short_break_seconds" => println!("{}", settings.short_break_seconds),
                "long_break_seconds" => println!("{}", settings.long_break_seconds),
                "reminder_mode" => println!("{}", settings.reminder_mode),
                _ => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut update = SettingsUpdate::default();
            match key.as_str() {
                "work_seconds" => update.work_seconds = Some(value.parse()?),
                "short_break_seconds" => update.short_break_seconds = Some(value.parse()?),
                "long_break_seconds" => update.long_break_seconds = Some(value.parse()?),
                "reminder_mode" => update.reminder_mode = Some(value.parse()?),
                _ => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
            snapshot.settings.update(update)?;
            store.save(&snapshot)?;
            println!("ok");
        }
        ConfigAction::List => {
            println!("{}", serde_json::to_string_pretty(&snapshot.settings)?);
        }
    }
    Ok(())
}
