//! User settings: interval durations and reminder preference.
//!
//! Settings are mutated only through [`Settings::update`], which validates
//! the whole change set before committing any of it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

use crate::error::{CoreError, Result};
use crate::timer::Mode;

/// How interval-completion reminders are delivered.
///
/// `None` suppresses delivery entirely; the other variants are channel hints
/// passed through to the consumer unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMode {
    #[default]
    None,
    Notification,
    Sound,
    Both,
}

impl ReminderMode {
    pub fn wants_notification(self) -> bool {
        matches!(self, ReminderMode::Notification | ReminderMode::Both)
    }

    pub fn wants_sound(self) -> bool {
        matches!(self, ReminderMode::Sound | ReminderMode::Both)
    }
}

impl fmt::Display for ReminderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ReminderMode::None => "none",
            ReminderMode::Notification => "notification",
            ReminderMode::Sound => "sound",
            ReminderMode::Both => "both",
        };
        f.write_str(s)
    }
}

impl FromStr for ReminderMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(ReminderMode::None),
            "notification" => Ok(ReminderMode::Notification),
            "sound" => Ok(ReminderMode::Sound),
            "both" => Ok(ReminderMode::Both),
            other => Err(CoreError::InvalidInput {
                field: "reminder_mode",
                message: format!(
                    "'{other}' is not one of none, notification, sound, both"
                ),
            }),
        }
    }
}

/// Interval durations (seconds) plus the reminder preference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_work_seconds")]
    pub work_seconds: u32,
    #[serde(default = "default_short_break_seconds")]
    pub short_break_seconds: u32,
    #[serde(default = "default_long_break_seconds")]
    pub long_break_seconds: u32,
    #[serde(default)]
    pub reminder_mode: ReminderMode,
}

fn default_work_seconds() -> u32 {
    1500
}
fn default_short_break_seconds() -> u32 {
    300
}
fn default_long_break_seconds() -> u32 {
    900
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_seconds: default_work_seconds(),
            short_break_seconds: default_short_break_seconds(),
            long_break_seconds: default_long_break_seconds(),
            reminder_mode: ReminderMode::None,
        }
    }
}

/// A partial change set applied via [`Settings::update`].
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub work_seconds: Option<u32>,
    pub short_break_seconds: Option<u32>,
    pub long_break_seconds: Option<u32>,
    pub reminder_mode: Option<ReminderMode>,
}

impl Settings {
    /// Configured duration for a timer mode.
    pub fn duration_for(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Work => self.work_seconds,
            Mode::ShortBreak => self.short_break_seconds,
            Mode::LongBreak => self.long_break_seconds,
        }
    }

    /// Apply a change set. All durations are validated before anything is
    /// committed, so a rejected update leaves `self` untouched.
    pub fn update(&mut self, update: SettingsUpdate) -> Result<()> {
        validate_duration("work_seconds", update.work_seconds)?;
        validate_duration("short_break_seconds", update.short_break_seconds)?;
        validate_duration("long_break_seconds", update.long_break_seconds)?;

        if let Some(v) = update.work_seconds {
            self.work_seconds = v;
        }
        if let Some(v) = update.short_break_seconds {
            self.short_break_seconds = v;
        }
        if let Some(v) = update.long_break_seconds {
            self.long_break_seconds = v;
        }
        if let Some(v) = update.reminder_mode {
            self.reminder_mode = v;
        }
        Ok(())
    }

    /// Replace any zero duration with its default.
    ///
    /// Older data files were written without duration validation; a snapshot
    /// carrying a zero would freeze the countdown at that mode.
    pub fn normalized(mut self) -> Self {
        if self.work_seconds == 0 {
            warn!("work_seconds is 0 in loaded settings, restoring default");
            self.work_seconds = default_work_seconds();
        }
        if self.short_break_seconds == 0 {
            warn!("short_break_seconds is 0 in loaded settings, restoring default");
            self.short_break_seconds = default_short_break_seconds();
        }
        if self.long_break_seconds == 0 {
            warn!("long_break_seconds is 0 in loaded settings, restoring default");
            self.long_break_seconds = default_long_break_seconds();
        }
        self
    }
}

fn validate_duration(field: &'static str, value: Option<u32>) -> Result<()> {
    match value {
        Some(0) => Err(CoreError::InvalidInput {
            field,
            message: "duration must be strictly positive".into(),
        }),
        _ => Ok(()),
    }
}
