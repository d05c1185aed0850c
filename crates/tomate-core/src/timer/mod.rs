//! Timer state machine.

mod engine;

pub use engine::{TickToken, TimerEngine};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which configured duration governs the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Work,
    ShortBreak,
    LongBreak,
}

impl Mode {
    pub fn is_break(self) -> bool {
        matches!(self, Mode::ShortBreak | Mode::LongBreak)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "work",
            Mode::ShortBreak => "short break",
            Mode::LongBreak => "long break",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Mode::Work),
            "short-break" | "short_break" => Ok(Mode::ShortBreak),
            "long-break" | "long_break" => Ok(Mode::LongBreak),
            other => Err(CoreError::InvalidInput {
                field: "mode",
                message: format!("'{other}' is not one of work, short-break, long-break"),
            }),
        }
    }
}
