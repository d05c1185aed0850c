//! Timer engine implementation.
//!
//! The engine is a tick-driven state machine. It does not arm timers or
//! spawn threads -- the caller schedules one `tick()` per second while the
//! engine is running, presenting the [`TickToken`] handed out by `start()`.
//!
//! ## Tick cancellation
//!
//! Every transition that invalidates a pending countdown (`pause`,
//! `set_mode`, `reset`, interval completion) bumps an internal generation
//! counter. A tick arriving with a token minted before the bump is stale and
//! is ignored, so a scheduler that failed to cancel in time cannot cause a
//! duplicate or late decrement.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new(&settings);
//! let token = engine.start(&settings).unwrap();
//! // Once per second while running:
//! if let Some(event) = engine.tick(token, &settings, &clock) {
//!     // countdown finished; deliver the reminder
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::Mode;
use crate::clock::Clock;
use crate::events::Event;
use crate::settings::Settings;

/// Proof that the holder is the currently armed tick schedule.
///
/// Minted by [`TimerEngine::start`]; invalidated by any interrupting
/// transition. Presenting a stale token makes `tick()` a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickToken(u64);

/// Countdown state machine.
///
/// Initial state: `Work`, paused, full work duration. Not internally
/// synchronized -- callers embedding multiple input sources must serialize
/// access themselves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: Mode,
    remaining_seconds: u32,
    running: bool,
    /// Bumped on every transition that invalidates a pending tick.
    #[serde(default)]
    tick_generation: u64,
}

impl TimerEngine {
    pub fn new(settings: &Settings) -> Self {
        Self {
            mode: Mode::Work,
            remaining_seconds: settings.duration_for(Mode::Work),
            running: false,
            tick_generation: 0,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// `mm:ss` rendering of the remaining time.
    pub fn display(&self) -> String {
        format!(
            "{:02}:{:02}",
            self.remaining_seconds / 60,
            self.remaining_seconds % 60
        )
    }

    /// The currently armed token, if running. Lets a scheduler re-attach to
    /// an engine it deserialized mid-countdown.
    pub fn tick_token(&self) -> Option<TickToken> {
        self.running.then_some(TickToken(self.tick_generation))
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Switch modes, cancelling any pending countdown. Always allowed, even
    /// mid-countdown -- manual override wins.
    pub fn set_mode(&mut self, mode: Mode, settings: &Settings) {
        self.invalidate_ticks();
        self.running = false;
        self.mode = mode;
        self.remaining_seconds = settings.duration_for(mode);
    }

    /// Begin (or resume) the countdown. Returns the token the scheduler must
    /// present on every tick, or `None` if already running.
    pub fn start(&mut self) -> Option<TickToken> {
        if self.running {
            return None;
        }
        self.running = true;
        self.invalidate_ticks();
        Some(TickToken(self.tick_generation))
    }

    /// Stop the countdown, keeping the remaining time. No-op if paused.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.invalidate_ticks();
    }

    /// Back to the full duration for the current mode, paused.
    pub fn reset(&mut self, settings: &Settings) {
        self.pause();
        self.set_mode(self.mode, settings);
    }

    /// Advance the countdown by one second.
    ///
    /// A stale token, or a tick while paused, is ignored (scheduler
    /// discipline should prevent both, but neither may crash). Returns the
    /// completion event when the countdown reaches zero; the engine then
    /// stops and auto-advances: work to short break, any break back to work.
    /// A long break is only ever entered by explicit `set_mode`.
    pub fn tick(&mut self, token: TickToken, settings: &Settings, clock: &dyn Clock) -> Option<Event> {
        if !self.running || token.0 != self.tick_generation {
            return None;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return None;
        }

        let finished = self.mode;
        let next = match finished {
            Mode::Work => Mode::ShortBreak,
            Mode::ShortBreak | Mode::LongBreak => Mode::Work,
        };
        self.set_mode(next, settings);
        Some(Event::IntervalCompleted {
            mode: finished,
            at: clock.now_utc(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn invalidate_ticks(&mut self) {
        self.tick_generation = self.tick_generation.wrapping_add(1);
    }
}
