//! Wall-clock seam.
//!
//! The core never reads system time directly; callers hand it a [`Clock`] so
//! "today" and event timestamps are deterministic under test.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current instant. Pure query, no side effects.
pub trait Clock {
    /// Current instant, used to timestamp events.
    fn now_utc(&self) -> DateTime<Utc>;

    /// Current calendar date in the user's timezone, used by the calendar
    /// view and as the default task date.
    fn today(&self) -> NaiveDate {
        self.now_utc().with_timezone(&Local).date_naive()
    }
}

/// System wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to a fixed instant, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_returns_pinned_instant() {
        let at = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now_utc(), at);
    }
}
