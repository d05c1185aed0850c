use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::Mode;

/// Emitted by the timer engine when a countdown reaches zero.
///
/// Delivery (notification, sound) is the consumer's responsibility, gated by
/// [`ReminderMode`](crate::ReminderMode); the engine emits unconditionally.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    IntervalCompleted {
        /// The mode that just finished, not the one being entered.
        mode: Mode,
        at: DateTime<Utc>,
    },
}
