//! Hourly time signal
//!
//! A double pulse on the hour, limited to waking hours.

use serde::{Deserialize, Serialize};

use super::time::WallTime;

/// Default first hour that chimes
pub const DEFAULT_START_HOUR: u8 = 7;

/// Default last hour that chimes
pub const DEFAULT_END_HOUR: u8 = 22;

/// Hours (inclusive) during which the time signal may fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct TimeSignal {
    pub start_hour: u8,
    pub end_hour: u8,
}

impl Default for TimeSignal {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_START_HOUR,
            end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl TimeSignal {
    pub const fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Whether a signal is due at `time`
    ///
    /// `enabled` is the user's setting; the signal only fires on the hour.
    pub fn is_due(&self, time: &WallTime, enabled: bool) -> bool {
        enabled
            && time.minute == 0
            && (self.start_hour..=self.end_hour).contains(&time.hour)
    }
}
