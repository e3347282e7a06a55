//! Face configuration
//!
//! Tuning knobs that are fixed per build. The runtime embeds a `face.toml`
//! and parses it at boot; missing keys take the defaults below.
//!
//! ```toml
//! fallback_wait_ms = 5000
//! refresh_interval_min = 5
//! hour_format = "24h"
//!
//! [time_signal]
//! start_hour = 7
//! end_hour = 22
//! ```

use serde::{Deserialize, Serialize};

use crate::clock::dispatch::DEFAULT_REFRESH_INTERVAL_MIN;
use crate::clock::TimeSignal;

/// How long to wait for the companion's ready message
pub const DEFAULT_FALLBACK_WAIT_MS: u32 = 5000;

/// Upper bound for the fallback wait
pub const MAX_FALLBACK_WAIT_MS: u32 = 60_000;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Input was not valid TOML for this schema
    Parse,
    /// A value is out of range; names the key
    InvalidValue(&'static str),
}

/// Time layer format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[default]
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Build-time face configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(default)]
pub struct FaceConfig {
    /// Fallback timer for the readiness gate (ms)
    pub fallback_wait_ms: u32,
    /// Weather is re-requested when `minute % refresh_interval_min == 0`
    pub refresh_interval_min: u8,
    pub hour_format: HourFormat,
    pub time_signal: TimeSignal,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            fallback_wait_ms: DEFAULT_FALLBACK_WAIT_MS,
            refresh_interval_min: DEFAULT_REFRESH_INTERVAL_MIN,
            hour_format: HourFormat::TwentyFourHour,
            time_signal: TimeSignal::default(),
        }
    }
}

impl FaceConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fallback_wait_ms == 0 || self.fallback_wait_ms > MAX_FALLBACK_WAIT_MS {
            return Err(ConfigError::InvalidValue("fallback_wait_ms"));
        }
        if !(1..=60).contains(&self.refresh_interval_min) {
            return Err(ConfigError::InvalidValue("refresh_interval_min"));
        }
        if self.time_signal.end_hour > 23 {
            return Err(ConfigError::InvalidValue("time_signal.end_hour"));
        }
        if self.time_signal.start_hour > self.time_signal.end_hour {
            return Err(ConfigError::InvalidValue("time_signal.start_hour"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "toml")]
    pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
        let config: FaceConfig = toml::from_str(input).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }
}
