//! Payload bodies carried inside frames
//!
//! These are the wire shapes only. Tokens stay as short strings here; the
//! watch maps them onto its own enums when a message is applied.

use heapless::String;
use serde::{Deserialize, Serialize};

/// Maximum length of a location name
pub const MAX_LOCALE_LEN: usize = 24;

/// Maximum length of a publication time ("23:59")
pub const MAX_PUBDATE_LEN: usize = 8;

/// Maximum length of an error message
pub const MAX_ERROR_LEN: usize = 24;

/// Maximum length of a service or color token
pub const MAX_TOKEN_LEN: usize = 12;

/// Short error text reported by the companion ("HTTP Error", "Loc unavailable")
pub type ErrorText = String<MAX_ERROR_LEN>;

/// Current conditions from the selected weather provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Condition code (provider code already mapped by the companion)
    pub condition: u16,
    /// Temperature in the requested scale
    pub temperature: i16,
    /// Sunrise, unix seconds
    pub sunrise: u32,
    /// Sunset, unix seconds
    pub sunset: u32,
    /// Neighborhood or city name
    pub locale: String<MAX_LOCALE_LEN>,
    /// Observation time as shown to the user
    pub pubdate: String<MAX_PUBDATE_LEN>,
    /// Phone timezone offset in seconds
    pub tz_offset: i32,
}

/// One slot of the hourly forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourlySlot {
    /// Forecast time, unix seconds
    pub time: u32,
    /// Condition code
    pub condition: u16,
    /// Temperature in the requested scale
    pub temperature: i16,
    /// Probability of precipitation, percent
    pub pop: u8,
}

/// Two-slot hourly forecast (roughly 3 and 6 hours ahead)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ForecastReport {
    pub first: HourlySlot,
    pub second: HourlySlot,
}

/// Settings chosen on the phone's configuration page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPayload {
    /// Weather service token: "open", "yahoo" or "wundr"
    pub service: String<MAX_TOKEN_LEN>,
    /// Background color token: "dukeblue", "black" or "red"
    pub color: String<MAX_TOKEN_LEN>,
    /// Temperature scale, 'F' or 'C'
    pub scale: char,
    pub debug: bool,
    pub bluetooth_alert: bool,
    pub battery: bool,
    pub time_signal: bool,
    pub stop_hourly: bool,
}

/// Request for a fresh weather report
///
/// Carries what the companion needs to pick a provider and units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRequest {
    pub service: String<MAX_TOKEN_LEN>,
    pub scale: char,
    pub debug: bool,
    /// Whether the hourly forecast should be fetched too
    pub hourly: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for WeatherReport {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "WeatherReport[cond={}, temp={}, locale={}]",
            self.condition,
            self.temperature,
            self.locale.as_str()
        );
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SettingsPayload {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "Settings[service={}, color={}, scale={}]",
            self.service.as_str(),
            self.color.as_str(),
            self.scale
        );
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for WeatherRequest {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "WeatherRequest[service={}, scale={}, hourly={}]",
            self.service.as_str(),
            self.scale,
            self.hourly
        );
    }
}
