//! User settings
//!
//! Chosen on the phone and pushed to the watch as a config message. The
//! background color travels with them but is stored on the weather record.

use heapless::String;
use serde::{Deserialize, Serialize};

use nimbus_protocol::reports::MAX_TOKEN_LEN;
use nimbus_protocol::{SettingsPayload, WeatherRequest};

use crate::color::BackgroundColor;

pub const SERVICE_OPEN_WEATHER: &str = "open";
pub const SERVICE_YAHOO: &str = "yahoo";
pub const SERVICE_WUNDERGROUND: &str = "wundr";

/// Weather provider used by the companion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherService {
    OpenWeather,
    Yahoo,
    #[default]
    Wunderground,
}

impl WeatherService {
    /// Unknown tokens select Weather Underground
    pub fn from_token(token: &str) -> Self {
        match token {
            SERVICE_OPEN_WEATHER => Self::OpenWeather,
            SERVICE_YAHOO => Self::Yahoo,
            _ => Self::Wunderground,
        }
    }

    pub const fn token(self) -> &'static str {
        match self {
            Self::OpenWeather => SERVICE_OPEN_WEATHER,
            Self::Yahoo => SERVICE_YAHOO,
            Self::Wunderground => SERVICE_WUNDERGROUND,
        }
    }
}

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TempScale {
    #[default]
    Fahrenheit,
    Celsius,
}

impl TempScale {
    /// 'C' selects Celsius, anything else Fahrenheit
    pub fn from_char(c: char) -> Self {
        match c {
            'C' => Self::Celsius,
            _ => Self::Fahrenheit,
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            Self::Fahrenheit => 'F',
            Self::Celsius => 'C',
        }
    }
}

/// Settings that shape requests and the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    pub service: WeatherService,
    pub scale: TempScale,
    /// Show the debug line (last update time, errors)
    pub debug: bool,
    /// Vibrate when the phone connects or disconnects
    pub bluetooth_alert: bool,
    /// Show the battery gauge
    pub battery: bool,
    /// Hourly time signal
    pub time_signal: bool,
    /// Hide the hourly forecast
    pub stop_hourly: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            service: WeatherService::Wunderground,
            scale: TempScale::Fahrenheit,
            debug: false,
            bluetooth_alert: true,
            battery: true,
            time_signal: false,
            stop_hourly: false,
        }
    }
}

impl Settings {
    /// Decode a settings message into settings and a background color
    pub fn from_payload(payload: &SettingsPayload) -> (Self, BackgroundColor) {
        let settings = Self {
            service: WeatherService::from_token(&payload.service),
            scale: TempScale::from_char(payload.scale),
            debug: payload.debug,
            bluetooth_alert: payload.bluetooth_alert,
            battery: payload.battery,
            time_signal: payload.time_signal,
            stop_hourly: payload.stop_hourly,
        };
        (settings, BackgroundColor::from_token(&payload.color))
    }

    /// Request sent to the companion for a refresh
    pub fn weather_request(&self) -> WeatherRequest {
        WeatherRequest {
            service: token(self.service.token()),
            scale: self.scale.as_char(),
            debug: self.debug,
            hourly: !self.stop_hourly,
        }
    }
}

fn token(s: &str) -> String<MAX_TOKEN_LEN> {
    String::try_from(s).unwrap_or_default()
}
