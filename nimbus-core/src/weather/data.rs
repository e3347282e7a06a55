//! The weather record shown on the face
//!
//! One `WeatherData` lives inside the watchface context for the whole
//! process. Companion messages write into it; the display and the color
//! mapper read from it.

use heapless::String;
use serde::{Deserialize, Serialize};

use nimbus_protocol::reports::{MAX_LOCALE_LEN, MAX_PUBDATE_LEN};
use nimbus_protocol::{ErrorText, ForecastReport, HourlySlot, WeatherReport};

use super::condition::Condition;
use crate::color::BackgroundColor;
use crate::config::WeatherService;

/// Two-slot hourly forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HourlyForecast {
    /// Whether the companion can supply forecasts at all
    pub enabled: bool,
    /// When the forecast was received, unix seconds (0 = never)
    pub updated: u32,
    pub first: HourlySlot,
    pub second: HourlySlot,
}

impl HourlyForecast {
    /// Both slots, in display order
    pub fn slots(&self) -> [HourlySlot; 2] {
        [self.first, self.second]
    }
}

/// Current weather state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeatherData {
    /// Temperature in the configured scale
    pub temperature: i16,
    /// Raw provider condition code
    pub condition: u16,
    /// Service that produced `condition`
    pub service: WeatherService,
    /// Background color; persisted separately as a token
    #[serde(skip)]
    pub color: BackgroundColor,
    /// Last successful update, unix seconds (0 = never)
    pub updated: u32,
    pub sunrise: u32,
    pub sunset: u32,
    pub locale: String<MAX_LOCALE_LEN>,
    pub pubdate: String<MAX_PUBDATE_LEN>,
    /// Phone timezone offset in seconds
    pub tz_offset: i32,
    /// Most recent companion error, cleared by the next good report
    #[serde(skip)]
    pub error: Option<ErrorText>,
    pub hourly: HourlyForecast,
}

impl WeatherData {
    /// A zeroed record
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any report has been received
    pub fn has_data(&self) -> bool {
        self.updated != 0
    }

    /// Decoded current condition
    pub fn current_condition(&self) -> Condition {
        Condition::decode(self.service, self.condition)
    }

    /// Whether it is currently night at the reported location
    pub fn is_night(&self, now: u32) -> bool {
        if self.sunrise == 0 || self.sunset == 0 {
            return false;
        }
        now < self.sunrise || now >= self.sunset
    }

    /// Apply a current-conditions report received at `now`
    pub fn apply_report(&mut self, report: &WeatherReport, service: WeatherService, now: u32) {
        self.condition = report.condition;
        self.temperature = report.temperature;
        self.service = service;
        self.sunrise = report.sunrise;
        self.sunset = report.sunset;
        self.locale = report.locale.clone();
        self.pubdate = report.pubdate.clone();
        self.tz_offset = report.tz_offset;
        self.updated = now;
        self.error = None;
    }

    /// Apply an hourly forecast received at `now`
    pub fn apply_forecast(&mut self, report: &ForecastReport, now: u32) {
        self.hourly = HourlyForecast {
            enabled: true,
            updated: now,
            first: report.first,
            second: report.second,
        };
    }

    /// The companion has no forecast source
    pub fn disable_hourly(&mut self) {
        self.hourly.enabled = false;
    }

    /// Record a companion error
    pub fn set_error(&mut self, error: ErrorText) {
        self.error = Some(error);
    }
}
