//! Message types for the companion link
//!
//! Message types are divided into two categories:
//! - Companion → Watch: readiness, weather and forecast reports, errors, settings
//! - Watch → Companion: weather requests

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::frame::{Frame, FrameError, MAX_PAYLOAD_SIZE};
use crate::reports::{ErrorText, ForecastReport, SettingsPayload, WeatherReport, WeatherRequest};

// Message type IDs: Companion → Watch
pub const MSG_JS_READY: u8 = 0x01;
pub const MSG_WEATHER: u8 = 0x02;
pub const MSG_FORECAST: u8 = 0x03;
pub const MSG_HOURLY_DISABLED: u8 = 0x04;
pub const MSG_ERROR: u8 = 0x05;
pub const MSG_CONFIG: u8 = 0x06;

// Message type IDs: Watch → Companion
pub const MSG_REQUEST_WEATHER: u8 = 0x20;

fn pack<T: Serialize>(kind: u8, body: &T) -> Result<Frame, FrameError> {
    let mut buffer = [0u8; MAX_PAYLOAD_SIZE];
    let used = postcard::to_slice(body, &mut buffer).map_err(|_| FrameError::PayloadTooLarge)?;
    Frame::new(kind, used)
}

fn unpack<T: DeserializeOwned>(frame: &Frame) -> Result<T, FrameError> {
    postcard::from_bytes(&frame.payload).map_err(|_| FrameError::InvalidPayload)
}

/// Messages sent by the companion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompanionMessage {
    /// Companion is up and can service requests
    JsReady,
    /// Current conditions
    Weather(WeatherReport),
    /// Hourly forecast slots
    Forecast(ForecastReport),
    /// No forecast available (no API key configured on the phone)
    HourlyDisabled,
    /// Fetch or location failure
    Error(ErrorText),
    /// Settings changed on the phone
    Config(SettingsPayload),
}

impl CompanionMessage {
    /// Parse a message from a frame
    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_JS_READY => Ok(Self::JsReady),
            MSG_WEATHER => unpack(frame).map(Self::Weather),
            MSG_FORECAST => unpack(frame).map(Self::Forecast),
            MSG_HOURLY_DISABLED => Ok(Self::HourlyDisabled),
            MSG_ERROR => unpack(frame).map(Self::Error),
            MSG_CONFIG => unpack(frame).map(Self::Config),
            other => Err(FrameError::UnknownType(other)),
        }
    }

    /// Encode this message into a frame (companion side, or simulation)
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            Self::JsReady => Ok(Frame::bare(MSG_JS_READY)),
            Self::Weather(report) => pack(MSG_WEATHER, report),
            Self::Forecast(report) => pack(MSG_FORECAST, report),
            Self::HourlyDisabled => Ok(Frame::bare(MSG_HOURLY_DISABLED)),
            Self::Error(text) => pack(MSG_ERROR, text),
            Self::Config(settings) => pack(MSG_CONFIG, settings),
        }
    }

    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Self::JsReady => "js_ready",
            Self::Weather(_) => "weather",
            Self::Forecast(_) => "forecast",
            Self::HourlyDisabled => "hourly_disabled",
            Self::Error(_) => "error",
            Self::Config(_) => "config",
        }
    }
}

/// Messages sent by the watch
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatchMessage {
    /// Ask the companion to fetch weather now
    RequestWeather(WeatherRequest),
}

impl WatchMessage {
    pub fn to_frame(&self) -> Result<Frame, FrameError> {
        match self {
            Self::RequestWeather(request) => pack(MSG_REQUEST_WEATHER, request),
        }
    }

    pub fn from_frame(frame: &Frame) -> Result<Self, FrameError> {
        match frame.kind {
            MSG_REQUEST_WEATHER => unpack(frame).map(Self::RequestWeather),
            other => Err(FrameError::UnknownType(other)),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CompanionMessage {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CompanionMessage::{}", self.name());
    }
}
