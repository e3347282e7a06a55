//! Companion Link Protocol
//!
//! This crate defines the byte-stream protocol between the watchface and the
//! phone-side companion that performs the actual weather fetch. The companion
//! announces itself with a ready message, answers weather requests with
//! reports, and pushes settings changes made on the phone.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Payloads are postcard-encoded structs from [`reports`]. Tokens such as the
//! weather service or the background color travel as short strings; the
//! watch decodes them into closed enums on arrival.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod frame;
pub mod messages;
pub mod reports;

pub use frame::{Frame, FrameDecoder, FrameError, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{CompanionMessage, WatchMessage};
pub use reports::{
    ErrorText, ForecastReport, HourlySlot, SettingsPayload, WeatherReport, WeatherRequest,
};
