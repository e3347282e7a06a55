//! Board-agnostic core logic for the Nimbus watchface
//!
//! This crate contains all application logic that does not depend on a
//! specific watch platform:
//!
//! - Collaborator traits (display, companion link, storage, host services)
//! - Weather record and condition decoding
//! - Background color mapping
//! - Readiness gate for the first weather request
//! - Minute tick dispatch and the hourly time signal
//! - Settings, face configuration and persisted state
//! - The [`Watchface`] context that ties them together

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[cfg(feature = "toml")]
extern crate alloc;

#[macro_use]
mod log;

pub mod clock;
pub mod color;
pub mod config;
pub mod face;
pub mod gate;
pub mod traits;
pub mod weather;

pub use color::BackgroundColor;
pub use face::{FaceError, Watchface};
pub use gate::{ReadinessGate, Trigger};
pub use weather::WeatherData;
