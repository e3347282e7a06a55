//! Display layers and renderer for the Nimbus watchface
//!
//! This crate provides:
//! - `DisplayBackend` trait for the panel (memory LCD, e-paper, simulator)
//! - One layer type per face element: time, date, weather, debug, battery
//! - `FaceRenderer`, which implements the core `FaceDisplay` facade on top
//!   of any backend
//!
//! # Architecture
//!
//! Layers only hold text. Each update reformats the layer's text and, when
//! it changed, the renderer clears the layer's frame with the background
//! color and draws the text again. Nothing is kept as pixels here; the
//! backend owns the framebuffer.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod backend;
pub mod layers;
pub mod renderer;

pub use backend::{Align, BackendError, DisplayBackend, Font, TEXT_COLOR};
pub use layers::{BatteryLayer, DateLayer, DebugLayer, TimeLayer, WeatherLayer};
pub use renderer::FaceRenderer;
