//! Nimbus runtime
//!
//! Embassy glue between a board and the board-agnostic [`nimbus_core`]
//! watchface. The board crate owns the executor and peripherals; it
//! spawns the link and tick tasks around the functions exported here and
//! hands a [`Watchface`](nimbus_core::Watchface) to [`event_loop::run`].
//!
//! Host services reach the loop through the static channels in
//! [`channels`], so interrupt handlers and other tasks can feed it
//! without touching the face.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod channels;
pub mod config;
pub mod event_loop;
pub mod link;
pub mod platform;
pub mod ticks;
pub mod timer;

pub use channels::HostEvent;
pub use config::load_config;
pub use event_loop::run;
pub use link::ChannelLink;
pub use platform::{Board, HostPlatform};
