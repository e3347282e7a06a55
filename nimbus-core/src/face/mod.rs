//! The watchface process context
//!
//! [`Watchface`] owns every piece of mutable state the face has: the
//! weather record, settings, readiness gate and the pending timers, plus
//! the collaborators it talks to. The runtime owns the `Watchface` and
//! feeds it one event at a time, so nothing here needs locking.
//!
//! Lifecycle lives in [`lifecycle`], event handlers in [`events`].

mod error;
mod events;
pub mod layout;
mod lifecycle;

#[cfg(test)]
pub(crate) mod mock;

pub use error::FaceError;

use crate::config::{FaceConfig, Settings};
use crate::gate::ReadinessGate;
use crate::traits::{FaceDisplay, Platform, Storage, TimerHandle, WeatherLink, LAYER_COUNT};
use crate::weather::WeatherData;

/// Resources acquired during startup, released by teardown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Acquired {
    window: bool,
    weather: bool,
    link: bool,
    layers: [bool; LAYER_COUNT],
    connection: bool,
    battery: bool,
    ticks: bool,
}

impl Acquired {
    fn any(&self) -> bool {
        *self != Self::default()
    }
}

/// Watchface context
pub struct Watchface<P, L, S, D>
where
    P: Platform,
    L: WeatherLink,
    S: Storage,
    D: FaceDisplay,
{
    platform: P,
    link: L,
    storage: S,
    display: D,
    config: FaceConfig,
    settings: Settings,
    weather: WeatherData,
    gate: ReadinessGate,
    fallback_timer: Option<TimerHandle>,
    animation_timer: Option<TimerHandle>,
    connected: bool,
    acquired: Acquired,
    running: bool,
}

impl<P, L, S, D> Watchface<P, L, S, D>
where
    P: Platform,
    L: WeatherLink,
    S: Storage,
    D: FaceDisplay,
{
    /// Create a stopped face
    ///
    /// Nothing is acquired until [`Watchface::start`].
    pub fn new(platform: P, link: L, storage: S, display: D, config: FaceConfig) -> Self {
        Self {
            platform,
            link,
            storage,
            display,
            config,
            settings: Settings::default(),
            weather: WeatherData::new(),
            gate: ReadinessGate::new(),
            fallback_timer: None,
            animation_timer: None,
            connected: false,
            acquired: Acquired::default(),
            running: false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn weather(&self) -> &WeatherData {
        &self.weather
    }

    pub fn gate(&self) -> &ReadinessGate {
        &self.gate
    }

    /// Pending fallback timer, if the gate is still waiting on it
    pub fn fallback_timer(&self) -> Option<TimerHandle> {
        self.fallback_timer
    }

    /// Pending loading animation frame, while weather is still empty
    pub fn animation_timer(&self) -> Option<TimerHandle> {
        self.animation_timer
    }

    /// Last known phone connection state
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn link(&self) -> &L {
        &self.link
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    #[cfg(test)]
    pub(crate) fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}

impl<P, L, S, D> Drop for Watchface<P, L, S, D>
where
    P: Platform,
    L: WeatherLink,
    S: Storage,
    D: FaceDisplay,
{
    fn drop(&mut self) {
        self.teardown();
    }
}
