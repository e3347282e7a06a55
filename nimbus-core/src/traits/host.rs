//! Host services
//!
//! The watch platform provides wall-clock time, one-shot timers, minute
//! ticks, phone connectivity, battery state and a vibration motor. Each
//! is its own small trait; [`Platform`] bundles them for the face.

use crate::clock::{TimeUnits, WallTime};

/// Errors from host services
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ServiceError {
    /// Service is not available on this platform
    Unavailable,
    /// A subscription is already active
    AlreadySubscribed,
    /// No timer slot left
    NoTimers,
}

/// Handle of a scheduled one-shot timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimerHandle(pub u32);

/// Battery charge state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryState {
    /// Charge level (0-100)
    pub percent: u8,
    pub charging: bool,
    pub plugged: bool,
}

/// Vibration patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VibePattern {
    ShortPulse,
    LongPulse,
    DoublePulse,
}

/// Wall-clock source
pub trait Clock {
    /// Current local time
    fn now(&self) -> WallTime;
}

/// One-shot timers
pub trait TimerService {
    /// Schedule a timer that fires once after `delay_ms`
    fn schedule(&mut self, delay_ms: u32) -> Result<TimerHandle, ServiceError>;

    /// Cancel a pending timer
    ///
    /// Cancelling a timer that already fired or was cancelled is a no-op.
    fn cancel(&mut self, handle: TimerHandle);
}

/// Calendar tick subscription
pub trait TickService {
    /// Deliver a tick whenever one of `units` changes
    fn subscribe_ticks(&mut self, units: TimeUnits) -> Result<(), ServiceError>;

    fn unsubscribe_ticks(&mut self);
}

/// Phone connection status
pub trait Connectivity {
    /// Whether the phone is connected right now
    fn is_connected(&self) -> bool;

    fn subscribe_connection(&mut self) -> Result<(), ServiceError>;

    fn unsubscribe_connection(&mut self);
}

/// Battery status
pub trait BatteryMonitor {
    fn battery(&self) -> BatteryState;

    fn subscribe_battery(&mut self) -> Result<(), ServiceError>;

    fn unsubscribe_battery(&mut self);
}

/// Vibration motor
pub trait Haptics {
    fn vibrate(&mut self, pattern: VibePattern);
}

/// Everything the face needs from its host
pub trait Platform:
    Clock + TimerService + TickService + Connectivity + BatteryMonitor + Haptics
{
}

impl<T> Platform for T where
    T: Clock + TimerService + TickService + Connectivity + BatteryMonitor + Haptics
{
}
