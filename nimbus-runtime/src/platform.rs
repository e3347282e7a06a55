//! Host platform assembly
//!
//! Boards provide the clock, connectivity, battery and haptics; the
//! runtime adds timers and tick delivery on top.

use nimbus_core::clock::{TimeUnits, WallTime};
use nimbus_core::traits::{
    BatteryMonitor, BatteryState, Clock, Connectivity, Haptics, ServiceError, TickService,
    TimerHandle, TimerService, VibePattern,
};

use crate::ticks::MinuteTicks;
use crate::timer::EmbassyTimers;

/// Services a board must implement itself
pub trait Board: Clock + Connectivity + BatteryMonitor + Haptics {}

impl<T: Clock + Connectivity + BatteryMonitor + Haptics> Board for T {}

/// Complete [`Platform`](nimbus_core::traits::Platform) for a board
pub struct HostPlatform<B: Board> {
    board: B,
    timers: EmbassyTimers,
    ticks: MinuteTicks,
}

impl<B: Board> HostPlatform<B> {
    pub fn new(board: B) -> Self {
        Self {
            board,
            timers: EmbassyTimers::new(),
            ticks: MinuteTicks,
        }
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut B {
        &mut self.board
    }
}

impl<B: Board> Clock for HostPlatform<B> {
    fn now(&self) -> WallTime {
        self.board.now()
    }
}

impl<B: Board> TimerService for HostPlatform<B> {
    fn schedule(&mut self, delay_ms: u32) -> Result<TimerHandle, ServiceError> {
        self.timers.schedule(delay_ms)
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.timers.cancel(handle)
    }
}

impl<B: Board> TickService for HostPlatform<B> {
    fn subscribe_ticks(&mut self, units: TimeUnits) -> Result<(), ServiceError> {
        self.ticks.subscribe_ticks(units)
    }

    fn unsubscribe_ticks(&mut self) {
        self.ticks.unsubscribe_ticks()
    }
}

impl<B: Board> Connectivity for HostPlatform<B> {
    fn is_connected(&self) -> bool {
        self.board.is_connected()
    }

    fn subscribe_connection(&mut self) -> Result<(), ServiceError> {
        self.board.subscribe_connection()
    }

    fn unsubscribe_connection(&mut self) {
        self.board.unsubscribe_connection()
    }
}

impl<B: Board> BatteryMonitor for HostPlatform<B> {
    fn battery(&self) -> BatteryState {
        self.board.battery()
    }

    fn subscribe_battery(&mut self) -> Result<(), ServiceError> {
        self.board.subscribe_battery()
    }

    fn unsubscribe_battery(&mut self) {
        self.board.unsubscribe_battery()
    }
}

impl<B: Board> Haptics for HostPlatform<B> {
    fn vibrate(&mut self, pattern: VibePattern) {
        self.board.vibrate(pattern)
    }
}
