//! Minute tick dispatch
//!
//! Decides, from a tick and the readiness gate, which parts of the face to
//! refresh and whether a weather request is due. The plan is a plain value
//! so it can be checked without any collaborators; the face executes it in
//! the order given by [`TickPlan::actions`].

use heapless::Vec;

use super::time::{TickEvent, TimeUnits};

/// Default weather refresh interval in minutes
pub const DEFAULT_REFRESH_INTERVAL_MIN: u8 = 5;

/// One step of a tick, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickAction {
    /// Redraw the time layer
    RefreshTime,
    /// Check whether the hourly time signal is due
    CheckTimeSignal,
    /// Redraw weather and debug layers and the background color
    RefreshWeatherView,
    /// Redraw the date layer
    RefreshDate,
    /// Ask the companion for fresh weather
    RequestWeather,
}

/// What a single tick should do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickPlan {
    pub refresh_time: bool,
    pub check_time_signal: bool,
    pub refresh_weather_view: bool,
    pub refresh_date: bool,
    pub request_weather: bool,
}

impl TickPlan {
    /// Build the plan for `tick`
    ///
    /// - minute changed: time refresh and time-signal check; weather view
    ///   refresh too once the gate is open
    /// - day changed: date refresh, regardless of minute
    /// - minute changed, gate open and `minute % interval == 0`: request
    pub fn for_tick(tick: &TickEvent, gate_open: bool, interval_min: u8) -> Self {
        let minute_changed = tick.units.contains(TimeUnits::MINUTE);
        let day_changed = tick.units.contains(TimeUnits::DAY);
        let interval = interval_min.max(1);

        Self {
            refresh_time: minute_changed,
            check_time_signal: minute_changed,
            refresh_weather_view: minute_changed && gate_open,
            refresh_date: day_changed,
            request_weather: minute_changed && gate_open && tick.time.minute % interval == 0,
        }
    }

    /// Whether the plan does nothing
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    /// Planned actions in execution order: time, date, then the refresh check
    pub fn actions(&self) -> Vec<TickAction, 5> {
        let steps = [
            (self.refresh_time, TickAction::RefreshTime),
            (self.check_time_signal, TickAction::CheckTimeSignal),
            (self.refresh_weather_view, TickAction::RefreshWeatherView),
            (self.refresh_date, TickAction::RefreshDate),
            (self.request_weather, TickAction::RequestWeather),
        ];

        steps
            .into_iter()
            .filter_map(|(planned, action)| planned.then_some(action))
            .collect()
    }
}
