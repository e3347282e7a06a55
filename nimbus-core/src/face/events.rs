//! Event handlers
//!
//! One handler per event source. Handlers never block and never fail:
//! display, link and storage errors past startup are logged and dropped so
//! the next tick runs regardless.

use nimbus_protocol::CompanionMessage;

use super::layout::LOADING_FRAME_MS;
use super::{FaceError, Watchface};
use crate::clock::{TickAction, TickEvent, TickPlan};
use crate::config::{save_state, PersistedState, Settings};
use crate::gate::Trigger;
use crate::traits::{
    BatteryState, FaceDisplay, Platform, Storage, TimerHandle, VibePattern, WeatherLink,
    WeatherView,
};

impl<P, L, S, D> Watchface<P, L, S, D>
where
    P: Platform,
    L: WeatherLink,
    S: Storage,
    D: FaceDisplay,
{
    /// Handle a calendar tick
    ///
    /// Returns the plan that was executed.
    pub fn on_tick(&mut self, tick: &TickEvent) -> TickPlan {
        let plan = TickPlan::for_tick(tick, self.gate.is_open(), self.config.refresh_interval_min);
        if let Err(e) = self.execute(&plan, tick) {
            log_warn!("tick refresh incomplete: {}", e);
        }
        plan
    }

    /// Run every step of `plan`
    ///
    /// A failing step does not stop the ones after it; the first error is
    /// returned once all steps ran.
    pub(super) fn execute(&mut self, plan: &TickPlan, tick: &TickEvent) -> Result<(), FaceError> {
        let mut result = Ok(());

        for action in plan.actions() {
            let step = match action {
                TickAction::RefreshTime => self
                    .display
                    .update_time(&tick.time, self.config.hour_format)
                    .map_err(FaceError::from),
                TickAction::CheckTimeSignal => {
                    if self
                        .config
                        .time_signal
                        .is_due(&tick.time, self.settings.time_signal)
                    {
                        log_debug!("time signal at {}:00", tick.time.hour);
                        self.platform.vibrate(VibePattern::DoublePulse);
                    }
                    Ok(())
                }
                TickAction::RefreshWeatherView => self.refresh_weather_view(),
                TickAction::RefreshDate => self
                    .display
                    .update_date(&tick.time)
                    .map_err(FaceError::from),
                TickAction::RequestWeather => {
                    self.request_weather();
                    Ok(())
                }
            };

            if let Err(e) = step {
                log_warn!("{} failed: {}", action, e);
                if result.is_ok() {
                    result = Err(e);
                }
            }
        }

        result
    }

    /// Ready message from the companion
    ///
    /// Returns `true` if this opened the gate.
    pub fn on_ready_signal(&mut self) -> bool {
        self.open_gate(Trigger::Signal)
    }

    /// A timer fired
    ///
    /// Routes to the loading animation or the readiness fallback,
    /// whichever owns `handle`. Unknown handles are ignored.
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.animation_timer == Some(handle) {
            self.animation_timer = None;
            self.next_loading_frame();
        } else {
            self.on_fallback_timer(handle);
        }
    }

    /// Fallback timer fired
    ///
    /// Events for any handle other than the pending one are stale and
    /// ignored. Returns `true` if this opened the gate.
    pub fn on_fallback_timer(&mut self, handle: TimerHandle) -> bool {
        if self.fallback_timer != Some(handle) {
            log_debug!("ignoring stale timer {}", handle.0);
            return false;
        }
        self.fallback_timer = None;
        self.open_gate(Trigger::Timeout)
    }

    /// Companion message
    pub fn on_message(&mut self, message: CompanionMessage) {
        log_debug!("companion message: {}", message.name());
        let now = self.platform.now().epoch;

        match message {
            CompanionMessage::JsReady => {
                self.on_ready_signal();
                return;
            }
            CompanionMessage::Weather(report) => {
                self.weather.apply_report(&report, self.settings.service, now);
            }
            CompanionMessage::Forecast(report) => {
                self.weather.apply_forecast(&report, now);
            }
            CompanionMessage::HourlyDisabled => self.weather.disable_hourly(),
            CompanionMessage::Error(text) => self.weather.set_error(text),
            CompanionMessage::Config(payload) => {
                let (settings, color) = Settings::from_payload(&payload);
                self.settings = settings;
                self.weather.color = color;
                let battery = self.platform.battery();
                if let Err(e) = self.display.update_battery(battery, settings.battery) {
                    log_warn!("battery redraw failed: {}", e);
                }
            }
        }

        if self.weather.has_data() {
            self.stop_loading_animation();
        }
        self.persist();
        if let Err(e) = self.refresh_weather_view() {
            log_warn!("weather redraw failed: {}", e);
        }
    }

    /// Phone connection changed
    pub fn on_connection(&mut self, connected: bool) {
        if connected == self.connected {
            return;
        }
        self.connected = connected;
        log_info!("phone {}", if connected { "connected" } else { "disconnected" });

        if let Err(e) = self.display.update_connection(connected) {
            log_warn!("connection redraw failed: {}", e);
        }
        if self.settings.bluetooth_alert {
            let pattern = if connected {
                VibePattern::ShortPulse
            } else {
                VibePattern::LongPulse
            };
            self.platform.vibrate(pattern);
        }
    }

    /// Battery state changed
    pub fn on_battery(&mut self, state: BatteryState) {
        if let Err(e) = self.display.update_battery(state, self.settings.battery) {
            log_warn!("battery redraw failed: {}", e);
        }
    }

    /// WAITING → READY, issuing the initial request on the transition
    fn open_gate(&mut self, trigger: Trigger) -> bool {
        if !self.gate.open(trigger) {
            return false;
        }
        log_info!("readiness gate opened by {}", trigger);

        if let Some(handle) = self.fallback_timer.take() {
            self.platform.cancel(handle);
        }
        self.request_weather();
        true
    }

    /// Advance the loading dots and queue the next frame
    ///
    /// Stops once weather data is present or the display refuses a frame.
    fn next_loading_frame(&mut self) {
        if self.weather.has_data() {
            return;
        }
        let view = self.weather_view();
        if let Err(e) = self.display.animate_weather(&self.weather, &view) {
            log_warn!("loading animation stopped: {}", e);
            return;
        }
        match self.platform.schedule(LOADING_FRAME_MS) {
            Ok(handle) => self.animation_timer = Some(handle),
            Err(e) => log_warn!("loading animation stopped: {}", e),
        }
    }

    fn stop_loading_animation(&mut self) {
        if let Some(handle) = self.animation_timer.take() {
            self.platform.cancel(handle);
            log_debug!("loading animation done");
        }
    }

    fn request_weather(&mut self) {
        let request = self.settings.weather_request();
        match self.link.request_weather(&request) {
            Ok(()) => log_debug!("weather requested"),
            Err(e) => log_warn!("weather request failed: {}", e),
        }
    }

    pub(super) fn weather_view(&self) -> WeatherView {
        WeatherView {
            scale: self.settings.scale,
            hourly: self.weather.hourly.enabled && !self.settings.stop_hourly,
            now: self.platform.now(),
        }
    }

    /// Redraw weather and debug, then reapply the background
    fn refresh_weather_view(&mut self) -> Result<(), FaceError> {
        let view = self.weather_view();
        self.display.update_weather(&self.weather, &view)?;
        self.display.update_debug(&self.weather, self.settings.debug)?;
        self.display.set_background(self.weather.color)?;
        Ok(())
    }

    fn persist(&mut self) {
        let state = PersistedState::capture(&self.settings, &self.weather);
        if let Err(e) = save_state(&mut self.storage, &state) {
            log_warn!("persisting face state failed: {}", e);
        }
    }
}
