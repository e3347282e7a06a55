//! Startup and shutdown
//!
//! Startup acquires resources in a fixed order and records each one as it
//! succeeds. Any failure tears down what was acquired and returns the
//! error. Shutdown runs the same teardown; it is idempotent and also runs
//! from `Drop`.

use super::layout::{LAYERS, LOADING_FRAME_MS};
use super::{Acquired, FaceError, Watchface};
use crate::clock::{TickEvent, TickPlan, TimeUnits};
use crate::config::load_state;
use crate::gate::ReadinessGate;
use crate::traits::{FaceDisplay, Platform, Storage, WeatherLink};
use crate::weather::WeatherData;

impl<P, L, S, D> Watchface<P, L, S, D>
where
    P: Platform,
    L: WeatherLink,
    S: Storage,
    D: FaceDisplay,
{
    /// Bring the face up
    pub fn start(&mut self) -> Result<(), FaceError> {
        if self.running {
            return Err(FaceError::AlreadyRunning);
        }

        log_info!("face starting");
        match self.acquire() {
            Ok(()) => {
                self.running = true;
                log_info!("face running");
                Ok(())
            }
            Err(e) => {
                log_warn!("face startup failed: {}", e);
                self.teardown();
                Err(e)
            }
        }
    }

    /// Shut the face down
    ///
    /// Safe to call more than once.
    pub fn stop(&mut self) {
        if self.running || self.acquired.any() {
            log_info!("face stopping");
        }
        self.teardown();
    }

    fn acquire(&mut self) -> Result<(), FaceError> {
        self.display.push_window()?;
        self.acquired.window = true;

        self.weather = WeatherData::new();
        self.gate = ReadinessGate::new();
        self.acquired.weather = true;

        self.link.open()?;
        self.acquired.link = true;

        self.display.set_background(self.weather.color)?;

        for (id, frame) in LAYERS {
            self.display.create_layer(id, frame)?;
            self.acquired.layers[id.index()] = true;
        }

        if let Some(state) = load_state(&mut self.storage)? {
            let (settings, weather) = state.restore();
            self.settings = settings;
            self.weather = weather;
            log_debug!("restored persisted state");
        }
        self.display.set_background(self.weather.color)?;

        // Startup peek: indicator only, no cue
        self.connected = self.platform.is_connected();
        self.display.update_connection(self.connected)?;
        self.platform.subscribe_connection()?;
        self.acquired.connection = true;

        let battery = self.platform.battery();
        self.display.update_battery(battery, self.settings.battery)?;
        self.platform.subscribe_battery()?;
        self.acquired.battery = true;

        let view = self.weather_view();
        self.display.animate_weather(&self.weather, &view)?;

        let handle = self.platform.schedule(self.config.fallback_wait_ms)?;
        self.fallback_timer = Some(handle);

        if !self.weather.has_data() {
            let frame = self.platform.schedule(LOADING_FRAME_MS)?;
            self.animation_timer = Some(frame);
        }

        let tick = TickEvent::full_refresh(self.platform.now());
        let plan = TickPlan::for_tick(&tick, self.gate.is_open(), self.config.refresh_interval_min);
        self.execute(&plan, &tick)?;

        self.platform.subscribe_ticks(TimeUnits::MINUTE)?;
        self.acquired.ticks = true;

        Ok(())
    }

    /// Release whatever is currently held, in shutdown order
    pub(super) fn teardown(&mut self) {
        let held = self.acquired;
        self.acquired = Acquired::default();
        self.running = false;

        if held.ticks {
            self.platform.unsubscribe_ticks();
        }
        if let Some(handle) = self.fallback_timer.take() {
            self.platform.cancel(handle);
        }
        if let Some(handle) = self.animation_timer.take() {
            self.platform.cancel(handle);
        }
        if held.window {
            self.display.release_window();
        }
        for (id, _) in LAYERS {
            if held.layers[id.index()] {
                self.display.destroy_layer(id);
            }
        }
        if held.connection {
            self.platform.unsubscribe_connection();
        }
        if held.battery {
            self.platform.unsubscribe_battery();
        }
        if held.weather {
            self.weather = WeatherData::new();
        }
        if held.link {
            self.link.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::mock::{
        face, face_with, persisted, Call, MockDisplay, MockLink, MockPlatform, MockStorage,
    };
    use crate::color::BackgroundColor;
    use crate::config::FaceConfig;
    use crate::traits::{LayerId, ServiceError, StorageError, TimerHandle};

    #[test]
    fn test_startup_order() {
        let mut face = face();
        face.start().unwrap();

        let calls = face.display().calls.clone();
        let position = |call: &Call| calls.iter().position(|c| c == call).unwrap();

        let first_background = position(&Call::Background(BackgroundColor::DarkGray));
        assert!(position(&Call::PushWindow) < first_background);
        assert!(
            position(&Call::CreateLayer(LayerId::Time))
                < position(&Call::CreateLayer(LayerId::Battery))
        );
        assert!(position(&Call::CreateLayer(LayerId::Battery)) < position(&Call::Connection(true)));
        assert!(position(&Call::Connection(true)) < position(&Call::Animate));
        assert!(position(&Call::Animate) < position(&Call::Time));

        assert!(face.is_running());
        assert!(face.link().opened);
        assert_eq!(face.platform().scheduled, vec![5000, 500]);
        assert_eq!(face.fallback_timer(), Some(TimerHandle(1)));
        assert_eq!(face.animation_timer(), Some(TimerHandle(2)));
        assert!(face.platform().ticks_subscribed);
        assert!(face.platform().connection_subscribed);
        assert!(face.platform().battery_subscribed);
    }

    #[test]
    fn test_startup_full_refresh_without_request() {
        let mut face = face();
        face.start().unwrap();

        assert_eq!(face.display().count(&Call::Time), 1);
        assert_eq!(face.display().count(&Call::Date), 1);
        // gate still closed
        assert_eq!(face.display().count(&Call::Weather), 0);
        assert!(face.link().requests.is_empty());
    }

    #[test]
    fn test_startup_without_persisted_state_uses_default_color() {
        let mut face = face();
        face.start().unwrap();
        assert_eq!(face.display().background, Some(BackgroundColor::DarkGray));
        assert_eq!(face.weather().color, BackgroundColor::DarkGray);
    }

    #[test]
    fn test_startup_applies_persisted_color() {
        let mut face = face_with(
            MockPlatform::default(),
            MockLink::default(),
            persisted("red"),
            MockDisplay::default(),
        );
        face.start().unwrap();
        assert_eq!(face.display().background, Some(BackgroundColor::Red));
    }

    #[test]
    fn test_startup_peek_gives_no_cue() {
        let mut face = face();
        face.start().unwrap();
        assert!(face.is_connected());
        assert!(face.platform().vibes.is_empty());
    }

    #[test]
    fn test_custom_fallback_wait() {
        let config = FaceConfig {
            fallback_wait_ms: 2500,
            ..FaceConfig::default()
        };
        let mut face = super::super::Watchface::new(
            MockPlatform::default(),
            MockLink::default(),
            MockStorage::default(),
            MockDisplay::default(),
            config,
        );
        face.start().unwrap();
        assert_eq!(face.platform().scheduled, vec![2500, 500]);
    }

    #[test]
    fn test_start_twice() {
        let mut face = face();
        face.start().unwrap();
        assert_eq!(face.start(), Err(super::FaceError::AlreadyRunning));
        assert!(face.is_running());
    }

    #[test]
    fn test_layer_failure_rolls_back() {
        let display = MockDisplay {
            fail_layer: Some(LayerId::Weather),
            ..MockDisplay::default()
        };
        let mut face = face_with(
            MockPlatform::default(),
            MockLink::default(),
            MockStorage::default(),
            display,
        );

        assert!(face.start().is_err());
        assert!(!face.is_running());
        assert!(!face.display().window);
        assert!(face.display().layers.iter().all(|l| !l));
        assert_eq!(face.display().count(&Call::Destroy(LayerId::Time)), 1);
        assert_eq!(face.display().count(&Call::Destroy(LayerId::Date)), 1);
        // never created, never destroyed
        assert_eq!(face.display().count(&Call::Destroy(LayerId::Debug)), 0);
        assert!(face.link().closed);
        assert!(face.platform().scheduled.is_empty());
    }

    #[test]
    fn test_tick_subscription_failure_cancels_timer() {
        let mut face = face_with(
            MockPlatform::failing_ticks(),
            MockLink::default(),
            MockStorage::default(),
            MockDisplay::default(),
        );

        assert_eq!(
            face.start(),
            Err(super::FaceError::Service(ServiceError::AlreadySubscribed))
        );
        assert_eq!(face.platform().cancelled, vec![TimerHandle(1), TimerHandle(2)]);
        assert!(!face.platform().connection_subscribed);
        assert!(!face.platform().battery_subscribed);
        assert_eq!(face.fallback_timer(), None);
        assert_eq!(face.animation_timer(), None);
    }

    #[test]
    fn test_storage_failure_rolls_back() {
        let storage = MockStorage {
            fail_reads: true,
            ..MockStorage::default()
        };
        let mut face = face_with(
            MockPlatform::default(),
            MockLink::default(),
            storage,
            MockDisplay::default(),
        );

        assert_eq!(face.start(), Err(super::FaceError::Storage(StorageError::Io)));
        assert!(!face.display().window);
        assert!(face.link().closed);
    }

    #[test]
    fn test_link_failure_releases_window() {
        let link = MockLink {
            fail_open: true,
            ..MockLink::default()
        };
        let mut face = face_with(
            MockPlatform::default(),
            link,
            MockStorage::default(),
            MockDisplay::default(),
        );

        assert!(face.start().is_err());
        assert!(!face.display().window);
        assert!(!face.link().closed);
    }

    #[test]
    fn test_shutdown_releases_everything() {
        let mut face = face();
        face.start().unwrap();
        face.stop();

        assert!(!face.is_running());
        assert!(!face.platform().ticks_subscribed);
        assert!(!face.platform().connection_subscribed);
        assert!(!face.platform().battery_subscribed);
        assert!(!face.display().window);
        assert!(face.display().layers.iter().all(|l| !l));
        assert!(face.link().closed);
        assert!(!face.weather().has_data());
    }

    #[test]
    fn test_shutdown_order() {
        let mut face = face();
        face.start().unwrap();
        face.stop();

        let calls = &face.display().calls;
        let release = calls.iter().position(|c| *c == Call::ReleaseWindow).unwrap();
        let destroy = calls
            .iter()
            .position(|c| *c == Call::Destroy(LayerId::Time))
            .unwrap();
        assert!(release < destroy);
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let mut face = face();
        face.start().unwrap();
        face.stop();
        face.stop();

        assert_eq!(face.display().count(&Call::ReleaseWindow), 1);
        assert_eq!(face.display().count(&Call::Destroy(LayerId::Battery)), 1);
        assert_eq!(face.link().close_count, 1);
    }

    #[test]
    fn test_shutdown_cancels_pending_timer() {
        let mut face = face();
        face.start().unwrap();
        face.stop();
        assert_eq!(face.platform().cancelled, vec![TimerHandle(1), TimerHandle(2)]);
        assert_eq!(face.fallback_timer(), None);
        assert_eq!(face.animation_timer(), None);
    }

    #[test]
    fn test_restored_weather_skips_loading_animation() {
        let mut face = face_with(
            MockPlatform::default(),
            MockLink::default(),
            persisted("black"),
            MockDisplay::default(),
        );
        face.start().unwrap();
        assert_eq!(face.platform().scheduled, vec![5000]);
        assert_eq!(face.animation_timer(), None);
    }

    #[test]
    fn test_stop_before_start_is_noop() {
        let mut face = face();
        face.stop();
        assert!(face.display().calls.is_empty());
        assert!(!face.link().closed);
    }

    #[test]
    fn test_restart_after_stop() {
        let mut face = face();
        face.start().unwrap();
        face.stop();
        face.start().unwrap();
        assert!(face.is_running());
        assert!(face.display().window);
    }
}
