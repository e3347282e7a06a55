//! Face renderer
//!
//! Implements the core `FaceDisplay` facade on top of a `DisplayBackend`.
//! A layer is redrawn and flushed only when its text changed; a new
//! background repaints the whole window.

use nimbus_core::clock::WallTime;
use nimbus_core::color::BackgroundColor;
use nimbus_core::config::HourFormat;
use nimbus_core::traits::{BatteryState, DisplayError, FaceDisplay, LayerId, Rect, WeatherView};
use nimbus_core::weather::WeatherData;

use crate::backend::{BackendError, DisplayBackend};
use crate::layers::{BatteryLayer, DateLayer, DebugLayer, TimeLayer, WeatherLayer};

impl From<BackendError> for DisplayError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::BufferOverflow => DisplayError::OutOfMemory,
            _ => DisplayError::Backend,
        }
    }
}

/// Renders the face to a backend
pub struct FaceRenderer<B: DisplayBackend> {
    backend: B,
    window: bool,
    background: BackgroundColor,
    time: Option<TimeLayer>,
    date: Option<DateLayer>,
    weather: Option<WeatherLayer>,
    debug: Option<DebugLayer>,
    battery: Option<BatteryLayer>,
    /// Connection state seen before the battery layer existed
    connected: bool,
}

impl<B: DisplayBackend> FaceRenderer<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            window: false,
            background: BackgroundColor::default(),
            time: None,
            date: None,
            weather: None,
            debug: None,
            battery: None,
            connected: true,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    pub fn background(&self) -> BackgroundColor {
        self.background
    }

    pub fn has_layer(&self, id: LayerId) -> bool {
        match id {
            LayerId::Time => self.time.is_some(),
            LayerId::Date => self.date.is_some(),
            LayerId::Weather => self.weather.is_some(),
            LayerId::Debug => self.debug.is_some(),
            LayerId::Battery => self.battery.is_some(),
        }
    }

    pub fn time_layer(&self) -> Option<&TimeLayer> {
        self.time.as_ref()
    }

    pub fn date_layer(&self) -> Option<&DateLayer> {
        self.date.as_ref()
    }

    pub fn weather_layer(&self) -> Option<&WeatherLayer> {
        self.weather.as_ref()
    }

    pub fn debug_layer(&self) -> Option<&DebugLayer> {
        self.debug.as_ref()
    }

    pub fn battery_layer(&self) -> Option<&BatteryLayer> {
        self.battery.as_ref()
    }

    fn require_window(&self) -> Result<(), DisplayError> {
        if self.window {
            Ok(())
        } else {
            Err(DisplayError::NoWindow)
        }
    }

    fn full_frame(&self) -> Rect {
        let (w, h) = self.backend.size();
        Rect::new(0, 0, w, h)
    }

    /// Repaint the window and every live layer
    fn repaint(&mut self) -> Result<(), DisplayError> {
        let bg = self.background.argb8();
        self.backend.fill_rect(self.full_frame(), bg)?;
        for id in LayerId::ALL {
            self.render_layer(id)?;
        }
        self.backend.flush()?;
        Ok(())
    }

    fn render_layer(&mut self, id: LayerId) -> Result<(), BackendError> {
        let bg = self.background.argb8();
        let backend = &mut self.backend;
        match id {
            LayerId::Time => self.time.as_ref().map(|l| l.render(backend, bg)),
            LayerId::Date => self.date.as_ref().map(|l| l.render(backend, bg)),
            LayerId::Weather => self.weather.as_ref().map(|l| l.render(backend, bg)),
            LayerId::Debug => self.debug.as_ref().map(|l| l.render(backend, bg)),
            LayerId::Battery => self.battery.as_ref().map(|l| l.render(backend, bg)),
        }
        .unwrap_or(Ok(()))
    }

    /// Draw and flush one layer if `changed`
    fn commit(&mut self, id: LayerId, changed: bool) -> Result<(), DisplayError> {
        if changed {
            self.render_layer(id)?;
            self.backend.flush()?;
        }
        Ok(())
    }
}

impl<B: DisplayBackend> FaceDisplay for FaceRenderer<B> {
    fn push_window(&mut self) -> Result<(), DisplayError> {
        self.window = true;
        self.repaint()
    }

    fn release_window(&mut self) {
        self.window = false;
    }

    fn set_background(&mut self, color: BackgroundColor) -> Result<(), DisplayError> {
        self.require_window()?;
        if color == self.background {
            return Ok(());
        }
        self.background = color;
        self.repaint()
    }

    fn create_layer(&mut self, id: LayerId, frame: Rect) -> Result<(), DisplayError> {
        self.require_window()?;
        if self.has_layer(id) {
            return Err(DisplayError::LayerExists);
        }
        match id {
            LayerId::Time => self.time = Some(TimeLayer::new(frame)),
            LayerId::Date => self.date = Some(DateLayer::new(frame)),
            LayerId::Weather => self.weather = Some(WeatherLayer::new(frame)),
            LayerId::Debug => self.debug = Some(DebugLayer::new(frame)),
            LayerId::Battery => {
                let mut layer = BatteryLayer::new(frame);
                layer.update_connection(self.connected);
                self.battery = Some(layer);
            }
        }
        self.commit(id, true)
    }

    fn destroy_layer(&mut self, id: LayerId) {
        match id {
            LayerId::Time => self.time = None,
            LayerId::Date => self.date = None,
            LayerId::Weather => self.weather = None,
            LayerId::Debug => self.debug = None,
            LayerId::Battery => self.battery = None,
        }
    }

    fn update_time(&mut self, time: &WallTime, format: HourFormat) -> Result<(), DisplayError> {
        let layer = self.time.as_mut().ok_or(DisplayError::NoLayer)?;
        let changed = layer.update(time, format);
        self.commit(LayerId::Time, changed)
    }

    fn update_date(&mut self, time: &WallTime) -> Result<(), DisplayError> {
        let layer = self.date.as_mut().ok_or(DisplayError::NoLayer)?;
        let changed = layer.update(time);
        self.commit(LayerId::Date, changed)
    }

    fn update_weather(
        &mut self,
        weather: &WeatherData,
        view: &WeatherView,
    ) -> Result<(), DisplayError> {
        let layer = self.weather.as_mut().ok_or(DisplayError::NoLayer)?;
        let changed = layer.update(weather, view);
        self.commit(LayerId::Weather, changed)
    }

    fn animate_weather(
        &mut self,
        weather: &WeatherData,
        view: &WeatherView,
    ) -> Result<(), DisplayError> {
        let layer = self.weather.as_mut().ok_or(DisplayError::NoLayer)?;
        let changed = if weather.has_data() {
            layer.update(weather, view)
        } else {
            layer.animate(weather)
        };
        self.commit(LayerId::Weather, changed)
    }

    fn update_debug(&mut self, weather: &WeatherData, enabled: bool) -> Result<(), DisplayError> {
        let layer = self.debug.as_mut().ok_or(DisplayError::NoLayer)?;
        let changed = layer.update(weather, enabled);
        self.commit(LayerId::Debug, changed)
    }

    fn update_battery(&mut self, state: BatteryState, enabled: bool) -> Result<(), DisplayError> {
        let layer = self.battery.as_mut().ok_or(DisplayError::NoLayer)?;
        let changed = layer.update_battery(state, enabled);
        self.commit(LayerId::Battery, changed)
    }

    fn update_connection(&mut self, connected: bool) -> Result<(), DisplayError> {
        self.connected = connected;
        let changed = match self.battery.as_mut() {
            Some(layer) => layer.update_connection(connected),
            None => false,
        };
        self.commit(LayerId::Battery, changed)
    }
}
