//! Display facade for the watchface
//!
//! The face owns one top-level window and five sub-elements (layers).
//! Implementations decide how each layer is drawn; the face only says
//! when and with what data.

use crate::clock::WallTime;
use crate::color::BackgroundColor;
use crate::config::{HourFormat, TempScale};
use crate::weather::WeatherData;

use super::host::BatteryState;

/// Errors that can occur while driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// No window has been pushed
    NoWindow,
    /// Layer does not exist
    NoLayer,
    /// Layer already exists
    LayerExists,
    /// Out of drawing resources
    OutOfMemory,
    /// Backend failed to draw or flush
    Backend,
}

/// A screen region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i16,
    pub y: i16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: i16, y: i16, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }
}

/// Number of display sub-elements
pub const LAYER_COUNT: usize = 5;

/// Display sub-elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayerId {
    Time,
    Date,
    Weather,
    Debug,
    Battery,
}

impl LayerId {
    /// All layers, in creation order
    pub const ALL: [LayerId; LAYER_COUNT] = [
        LayerId::Time,
        LayerId::Date,
        LayerId::Weather,
        LayerId::Debug,
        LayerId::Battery,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Presentation context for a weather redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WeatherView {
    pub scale: TempScale,
    /// Whether the hourly forecast should be shown
    pub hourly: bool,
    pub now: WallTime,
}

/// Trait for the watchface display
pub trait FaceDisplay {
    /// Acquire the top-level window
    fn push_window(&mut self) -> Result<(), DisplayError>;

    /// Release the top-level window
    fn release_window(&mut self);

    /// Set the window background
    fn set_background(&mut self, color: BackgroundColor) -> Result<(), DisplayError>;

    /// Create a sub-element in `frame`
    fn create_layer(&mut self, id: LayerId, frame: Rect) -> Result<(), DisplayError>;

    /// Destroy a sub-element; destroying a missing layer is a no-op
    fn destroy_layer(&mut self, id: LayerId);

    fn update_time(&mut self, time: &WallTime, format: HourFormat) -> Result<(), DisplayError>;

    fn update_date(&mut self, time: &WallTime) -> Result<(), DisplayError>;

    fn update_weather(
        &mut self,
        weather: &WeatherData,
        view: &WeatherView,
    ) -> Result<(), DisplayError>;

    /// Start the loading animation
    ///
    /// Runs until `weather` holds data; a record restored from storage is
    /// drawn straight away.
    fn animate_weather(
        &mut self,
        weather: &WeatherData,
        view: &WeatherView,
    ) -> Result<(), DisplayError>;

    /// Redraw the debug line; hidden when `enabled` is false
    fn update_debug(&mut self, weather: &WeatherData, enabled: bool) -> Result<(), DisplayError>;

    /// Redraw the battery gauge; hidden when `enabled` is false
    fn update_battery(&mut self, state: BatteryState, enabled: bool) -> Result<(), DisplayError>;

    /// Redraw the phone connection indicator
    fn update_connection(&mut self, connected: bool) -> Result<(), DisplayError>;
}
