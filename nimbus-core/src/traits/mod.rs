//! Platform abstraction traits
//!
//! These traits define the interface between the watchface logic and
//! whatever hosts it: the screen, the companion link, persistent storage
//! and the host's clock, timer, connectivity, battery and vibration
//! services.

pub mod display;
pub mod host;
pub mod link;
pub mod storage;

pub use display::{DisplayError, FaceDisplay, LayerId, Rect, WeatherView, LAYER_COUNT};
pub use host::{
    BatteryMonitor, BatteryState, Clock, Connectivity, Haptics, Platform, ServiceError,
    TickService, TimerHandle, TimerService, VibePattern,
};
pub use link::{LinkError, WeatherLink};
pub use storage::{Storage, StorageError, StorageKey};
