//! Configuration types
//!
//! - [`FaceConfig`]: build-time tuning loaded from TOML
//! - [`Settings`]: user choices pushed from the companion's settings page
//! - [`PersistedState`]: what survives a restart, stored as postcard binary data

pub mod face;
pub mod persist;
pub mod settings;

pub use face::{ConfigError, FaceConfig, HourFormat};
pub use persist::{load_state, save_state, PersistedState, MAX_STATE_SIZE};
pub use settings::{Settings, TempScale, WeatherService};
