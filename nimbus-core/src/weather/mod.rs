//! Weather record and condition decoding

pub mod condition;
pub mod data;

pub use condition::Condition;
pub use data::{HourlyForecast, WeatherData};
