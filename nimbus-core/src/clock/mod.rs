//! Clock handling
//!
//! Wall-clock types delivered by the host tick service, the per-tick
//! refresh plan, and the hourly time signal.

pub mod dispatch;
pub mod signal;
pub mod time;

pub use dispatch::{TickAction, TickPlan};
pub use signal::TimeSignal;
pub use time::{month_short_name, TickEvent, TimeUnits, WallTime, Weekday};
