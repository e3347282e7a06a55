//! Wall-clock time and tick events

use core::ops::{BitOr, BitOrAssign};

use chrono::{DateTime, Datelike, FixedOffset, Month, Offset, Timelike, Utc};

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Weekday {
    #[default]
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Three-letter name
    pub fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

/// Three-letter month name for 1-12, empty otherwise
pub fn month_short_name(month: u8) -> &'static str {
    match Month::try_from(month) {
        Ok(month) => {
            let name: &'static str = month.name();
            name.get(..3).unwrap_or(name)
        }
        Err(_) => "",
    }
}

/// Broken-down local time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    /// Unix seconds (UTC)
    pub epoch: u32,
    pub year: u16,
    /// Month (1-12)
    pub month: u8,
    /// Day of month (1-31)
    pub day: u8,
    pub weekday: Weekday,
    /// Hour (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
    /// Second (0-59)
    pub second: u8,
}

impl WallTime {
    /// Break down a unix timestamp shifted by a local offset in seconds
    ///
    /// Offsets of a day or more are out of range and read as UTC.
    pub fn from_epoch(epoch: u32, utc_offset_s: i32) -> Self {
        let offset = FixedOffset::east_opt(utc_offset_s).unwrap_or_else(|| Utc.fix());
        match DateTime::from_timestamp(i64::from(epoch), 0) {
            Some(utc) => Self::from_datetime(epoch, &utc.with_timezone(&offset)),
            None => Self {
                epoch,
                ..Self::default()
            },
        }
    }

    fn from_datetime(epoch: u32, local: &DateTime<FixedOffset>) -> Self {
        Self {
            epoch,
            year: local.year() as u16,
            month: local.month() as u8,
            day: local.day() as u8,
            weekday: local.weekday().into(),
            hour: local.hour() as u8,
            minute: local.minute() as u8,
            second: local.second() as u8,
        }
    }

    /// Hour on a 12-hour dial (1-12)
    pub fn hour12(&self) -> u8 {
        match self.hour % 12 {
            0 => 12,
            h => h,
        }
    }

    /// Whether the time is past noon
    pub fn is_pm(&self) -> bool {
        self.hour >= 12
    }

    fn same_date(&self, other: &WallTime) -> bool {
        self.year == other.year && self.month == other.month && self.day == other.day
    }
}

/// Bitmask of calendar units that changed between two ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeUnits(u8);

impl TimeUnits {
    pub const SECOND: TimeUnits = TimeUnits(1 << 0);
    pub const MINUTE: TimeUnits = TimeUnits(1 << 1);
    pub const HOUR: TimeUnits = TimeUnits(1 << 2);
    pub const DAY: TimeUnits = TimeUnits(1 << 3);
    pub const MONTH: TimeUnits = TimeUnits(1 << 4);
    pub const YEAR: TimeUnits = TimeUnits(1 << 5);

    pub const fn empty() -> Self {
        TimeUnits(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Whether every unit in `other` is set here
    pub const fn contains(self, other: TimeUnits) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    /// Units whose value differs between `prev` and `next`
    pub fn between(prev: &WallTime, next: &WallTime) -> Self {
        let mut units = TimeUnits::empty();
        if prev.second != next.second {
            units |= TimeUnits::SECOND;
        }
        if prev.minute != next.minute {
            units |= TimeUnits::MINUTE;
        }
        if prev.hour != next.hour {
            units |= TimeUnits::HOUR;
        }
        if !prev.same_date(next) {
            units |= TimeUnits::DAY;
        }
        if prev.month != next.month || prev.year != next.year {
            units |= TimeUnits::MONTH;
        }
        if prev.year != next.year {
            units |= TimeUnits::YEAR;
        }
        units
    }
}

impl BitOr for TimeUnits {
    type Output = TimeUnits;

    fn bitor(self, rhs: TimeUnits) -> TimeUnits {
        TimeUnits(self.0 | rhs.0)
    }
}

impl BitOrAssign for TimeUnits {
    fn bitor_assign(&mut self, rhs: TimeUnits) {
        self.0 |= rhs.0;
    }
}

/// Notification from the host clock service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickEvent {
    /// Local time at the tick
    pub time: WallTime,
    /// Units that changed since the previous tick
    pub units: TimeUnits,
}

impl TickEvent {
    pub fn new(time: WallTime, units: TimeUnits) -> Self {
        Self { time, units }
    }

    /// Tick used for the first full refresh after startup
    pub fn full_refresh(time: WallTime) -> Self {
        Self::new(time, TimeUnits::MINUTE | TimeUnits::HOUR | TimeUnits::DAY)
    }
}
