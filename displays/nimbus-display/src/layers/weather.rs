//! Weather layer
//!
//! Current temperature and condition on top, the two hourly forecast
//! slots underneath. Until the first report arrives the layer shows a
//! loading indicator instead.

use core::fmt::Write;

use heapless::String;
use nimbus_core::clock::WallTime;
use nimbus_core::traits::{Rect, WeatherView};
use nimbus_core::weather::{Condition, WeatherData};
use nimbus_protocol::HourlySlot;

use super::push_truncated;
use crate::backend::{Align, BackendError, DisplayBackend, Font, TEXT_COLOR};

const TOP_HEIGHT: u16 = 38;
const TEMP_WIDTH: u16 = 64;

/// Short label for a condition
pub fn condition_label(condition: Condition, night: bool) -> &'static str {
    match condition {
        Condition::Clear if night => "Clear night",
        Condition::Clear => "Sunny",
        Condition::PartlyCloudy => "Partly cloudy",
        Condition::MostlyCloudy => "Mostly cloudy",
        Condition::Cloudy => "Cloudy",
        Condition::Haze => "Haze",
        Condition::Fog => "Fog",
        Condition::ChanceRain => "Chance rain",
        Condition::Rain => "Rain",
        Condition::ChanceStorms => "Chance storms",
        Condition::Storms => "Storms",
        Condition::Sleet => "Sleet",
        Condition::ChanceSnow => "Chance snow",
        Condition::Snow => "Snow",
        Condition::Wind => "Windy",
        Condition::Unknown => "--",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct WeatherText {
    loading: bool,
    temperature: String<12>,
    condition: String<16>,
    hourly: Option<[String<16>; 2]>,
}

/// Current conditions and hourly forecast
pub struct WeatherLayer {
    frame: Rect,
    dots: u8,
    content: WeatherText,
}

impl WeatherLayer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            dots: 0,
            content: WeatherText {
                loading: true,
                ..WeatherText::default()
            },
        }
    }

    /// Advance the loading indicator while `weather` is still empty
    ///
    /// Returns true if the layer needs a redraw.
    pub fn animate(&mut self, weather: &WeatherData) -> bool {
        if weather.has_data() {
            return false;
        }
        self.dots = self.dots % 3 + 1;
        self.content.loading = true;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.content.loading
    }

    /// Reformat from `weather`; returns true if the text changed
    pub fn update(&mut self, weather: &WeatherData, view: &WeatherView) -> bool {
        if !weather.has_data() {
            let changed = !self.content.loading;
            self.content = WeatherText {
                loading: true,
                ..WeatherText::default()
            };
            return changed;
        }

        let mut content = WeatherText::default();
        let _ = write!(
            content.temperature,
            "{}°{}",
            weather.temperature,
            view.scale.as_char()
        );
        let night = weather.is_night(view.now.epoch);
        push_truncated(
            &mut content.condition,
            condition_label(weather.current_condition(), night),
        );
        if view.hourly {
            let [first, second] = weather.hourly.slots();
            content.hourly = Some([
                slot_text(weather, &first),
                slot_text(weather, &second),
            ]);
        }

        if content == self.content {
            return false;
        }
        self.content = content;
        true
    }

    /// Temperature text, empty while loading
    pub fn temperature(&self) -> &str {
        &self.content.temperature
    }

    pub fn condition(&self) -> &str {
        &self.content.condition
    }

    pub fn hourly(&self) -> Option<[&str; 2]> {
        self.content
            .hourly
            .as_ref()
            .map(|[a, b]| [a.as_str(), b.as_str()])
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn render<B: DisplayBackend>(
        &self,
        backend: &mut B,
        background: u8,
    ) -> Result<(), BackendError> {
        backend.fill_rect(self.frame, background)?;

        if self.content.loading {
            let mut text: String<12> = String::new();
            let _ = text.push_str("Loading");
            for _ in 0..self.dots {
                let _ = text.push('.');
            }
            return backend.draw_text(self.frame, &text, Font::Body, Align::Center, TEXT_COLOR);
        }

        let Rect { x, y, w, .. } = self.frame;
        let temp = Rect::new(x, y, TEMP_WIDTH, TOP_HEIGHT);
        let condition = Rect::new(x + TEMP_WIDTH as i16, y, w - TEMP_WIDTH, TOP_HEIGHT);
        backend.draw_text(
            temp,
            &self.content.temperature,
            Font::Temperature,
            Align::Left,
            TEXT_COLOR,
        )?;
        backend.draw_text(
            condition,
            &self.content.condition,
            Font::Body,
            Align::Right,
            TEXT_COLOR,
        )?;

        if let Some(slots) = &self.content.hourly {
            let half = w / 2;
            let bottom = self.frame.h - TOP_HEIGHT;
            let y = y + TOP_HEIGHT as i16;
            backend.draw_text(
                Rect::new(x, y, half, bottom),
                &slots[0],
                Font::Body,
                Align::Left,
                TEXT_COLOR,
            )?;
            backend.draw_text(
                Rect::new(x + half as i16, y, w - half, bottom),
                &slots[1],
                Font::Body,
                Align::Right,
                TEXT_COLOR,
            )?;
        }
        Ok(())
    }
}

/// "15h 64° 40%" in the phone's timezone
fn slot_text(weather: &WeatherData, slot: &HourlySlot) -> String<16> {
    let mut text = String::new();
    if slot.time == 0 {
        let _ = text.push_str("--");
        return text;
    }
    let local = WallTime::from_epoch(slot.time, weather.tz_offset);
    let _ = write!(text, "{:02}h {}° {}%", local.hour, slot.temperature, slot.pop);
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::testing::RecordingBackend;
    use nimbus_core::config::{TempScale, WeatherService};
    use nimbus_protocol::{ForecastReport, WeatherReport};

    fn view(hourly: bool) -> WeatherView {
        WeatherView {
            scale: TempScale::Fahrenheit,
            hourly,
            now: WallTime::from_epoch(1_700_020_000, 0),
        }
    }

    fn weather() -> WeatherData {
        let mut data = WeatherData::new();
        data.apply_report(
            &WeatherReport {
                condition: 32,
                temperature: 71,
                sunrise: 1_700_000_000,
                sunset: 1_700_040_000,
                locale: String::try_from("Raleigh").unwrap(),
                pubdate: String::try_from("9:41").unwrap(),
                tz_offset: 0,
            },
            WeatherService::Yahoo,
            1_700_010_000,
        );
        data
    }

    #[test]
    fn test_loading_until_data() {
        let mut layer = WeatherLayer::new(Rect::new(0, 98, 144, 70));
        assert!(layer.is_loading());
        assert!(!layer.update(&WeatherData::new(), &view(true)));
        assert!(layer.is_loading());

        assert!(layer.update(&weather(), &view(false)));
        assert!(!layer.is_loading());
        assert_eq!(layer.temperature(), "71°F");
        assert_eq!(layer.condition(), "Sunny");
        assert_eq!(layer.hourly(), None);
    }

    #[test]
    fn test_night_label() {
        let mut layer = WeatherLayer::new(Rect::new(0, 98, 144, 70));
        let mut v = view(false);
        v.now = WallTime::from_epoch(1_700_050_000, 0);
        layer.update(&weather(), &v);
        assert_eq!(layer.condition(), "Clear night");
    }

    #[test]
    fn test_hourly_slots() {
        let mut layer = WeatherLayer::new(Rect::new(0, 98, 144, 70));
        let mut data = weather();
        let slot = |time, temperature, pop| HourlySlot {
            time,
            condition: 12,
            temperature,
            pop,
        };
        // 2023-11-15 01:00 and 04:00 UTC
        data.apply_forecast(
            &ForecastReport {
                first: slot(1_700_010_000, 64, 40),
                second: slot(1_700_020_800, 60, 5),
            },
            1_700_010_000,
        );

        layer.update(&data, &view(true));
        assert_eq!(layer.hourly(), Some(["01h 64° 40%", "04h 60° 5%"]));
    }

    #[test]
    fn test_animate_only_while_empty() {
        let mut layer = WeatherLayer::new(Rect::new(0, 98, 144, 70));
        assert!(layer.animate(&WeatherData::new()));
        assert!(!layer.animate(&weather()));
    }

    #[test]
    fn test_render_loading() {
        let mut layer = WeatherLayer::new(Rect::new(0, 98, 144, 70));
        layer.animate(&WeatherData::new());
        let mut backend = RecordingBackend::default();
        layer.render(&mut backend, 0b1101_0101).unwrap();
        assert_eq!(backend.texts(), vec!["Loading."]);
        assert_eq!(backend.fills(), vec![(Rect::new(0, 98, 144, 70), 0b1101_0101)]);
    }

    #[test]
    fn test_render_data() {
        let mut layer = WeatherLayer::new(Rect::new(0, 98, 144, 70));
        layer.update(&weather(), &view(false));
        let mut backend = RecordingBackend::default();
        layer.render(&mut backend, 0).unwrap();
        assert_eq!(backend.texts(), vec!["71°F", "Sunny"]);
    }
}
