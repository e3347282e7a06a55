//! Date layer

use core::fmt::Write;

use heapless::String;
use nimbus_core::clock::{month_short_name, WallTime};
use nimbus_core::traits::Rect;

use crate::backend::{Align, BackendError, DisplayBackend, Font, TEXT_COLOR};

/// "Tue Nov 14"
pub struct DateLayer {
    frame: Rect,
    text: String<16>,
}

impl DateLayer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            text: String::new(),
        }
    }

    pub fn update(&mut self, time: &WallTime) -> bool {
        let mut text: String<16> = String::new();
        let _ = write!(
            text,
            "{} {} {}",
            time.weekday.short_name(),
            month_short_name(time.month),
            time.day
        );

        if text == self.text {
            return false;
        }
        self.text = text;
        true
    }

    pub fn text(&self) -> &str {
        &self.text
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
        backend.draw_text(self.frame, &self.text, Font::Date, Align::Center, TEXT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let mut layer = DateLayer::new(Rect::new(0, 66, 144, 32));
        assert!(layer.update(&WallTime::from_epoch(1_700_000_000, 0)));
        assert_eq!(layer.text(), "Tue Nov 14");
    }

    #[test]
    fn test_same_day_unchanged() {
        let mut layer = DateLayer::new(Rect::new(0, 66, 144, 32));
        layer.update(&WallTime::from_epoch(1_700_000_000, 0));
        assert!(!layer.update(&WallTime::from_epoch(1_700_000_060, 0)));
    }
}
