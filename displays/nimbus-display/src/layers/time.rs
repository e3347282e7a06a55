//! Time layer

use core::fmt::Write;

use heapless::String;
use nimbus_core::clock::WallTime;
use nimbus_core::config::HourFormat;
use nimbus_core::traits::Rect;

use crate::backend::{Align, BackendError, DisplayBackend, Font, TEXT_COLOR};

/// Large clock digits
pub struct TimeLayer {
    frame: Rect,
    text: String<8>,
}

impl TimeLayer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            text: String::new(),
        }
    }

    /// Reformat for `time`; returns true if the text changed
    pub fn update(&mut self, time: &WallTime, format: HourFormat) -> bool {
        let mut text: String<8> = String::new();
        let _ = match format {
            HourFormat::TwentyFourHour => write!(text, "{:02}:{:02}", time.hour, time.minute),
            HourFormat::TwelveHour => write!(text, "{}:{:02}", time.hour12(), time.minute),
        };

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
        backend.draw_text(self.frame, &self.text, Font::Clock, Align::Center, TEXT_COLOR)
    }
}
