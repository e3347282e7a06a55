//! Debug line
//!
//! Shows the last companion error, or when and where the last report was
//! published. Hidden unless the debug setting is on.

use heapless::String;
use nimbus_core::traits::Rect;
use nimbus_core::weather::WeatherData;
use nimbus_protocol::reports::{MAX_ERROR_LEN, MAX_LOCALE_LEN, MAX_PUBDATE_LEN};

use super::push_truncated;
use crate::backend::{Align, BackendError, DisplayBackend, Font, TEXT_COLOR};

/// Room for "<pubdate> <locale>" at their longest
const TEXT_LEN: usize = MAX_PUBDATE_LEN + 1 + MAX_LOCALE_LEN;

const _: () = assert!(MAX_ERROR_LEN <= TEXT_LEN);

pub struct DebugLayer {
    frame: Rect,
    visible: bool,
    text: String<TEXT_LEN>,
}

impl DebugLayer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            visible: false,
            text: String::new(),
        }
    }

    pub fn update(&mut self, weather: &WeatherData, enabled: bool) -> bool {
        let mut text: String<TEXT_LEN> = String::new();
        if let Some(error) = &weather.error {
            push_truncated(&mut text, error);
        } else if weather.has_data() {
            push_truncated(&mut text, &weather.pubdate);
            push_truncated(&mut text, " ");
            push_truncated(&mut text, &weather.locale);
        }

        if text == self.text && enabled == self.visible {
            return false;
        }
        self.text = text;
        self.visible = enabled;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
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
        if !self.visible || self.text.is_empty() {
            return Ok(());
        }
        backend.draw_text(self.frame, &self.text, Font::Small, Align::Center, TEXT_COLOR)
    }
}
