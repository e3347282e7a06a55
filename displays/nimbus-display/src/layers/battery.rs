//! Battery and phone connection indicator
//!
//! A lost phone connection takes precedence over the battery gauge, since
//! it means weather will stop updating.

use core::fmt::Write;

use heapless::String;
use nimbus_core::traits::{BatteryState, Rect};

use crate::backend::{Align, BackendError, DisplayBackend, Font, TEXT_COLOR};

pub struct BatteryLayer {
    frame: Rect,
    state: BatteryState,
    enabled: bool,
    connected: bool,
    text: String<8>,
}

impl BatteryLayer {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            state: BatteryState::default(),
            enabled: true,
            connected: true,
            text: String::new(),
        }
    }

    pub fn update_battery(&mut self, state: BatteryState, enabled: bool) -> bool {
        self.state = state;
        self.enabled = enabled;
        self.refresh()
    }

    pub fn update_connection(&mut self, connected: bool) -> bool {
        self.connected = connected;
        self.refresh()
    }

    fn refresh(&mut self) -> bool {
        let mut text: String<8> = String::new();
        if !self.connected {
            let _ = text.push_str("BT!");
        } else if self.enabled {
            let _ = write!(text, "{}%", self.state.percent.min(100));
            if self.state.charging {
                let _ = text.push('+');
            }
        }

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
        if self.text.is_empty() {
            return Ok(());
        }
        backend.draw_text(self.frame, &self.text, Font::Small, Align::Center, TEXT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(percent: u8, charging: bool) -> BatteryState {
        BatteryState {
            percent,
            charging,
            plugged: charging,
        }
    }

    #[test]
    fn test_gauge() {
        let mut layer = BatteryLayer::new(Rect::new(56, 0, 32, 8));
        assert!(layer.update_battery(state(80, false), true));
        assert_eq!(layer.text(), "80%");
        layer.update_battery(state(100, true), true);
        assert_eq!(layer.text(), "100%+");
    }

    #[test]
    fn test_disabled_gauge_is_blank() {
        let mut layer = BatteryLayer::new(Rect::new(56, 0, 32, 8));
        layer.update_battery(state(80, false), false);
        assert_eq!(layer.text(), "");
    }

    #[test]
    fn test_disconnect_overrides_gauge() {
        let mut layer = BatteryLayer::new(Rect::new(56, 0, 32, 8));
        layer.update_battery(state(80, false), true);
        assert!(layer.update_connection(false));
        assert_eq!(layer.text(), "BT!");
        assert!(layer.update_connection(true));
        assert_eq!(layer.text(), "80%");
    }
}
