//! Screen layout for a 144×168 display

use crate::traits::{LayerId, Rect, LAYER_COUNT};

pub const TIME_FRAME: Rect = Rect::new(1, 8, 144, 58);
pub const DATE_FRAME: Rect = Rect::new(0, 66, 144, 32);
pub const WEATHER_FRAME: Rect = Rect::new(0, 98, 144, 70);
pub const DEBUG_FRAME: Rect = Rect::new(0, 82, 144, 15);
pub const BATTERY_FRAME: Rect = Rect::new(56, 0, 32, 8);

/// Loading indicator frame period (ms)
pub const LOADING_FRAME_MS: u32 = 500;

/// Layers and their frames, in creation order
pub const LAYERS: [(LayerId, Rect); LAYER_COUNT] = [
    (LayerId::Time, TIME_FRAME),
    (LayerId::Date, DATE_FRAME),
    (LayerId::Weather, WEATHER_FRAME),
    (LayerId::Debug, DEBUG_FRAME),
    (LayerId::Battery, BATTERY_FRAME),
];

/// Frame for a layer
pub fn frame_of(id: LayerId) -> Rect {
    LAYERS[id.index()].1
}
