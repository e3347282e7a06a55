//! Face layers
//!
//! Each layer owns a frame and the text it currently shows. `update`
//! methods reformat the text and report whether it changed; `render`
//! clears the frame with the background and draws the text.

mod battery;
mod date;
mod debug;
mod time;
mod weather;

pub use battery::BatteryLayer;
pub use date::DateLayer;
pub use debug::DebugLayer;
pub use time::TimeLayer;
pub use weather::{condition_label, WeatherLayer};

use heapless::String;

/// Append as much of `text` as fits, on a char boundary
pub(crate) fn push_truncated<const N: usize>(out: &mut String<N>, text: &str) {
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_truncated() {
        let mut out: String<5> = String::new();
        push_truncated(&mut out, "Raleigh");
        assert_eq!(out.as_str(), "Ralei");
    }

    #[test]
    fn test_push_truncated_multibyte() {
        // '°' is two bytes and must not be split
        let mut out: String<3> = String::new();
        push_truncated(&mut out, "71°");
        assert_eq!(out.as_str(), "71");
    }
}
