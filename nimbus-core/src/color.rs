//! Background color mapping
//!
//! Color tokens arrive as strings from the companion and from persisted
//! state. They are decoded once, here, into a closed enum; everything past
//! the ingestion boundary works with [`BackgroundColor`].

use serde::{Deserialize, Serialize};

/// Token for the duke blue background
pub const COLOR_DUKEBLUE: &str = "dukeblue";
/// Token for the black background
pub const COLOR_BLACK: &str = "black";
/// Token for the red background
pub const COLOR_RED: &str = "red";
/// Token written back for the fallback color
pub const COLOR_DARKGRAY: &str = "darkgray";

/// Watchface background color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackgroundColor {
    DukeBlue,
    Black,
    Red,
    /// Used for any token that is not recognized
    #[default]
    DarkGray,
}

impl BackgroundColor {
    /// Map a color token to a background color
    ///
    /// Matching is exact. Unknown, empty or malformed tokens yield
    /// [`BackgroundColor::DarkGray`].
    pub fn from_token(token: &str) -> Self {
        match token {
            COLOR_DUKEBLUE => Self::DukeBlue,
            COLOR_BLACK => Self::Black,
            COLOR_RED => Self::Red,
            _ => Self::DarkGray,
        }
    }

    /// Token for this color, suitable for persisting
    pub const fn token(self) -> &'static str {
        match self {
            Self::DukeBlue => COLOR_DUKEBLUE,
            Self::Black => COLOR_BLACK,
            Self::Red => COLOR_RED,
            Self::DarkGray => COLOR_DARKGRAY,
        }
    }

    /// 8-bit ARGB (2 bits per channel) as used by 64-color watch displays
    pub const fn argb8(self) -> u8 {
        match self {
            Self::DukeBlue => 0b1100_0010,
            Self::Black => 0b1100_0000,
            Self::Red => 0b1111_0000,
            Self::DarkGray => 0b1101_0101,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_tokens() {
        assert_eq!(BackgroundColor::from_token("dukeblue"), BackgroundColor::DukeBlue);
        assert_eq!(BackgroundColor::from_token("black"), BackgroundColor::Black);
        assert_eq!(BackgroundColor::from_token("red"), BackgroundColor::Red);
    }

    #[test]
    fn test_unknown_tokens_fall_back() {
        for token in ["", "blue", "RED", " red", "duke", "darkgray", "red\0"] {
            assert_eq!(
                BackgroundColor::from_token(token),
                BackgroundColor::DarkGray,
                "token {:?}",
                token
            );
        }
    }

    #[test]
    fn test_token_round_trip_for_named_colors() {
        for color in [
            BackgroundColor::DukeBlue,
            BackgroundColor::Black,
            BackgroundColor::Red,
        ] {
            assert_eq!(BackgroundColor::from_token(color.token()), color);
        }
    }

    #[test]
    fn test_default_is_dark_gray() {
        assert_eq!(BackgroundColor::default(), BackgroundColor::DarkGray);
    }

    #[test]
    fn test_palette_is_opaque() {
        for color in [
            BackgroundColor::DukeBlue,
            BackgroundColor::Black,
            BackgroundColor::Red,
            BackgroundColor::DarkGray,
        ] {
            assert_eq!(color.argb8() >> 6, 0b11);
        }
    }

    proptest! {
        #[test]
        fn mapping_is_stable(token in ".{0,16}") {
            let first = BackgroundColor::from_token(&token);
            let second = BackgroundColor::from_token(&token);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn anything_else_is_dark_gray(token in "[a-z]{0,12}") {
            prop_assume!(!matches!(token.as_str(), "dukeblue" | "black" | "red"));
            prop_assert_eq!(BackgroundColor::from_token(&token), BackgroundColor::DarkGray);
        }
    }
}
