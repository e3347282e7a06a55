//! Display backend trait
//!
//! Defines the interface for the panel the face is drawn on.

use nimbus_core::traits::Rect;

/// Text color on every background (8-bit ARGB white)
pub const TEXT_COLOR: u8 = 0b1111_1111;

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BackendError {
    /// Communication error with the panel
    Communication,
    /// Region lies outside the panel
    InvalidCoordinates,
    /// Panel not initialized
    NotInitialized,
    /// Text or framebuffer overflow
    BufferOverflow,
}

/// Fonts available to the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Font {
    /// Large digits for the time
    Clock,
    /// Date line
    Date,
    /// Current temperature
    Temperature,
    /// Condition, hourly slots
    Body,
    /// Debug and battery lines
    Small,
}

/// Horizontal text alignment within a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Display backend trait
///
/// Colors are 8-bit ARGB, two bits per channel.
pub trait DisplayBackend {
    /// Fill a region with a solid color
    fn fill_rect(&mut self, rect: Rect, color: u8) -> Result<(), BackendError>;

    /// Draw text clipped to `rect`
    fn draw_text(
        &mut self,
        rect: Rect,
        text: &str,
        font: Font,
        align: Align,
        color: u8,
    ) -> Result<(), BackendError>;

    /// Push buffered content to the panel
    fn flush(&mut self) -> Result<(), BackendError>;

    /// Panel size in pixels (width, height)
    fn size(&self) -> (u16, u16);
}
