//! Companion link

use nimbus_protocol::WeatherRequest;

/// Errors from the companion link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The link has not been opened
    NotOpen,
    /// Outbound queue is full
    Busy,
    /// Phone is not connected
    Disconnected,
    /// Request could not be encoded
    Encoding,
}

/// Outbound side of the companion link
///
/// Inbound messages reach the face through the event loop, already
/// decoded into [`nimbus_protocol::CompanionMessage`].
pub trait WeatherLink {
    /// Open the link so messages can flow in both directions
    fn open(&mut self) -> Result<(), LinkError>;

    /// Send a weather request
    ///
    /// Must not block. A failure is reported but never retried here.
    fn request_weather(&mut self, request: &WeatherRequest) -> Result<(), LinkError>;

    /// Close the link
    fn close(&mut self);
}
