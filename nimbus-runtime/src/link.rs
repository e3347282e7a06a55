//! Companion link
//!
//! [`ChannelLink`] is the face's side: requests are queued on
//! [`OUTBOUND`] and never block. [`link_rx`] and [`link_tx`] are the wire
//! side, run from board tasks over any async byte stream.

use embedded_io_async::{Read, Write};

use nimbus_core::traits::{LinkError, WeatherLink};
use nimbus_protocol::{CompanionMessage, FrameDecoder, WatchMessage, WeatherRequest};

use crate::channels::{INBOUND, OUTBOUND};

/// Buffer size for link reads
const RX_BUF_SIZE: usize = 64;

/// [`WeatherLink`] that hands requests to the TX task
#[derive(Debug, Default)]
pub struct ChannelLink {
    open: bool,
}

impl ChannelLink {
    pub const fn new() -> Self {
        Self { open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

impl WeatherLink for ChannelLink {
    fn open(&mut self) -> Result<(), LinkError> {
        // Drop anything left over from a previous session, in both directions
        while OUTBOUND.try_receive().is_ok() {}
        while INBOUND.try_receive().is_ok() {}
        self.open = true;
        Ok(())
    }

    fn request_weather(&mut self, request: &WeatherRequest) -> Result<(), LinkError> {
        if !self.open {
            return Err(LinkError::NotOpen);
        }
        OUTBOUND
            .try_send(WatchMessage::RequestWeather(request.clone()))
            .map_err(|_| LinkError::Busy)
    }

    fn close(&mut self) {
        self.open = false;
    }
}

/// Link receive loop - decodes frames and forwards companion messages
pub async fn link_rx<R: Read>(mut rx: R) -> ! {
    defmt::info!("link RX task started");

    let mut decoder = FrameDecoder::new();
    let mut buf = [0u8; RX_BUF_SIZE];

    loop {
        match rx.read(&mut buf).await {
            Ok(n) if n > 0 => {
                defmt::trace!("RX: {} bytes", n);

                for &byte in &buf[..n] {
                    match decoder.push(byte) {
                        Ok(Some(frame)) => match CompanionMessage::from_frame(&frame) {
                            Ok(message) => forward(message),
                            Err(e) => defmt::warn!("bad companion message: {}", e),
                        },
                        Ok(None) => {}
                        Err(e) => defmt::warn!("frame error: {}", e),
                    }
                }
            }
            Ok(_) => {}
            Err(e) => defmt::warn!("link read error: {}", defmt::Debug2Format(&e)),
        }
    }
}

fn forward(message: CompanionMessage) {
    defmt::debug!("companion message: {}", message.name());
    if INBOUND.try_send(message).is_err() {
        defmt::warn!("inbound channel full, dropping message");
    }
}

/// Link transmit loop - frames and writes queued watch messages
pub async fn link_tx<W: Write>(mut tx: W) -> ! {
    defmt::info!("link TX task started");

    loop {
        let message = OUTBOUND.receive().await;

        let bytes = match message.to_frame().and_then(|frame| frame.to_bytes()) {
            Ok(bytes) => bytes,
            Err(e) => {
                defmt::warn!("failed to encode {}: {}", message, e);
                continue;
            }
        };

        if let Err(e) = tx.write_all(&bytes).await {
            defmt::warn!("link write error: {}", defmt::Debug2Format(&e));
            continue;
        }
        if let Err(e) = tx.flush().await {
            defmt::warn!("link flush error: {}", defmt::Debug2Format(&e));
        }
    }
}
