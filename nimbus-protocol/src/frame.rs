//! Frame encoding and decoding for the companion link.
//!
//! Frame format:
//! - START (1 byte): 0xAA synchronization byte
//! - LENGTH (1 byte): payload length (0-250)
//! - TYPE (1 byte): message type identifier
//! - PAYLOAD (0-250 bytes): postcard-encoded message body
//! - CHECKSUM (1 byte): XOR of LENGTH, TYPE, and all PAYLOAD bytes

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_START: u8 = 0xAA;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD_SIZE: usize = 250;

/// Header (START + LENGTH + TYPE) plus trailing CHECKSUM
const FRAME_OVERHEAD: usize = 4;

/// Maximum complete frame size
pub const MAX_FRAME_SIZE: usize = MAX_PAYLOAD_SIZE + FRAME_OVERHEAD;

/// Errors that can occur while framing or unframing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    InvalidChecksum,
    /// Length byte out of range
    InvalidLength,
    /// Message type not known to the receiver
    UnknownType(u8),
    /// Payload could not be decoded for its message type
    InvalidPayload,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

/// A single frame on the link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type identifier
    pub kind: u8,
    /// Raw payload bytes
    pub payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Frame {
    /// Build a frame from a type and payload
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, FrameError> {
        let payload = Vec::from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
        Ok(Self { kind, payload })
    }

    /// Build a frame that carries only its type
    pub fn bare(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    fn checksum(length: u8, kind: u8, payload: &[u8]) -> u8 {
        payload.iter().fold(length ^ kind, |acc, &b| acc ^ b)
    }

    /// Number of bytes this frame occupies on the wire
    pub fn wire_len(&self) -> usize {
        self.payload.len() + FRAME_OVERHEAD
    }

    /// Write this frame into `out`, returning the number of bytes used
    pub fn encode(&self, out: &mut [u8]) -> Result<usize, FrameError> {
        let total = self.wire_len();
        if out.len() < total {
            return Err(FrameError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        let body_end = 3 + self.payload.len();

        out[0] = FRAME_START;
        out[1] = length;
        out[2] = self.kind;
        out[3..body_end].copy_from_slice(&self.payload);
        out[body_end] = Self::checksum(length, self.kind, &self.payload);

        Ok(total)
    }

    /// Encode into an owned buffer sized for the largest frame
    pub fn to_bytes(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let used = self.encode(&mut buffer)?;
        Vec::from_slice(&buffer[..used]).map_err(|_| FrameError::BufferTooSmall)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Sync,
    Length,
    Kind,
    Payload,
    Checksum,
}

/// Incremental decoder for a byte stream
///
/// Bytes arrive one at a time from the link; the decoder hunts for the
/// START byte, so garbage between frames is skipped.
#[derive(Debug, Clone)]
pub struct FrameDecoder {
    stage: Stage,
    length: u8,
    kind: u8,
    payload: Vec<u8, MAX_PAYLOAD_SIZE>,
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameDecoder {
    pub const fn new() -> Self {
        Self {
            stage: Stage::Sync,
            length: 0,
            kind: 0,
            payload: Vec::new(),
        }
    }

    /// Drop any partial frame and wait for the next START byte
    pub fn reset(&mut self) {
        self.stage = Stage::Sync;
        self.length = 0;
        self.kind = 0;
        self.payload.clear();
    }

    /// Feed one byte
    ///
    /// Returns `Ok(Some(frame))` once a complete frame has been checked,
    /// `Ok(None)` while more bytes are needed. Errors reset the decoder.
    pub fn push(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        match self.stage {
            Stage::Sync => {
                if byte == FRAME_START {
                    self.stage = Stage::Length;
                }
                Ok(None)
            }
            Stage::Length => {
                if byte as usize > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::InvalidLength);
                }
                self.length = byte;
                self.stage = Stage::Kind;
                Ok(None)
            }
            Stage::Kind => {
                self.kind = byte;
                self.payload.clear();
                self.stage = if self.length == 0 {
                    Stage::Checksum
                } else {
                    Stage::Payload
                };
                Ok(None)
            }
            Stage::Payload => {
                // Capacity matches MAX_PAYLOAD_SIZE, which bounds `length`
                let _ = self.payload.push(byte);
                if self.payload.len() == self.length as usize {
                    self.stage = Stage::Checksum;
                }
                Ok(None)
            }
            Stage::Checksum => {
                let expected = Frame::checksum(self.length, self.kind, &self.payload);
                if byte != expected {
                    self.reset();
                    return Err(FrameError::InvalidChecksum);
                }

                let frame = Frame {
                    kind: self.kind,
                    payload: core::mem::take(&mut self.payload),
                };
                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed a chunk, stopping at the first complete frame
    ///
    /// Returns the frame (if any) and how many bytes of `bytes` were consumed,
    /// so the caller can resume with the remainder.
    pub fn push_slice(&mut self, bytes: &[u8]) -> (Result<Option<Frame>, FrameError>, usize) {
        for (i, &byte) in bytes.iter().enumerate() {
            match self.push(byte) {
                Ok(None) => {}
                other => return (other, i + 1),
            }
        }
        (Ok(None), bytes.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn decode_all(bytes: &[u8]) -> Result<Option<Frame>, FrameError> {
        let mut decoder = FrameDecoder::new();
        decoder.push_slice(bytes).0
    }

    #[test]
    fn test_bare_frame_layout() {
        let frame = Frame::bare(0x01);
        let mut out = [0u8; 8];
        let used = frame.encode(&mut out).unwrap();

        assert_eq!(used, 4);
        assert_eq!(&out[..4], &[FRAME_START, 0, 0x01, 0x01]);
    }

    #[test]
    fn test_payload_frame_layout() {
        let frame = Frame::new(0x02, &[0x10, 0x20, 0x30]).unwrap();
        let bytes = frame.to_bytes().unwrap();

        assert_eq!(bytes.len(), 7);
        assert_eq!(bytes[1], 3);
        assert_eq!(bytes[2], 0x02);
        assert_eq!(&bytes[3..6], &[0x10, 0x20, 0x30]);
        assert_eq!(bytes[6], 3 ^ 0x02 ^ 0x10 ^ 0x20 ^ 0x30);
    }

    #[test]
    fn test_encode_into_short_buffer() {
        let frame = Frame::new(0x02, &[1, 2, 3]).unwrap();
        let mut out = [0u8; 5];
        assert_eq!(frame.encode(&mut out), Err(FrameError::BufferTooSmall));
    }

    #[test]
    fn test_oversized_payload_rejected() {
        let big = [0u8; MAX_PAYLOAD_SIZE + 1];
        assert_eq!(Frame::new(0x02, &big), Err(FrameError::PayloadTooLarge));
    }

    #[test]
    fn test_decoder_rejects_bad_checksum() {
        let mut bytes = Frame::new(0x03, &[9, 9]).unwrap().to_bytes().unwrap();
        let last = bytes.len() - 1;
        bytes[last] ^= 0x5A;

        assert_eq!(decode_all(&bytes), Err(FrameError::InvalidChecksum));
    }

    #[test]
    fn test_decoder_rejects_bad_length() {
        assert_eq!(
            decode_all(&[FRAME_START, 0xFF, 0x01]),
            Err(FrameError::InvalidLength)
        );
    }

    #[test]
    fn test_decoder_skips_leading_noise() {
        let frame = Frame::new(0x05, b"HTTP Error").unwrap();
        let encoded = frame.to_bytes().unwrap();

        let mut stream: Vec<u8, 64> = Vec::from_slice(&[0x00, 0x13, 0x37]).unwrap();
        stream.extend_from_slice(&encoded).unwrap();

        assert_eq!(decode_all(&stream), Ok(Some(frame)));
    }

    #[test]
    fn test_decoder_recovers_after_error() {
        let mut decoder = FrameDecoder::new();
        let mut bad = Frame::bare(0x01).to_bytes().unwrap();
        bad[3] ^= 0xFF;
        let good = Frame::bare(0x01).to_bytes().unwrap();

        assert_eq!(decoder.push_slice(&bad).0, Err(FrameError::InvalidChecksum));
        assert_eq!(decoder.push_slice(&good).0, Ok(Some(Frame::bare(0x01))));
    }

    #[test]
    fn test_push_slice_reports_consumed() {
        let first = Frame::bare(0x01).to_bytes().unwrap();
        let second = Frame::bare(0x04).to_bytes().unwrap();
        let mut stream: Vec<u8, 16> = Vec::new();
        stream.extend_from_slice(&first).unwrap();
        stream.extend_from_slice(&second).unwrap();

        let mut decoder = FrameDecoder::new();
        let (frame, used) = decoder.push_slice(&stream);
        assert_eq!(frame, Ok(Some(Frame::bare(0x01))));
        assert_eq!(used, first.len());

        let (frame, _) = decoder.push_slice(&stream[used..]);
        assert_eq!(frame, Ok(Some(Frame::bare(0x04))));
    }

    proptest! {
        #[test]
        fn decoder_accepts_any_encoded_frame(
            kind in any::<u8>(),
            payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD_SIZE),
        ) {
            let frame = Frame::new(kind, &payload).unwrap();
            let bytes = frame.to_bytes().unwrap();
            prop_assert_eq!(decode_all(&bytes), Ok(Some(frame)));
        }
    }
}
