//! Frame encoding and incremental decoding for the companion link.
//!
//! Frame format:
//! - SYNC (1 byte): 0x7E synchronization byte
//! - LENGTH (1 byte): payload length (0-120)
//! - TYPE (1 byte): message type identifier
//! - PAYLOAD (0-120 bytes): type-specific data
//! - CHECKSUM (1 byte): two's complement of the byte sum of LENGTH, TYPE
//!   and all PAYLOAD bytes, so the sum over the whole frame body is zero

use heapless::Vec;

/// Frame synchronization byte
pub const FRAME_SYNC: u8 = 0x7E;

/// Maximum payload size in bytes
pub const MAX_PAYLOAD: usize = 120;

/// Maximum complete frame size (SYNC + LENGTH + TYPE + MAX_PAYLOAD + CHECKSUM)
pub const MAX_FRAME_SIZE: usize = 1 + 1 + 1 + MAX_PAYLOAD + 1;

/// Errors that can occur during frame decoding or encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Payload exceeds maximum allowed size
    PayloadTooLarge,
    /// Checksum mismatch
    BadChecksum,
    /// LENGTH byte exceeds the maximum payload size
    BadLength,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A decoded or constructed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkFrame {
    /// Message type identifier
    pub kind: u8,
    /// Payload data
    pub payload: Vec<u8, MAX_PAYLOAD>,
}

impl LinkFrame {
    /// Create a new frame with the given type and payload
    pub fn new(kind: u8, payload: &[u8]) -> Result<Self, LinkError> {
        let mut payload_vec = Vec::new();
        payload_vec
            .extend_from_slice(payload)
            .map_err(|_| LinkError::PayloadTooLarge)?;

        Ok(Self {
            kind,
            payload: payload_vec,
        })
    }

    /// Create a frame with no payload
    pub fn empty(kind: u8) -> Self {
        Self {
            kind,
            payload: Vec::new(),
        }
    }

    /// Checksum over the frame body (LENGTH, TYPE, PAYLOAD)
    fn checksum(length: u8, kind: u8, payload: &[u8]) -> u8 {
        let mut sum = length.wrapping_add(kind);
        for &byte in payload {
            sum = sum.wrapping_add(byte);
        }
        sum.wrapping_neg()
    }

    /// Encode this frame into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, LinkError> {
        let frame_len = 4 + self.payload.len();
        if buffer.len() < frame_len {
            return Err(LinkError::BufferTooSmall);
        }

        let length = self.payload.len() as u8;
        let checksum = Self::checksum(length, self.kind, &self.payload);

        buffer[0] = FRAME_SYNC;
        buffer[1] = length;
        buffer[2] = self.kind;
        buffer[3..3 + self.payload.len()].copy_from_slice(&self.payload);
        buffer[3 + self.payload.len()] = checksum;

        Ok(frame_len)
    }

    /// Encode this frame into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_FRAME_SIZE>, LinkError> {
        let mut buffer = [0u8; MAX_FRAME_SIZE];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| LinkError::BufferTooSmall)?;
        Ok(vec)
    }
}

/// Incremental decoder for incoming frames
///
/// Feed bytes as they arrive; garbage between frames is skipped while
/// hunting for the next SYNC byte.
#[derive(Debug, Clone)]
pub struct Decoder {
    state: DecodeState,
    buffer: Vec<u8, MAX_PAYLOAD>,
    want: u8,
    kind: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DecodeState {
    /// Hunting for the SYNC byte
    Sync,
    /// Got SYNC, waiting for LENGTH
    Length,
    /// Got LENGTH, waiting for TYPE
    Kind,
    /// Reading payload bytes
    Payload,
    /// Waiting for CHECKSUM
    Checksum,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self {
            state: DecodeState::Sync,
            buffer: Vec::new(),
            want: 0,
            kind: 0,
        }
    }

    /// Reset the decoder state
    pub fn reset(&mut self) {
        self.state = DecodeState::Sync;
        self.buffer.clear();
        self.want = 0;
        self.kind = 0;
    }

    /// Feed a single byte to the decoder
    ///
    /// Returns `Ok(Some(frame))` when a complete valid frame is decoded,
    /// `Ok(None)` when more bytes are needed, or `Err` on a decode error.
    /// After an error the decoder has already resynchronized.
    pub fn push(&mut self, byte: u8) -> Result<Option<LinkFrame>, LinkError> {
        match self.state {
            DecodeState::Sync => {
                if byte == FRAME_SYNC {
                    self.state = DecodeState::Length;
                }
                // Silently skip non-SYNC bytes
                Ok(None)
            }
            DecodeState::Length => {
                if byte > MAX_PAYLOAD as u8 {
                    self.reset();
                    return Err(LinkError::BadLength);
                }
                self.want = byte;
                self.state = DecodeState::Kind;
                Ok(None)
            }
            DecodeState::Kind => {
                self.kind = byte;
                if self.want == 0 {
                    self.state = DecodeState::Checksum;
                } else {
                    self.buffer.clear();
                    self.state = DecodeState::Payload;
                }
                Ok(None)
            }
            DecodeState::Payload => {
                // Cannot overflow: want is bounded by MAX_PAYLOAD
                let _ = self.buffer.push(byte);
                if self.buffer.len() == self.want as usize {
                    self.state = DecodeState::Checksum;
                }
                Ok(None)
            }
            DecodeState::Checksum => {
                let expected = LinkFrame::checksum(self.want, self.kind, &self.buffer);
                if byte != expected {
                    self.reset();
                    return Err(LinkError::BadChecksum);
                }

                let frame = LinkFrame {
                    kind: self.kind,
                    payload: self.buffer.clone(),
                };

                self.reset();
                Ok(Some(frame))
            }
        }
    }

    /// Feed multiple bytes to the decoder
    ///
    /// Returns the first complete frame found, if any.
    /// Remaining bytes after a complete frame are not consumed.
    pub fn push_slice(&mut self, bytes: &[u8]) -> Result<Option<LinkFrame>, LinkError> {
        for &byte in bytes {
            if let Some(frame) = self.push(byte)? {
                return Ok(Some(frame));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn encode_empty_payload() {
        let frame = LinkFrame::empty(0x02);
        let mut buffer = [0u8; 10];
        let len = frame.encode(&mut buffer).unwrap();

        assert_eq!(len, 4);
        assert_eq!(buffer[0], FRAME_SYNC);
        assert_eq!(buffer[1], 0); // length
        assert_eq!(buffer[2], 0x02); // type
        assert_eq!(buffer[3], 0x02u8.wrapping_neg()); // checksum
    }

    #[test]
    fn frame_body_sums_to_zero() {
        let frame = LinkFrame::new(0x01, &[10, 20, 30]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        let sum: u8 = encoded[1..]
            .iter()
            .fold(0u8, |acc, &b| acc.wrapping_add(b));
        assert_eq!(sum, 0);
    }

    #[test]
    fn decoder_roundtrip() {
        let original = LinkFrame::new(0x01, &[1, 2, 3, 4, 5]).unwrap();
        let encoded = original.encode_to_vec().unwrap();

        let mut decoder = Decoder::new();
        let decoded = decoder.push_slice(&encoded).unwrap().unwrap();

        assert_eq!(decoded.kind, original.kind);
        assert_eq!(decoded.payload, original.payload);
    }

    #[test]
    fn decoder_bad_checksum() {
        let frame = LinkFrame::empty(0x02);
        let mut encoded = frame.encode_to_vec().unwrap();
        let last = encoded.len() - 1;
        encoded[last] ^= 0xFF;

        let mut decoder = Decoder::new();
        let result = decoder.push_slice(&encoded);
        assert_eq!(result, Err(LinkError::BadChecksum));
    }

    #[test]
    fn decoder_resyncs_after_garbage() {
        let frame = LinkFrame::new(0x01, &[42]).unwrap();
        let encoded = frame.encode_to_vec().unwrap();

        let mut data = Vec::<u8, 32>::new();
        data.extend_from_slice(&[0x00, 0xFF, 0x13, 0x37]).unwrap();
        data.extend_from_slice(&encoded).unwrap();

        let mut decoder = Decoder::new();
        let decoded = decoder.push_slice(&data).unwrap().unwrap();

        assert_eq!(decoded.kind, 0x01);
        assert_eq!(&decoded.payload[..], &[42]);
    }

    #[test]
    fn decoder_recovers_after_error() {
        let mut decoder = Decoder::new();

        // A frame with an impossible LENGTH byte
        assert_eq!(decoder.push(FRAME_SYNC), Ok(None));
        assert_eq!(decoder.push(0xFF), Err(LinkError::BadLength));

        // The next well-formed frame still decodes
        let frame = LinkFrame::empty(0x02);
        let encoded = frame.encode_to_vec().unwrap();
        let decoded = decoder.push_slice(&encoded).unwrap().unwrap();
        assert_eq!(decoded.kind, 0x02);
    }

    #[test]
    fn payload_too_large() {
        let large = [0u8; MAX_PAYLOAD + 1];
        let result = LinkFrame::new(0x01, &large);
        assert_eq!(result, Err(LinkError::PayloadTooLarge));
    }

    proptest! {
        #[test]
        fn roundtrip_any_payload(kind in any::<u8>(), payload in proptest::collection::vec(any::<u8>(), 0..=MAX_PAYLOAD)) {
            let original = LinkFrame::new(kind, &payload).unwrap();
            let encoded = original.encode_to_vec().unwrap();

            let mut decoder = Decoder::new();
            let decoded = decoder.push_slice(&encoded).unwrap().unwrap();

            prop_assert_eq!(decoded.kind, original.kind);
            prop_assert_eq!(&decoded.payload[..], &payload[..]);
        }
    }
}
