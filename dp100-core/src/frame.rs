//! DP100 frame structure and encoding/decoding

use bytes::{BufMut, Bytes, BytesMut};
use std::fmt;

use crate::{
    checksum,
    command::Command,
    constants::{CHECKSUM_SIZE, HEADER_SIZE, MAX_PAYLOAD_SIZE, MIN_FRAME_SIZE, REQUEST_SEQUENCE},
    error::{DecodeError, EncodeError},
};

/// Encode a request frame
///
/// # Frame Structure
///
/// ```text
/// ┌─────────┬─────────┬──────────┬─────────┬───────────┬─────────┬─────────┐
/// │ Address │ Command │ Sequence │ Length  │  Payload  │ CRC lo  │ CRC hi  │
/// │ 1 byte  │ 1 byte  │ (0)      │ N       │  N bytes  │ 1 byte  │ 1 byte  │
/// └─────────┴─────────┴──────────┴─────────┴───────────┴─────────┴─────────┘
/// ```
///
/// The checksum covers header and payload and is appended with
/// [`checksum::request_trailer`].
///
/// # Errors
///
/// [`EncodeError::PayloadTooLarge`] if the payload is longer than 255 bytes.
///
/// # Examples
///
/// ```
/// use dp100_core::{frame, Command};
///
/// let bytes = frame::encode(251, Command::BasicInfo, &[]).unwrap();
/// assert_eq!(&bytes[..], &[251, 48, 0, 0, 0x0F, 0x31]);
/// ```
pub fn encode(
    address: u8,
    command: Command,
    payload: &[u8],
) -> std::result::Result<BytesMut, EncodeError> {
    let length = payload_length(payload)?;

    let mut buf = BytesMut::with_capacity(MIN_FRAME_SIZE + payload.len());
    buf.put_u8(address);
    buf.put_u8(command.into());
    buf.put_u8(REQUEST_SEQUENCE);
    buf.put_u8(length);
    buf.put_slice(payload);

    let crc = checksum::calculate(&buf);
    buf.put_slice(&checksum::request_trailer(crc));

    Ok(buf)
}

/// Encode a frame in the layout a device replies with
///
/// Identical to [`encode`] except for the trailer, which is written so that
/// [`decode`] reads it back (first byte high). Used to simulate a device.
///
/// # Examples
///
/// ```
/// use dp100_core::frame;
///
/// let bytes = frame::encode_response(251, 48, &[1, 2, 3]).unwrap();
/// let decoded = frame::decode(&bytes).unwrap();
/// assert_eq!(&decoded.payload[..], &[1, 2, 3]);
/// ```
pub fn encode_response(
    address: u8,
    function_type: u8,
    payload: &[u8],
) -> std::result::Result<BytesMut, EncodeError> {
    let length = payload_length(payload)?;

    let mut buf = BytesMut::with_capacity(MIN_FRAME_SIZE + payload.len());
    buf.put_u8(address);
    buf.put_u8(function_type);
    buf.put_u8(REQUEST_SEQUENCE);
    buf.put_u8(length);
    buf.put_slice(payload);

    let crc = checksum::calculate(&buf);
    buf.put_slice(&checksum::response_trailer(crc));

    Ok(buf)
}

/// Decode and validate a response frame
///
/// Bytes past the logical frame (`6 + length`) are ignored, since reports
/// handed over by the transport are usually larger than the frame.
///
/// # Errors
///
/// - [`DecodeError::TooShort`] if the buffer cannot hold the header, or
///   holds less than the length byte announces
/// - [`DecodeError::ChecksumMismatch`] if the trailer does not match
pub fn decode(raw: &[u8]) -> std::result::Result<Frame, DecodeError> {
    if raw.len() < MIN_FRAME_SIZE {
        return Err(DecodeError::TooShort {
            expected: MIN_FRAME_SIZE,
            actual: raw.len(),
        });
    }

    let address = raw[0];
    let function_type = raw[1];
    let sequence = raw[2];
    let length = raw[3];

    let expected_size = MIN_FRAME_SIZE + usize::from(length);
    if raw.len() < expected_size {
        return Err(DecodeError::TooShort {
            expected: expected_size,
            actual: raw.len(),
        });
    }

    let frame = &raw[..expected_size];
    let body_end = expected_size - CHECKSUM_SIZE;

    let computed = checksum::calculate(&frame[..body_end]);
    let received = checksum::response_value([frame[body_end], frame[body_end + 1]]);
    if computed != received {
        return Err(DecodeError::ChecksumMismatch { computed, received });
    }

    Ok(Frame {
        address,
        function_type,
        sequence,
        length,
        payload: Bytes::copy_from_slice(&frame[HEADER_SIZE..body_end]),
        checksum_valid: true,
    })
}

fn payload_length(payload: &[u8]) -> std::result::Result<u8, EncodeError> {
    u8::try_from(payload.len()).map_err(|_| EncodeError::PayloadTooLarge {
        size: payload.len(),
        max: MAX_PAYLOAD_SIZE,
    })
}

/// Outbound request
///
/// Address, command and payload of one request. The sequence byte is always
/// zero and the length and checksum are derived when encoding.
#[derive(Clone, PartialEq, Eq)]
pub struct Request {
    /// Target device address
    pub address: u8,

    /// Command code
    pub command: Command,

    /// Command-specific payload
    pub payload: Bytes,
}

impl Request {
    /// Create a request with empty payload
    pub fn new(address: u8, command: Command) -> Self {
        Self {
            address,
            command,
            payload: Bytes::new(),
        }
    }

    /// Create a request with payload
    pub fn with_payload(address: u8, command: Command, payload: impl Into<Bytes>) -> Self {
        Self {
            address,
            command,
            payload: payload.into(),
        }
    }

    /// Encode request to bytes
    pub fn encode(&self) -> std::result::Result<BytesMut, EncodeError> {
        encode(self.address, self.command, &self.payload)
    }

    /// Get total encoded size
    pub fn size(&self) -> usize {
        MIN_FRAME_SIZE + self.payload.len()
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("address", &self.address)
            .field("command", &self.command)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Request[{}](address={}, len={})",
            self.command,
            self.address,
            self.payload.len()
        )
    }
}

/// Validated response frame
#[derive(Clone, PartialEq, Eq)]
pub struct Frame {
    /// Address of the replying device
    pub address: u8,

    /// Function/response type byte
    pub function_type: u8,

    /// Sequence byte
    pub sequence: u8,

    /// Declared payload length
    pub length: u8,

    /// Payload, exactly `length` bytes
    pub payload: Bytes,

    /// Always true for frames returned by [`decode`]
    pub checksum_valid: bool,
}

impl Frame {
    /// Map the function byte back to a known command
    pub fn command(&self) -> Option<Command> {
        Command::try_from(self.function_type).ok()
    }

    /// Get total frame size on the wire
    pub fn size(&self) -> usize {
        MIN_FRAME_SIZE + usize::from(self.length)
    }
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("address", &self.address)
            .field("function_type", &self.function_type)
            .field("sequence", &self.sequence)
            .field("length", &self.length)
            .field("payload", &format!("{:02X?}", &self.payload[..]))
            .field("checksum_valid", &self.checksum_valid)
            .finish()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.command() {
            Some(command) => write!(f, "Frame[{}]", command)?,
            None => write!(f, "Frame[UNKNOWN({})]", self.function_type)?,
        }
        write!(
            f,
            "(address={}, seq={}, len={})",
            self.address, self.sequence, self.length
        )
    }
}
