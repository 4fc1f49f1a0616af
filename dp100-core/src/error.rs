//! Error types for dp100-core

/// Result type alias for dp100 operations
pub type Result<T> = std::result::Result<T, Error>;

/// Request encoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// Payload length does not fit in the length byte
    #[error("Payload too large: {size} bytes (max: {max} bytes)")]
    PayloadTooLarge { size: usize, max: usize },
}

/// Response decoding errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Buffer is shorter than the header or the declared frame
    #[error("Frame too short: expected at least {expected} bytes, got {actual} bytes")]
    TooShort { expected: usize, actual: usize },

    /// Checksum verification failed
    #[error("Checksum mismatch: computed 0x{computed:04X}, received 0x{received:04X}")]
    ChecksumMismatch { computed: u16, received: u16 },
}

/// Core protocol errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Unknown command code
    #[error("Unknown command code: {0}")]
    UnknownCommand(u8),

    /// Device reported descriptor strings other than the configured ones
    #[error("Unexpected {field} string: expected '{expected}', got '{actual}'")]
    IdentityMismatch {
        field: &'static str,
        expected: String,
        actual: String,
    },
}
