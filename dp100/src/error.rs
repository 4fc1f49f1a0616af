//! Exchange error types

use bytes::Bytes;

use dp100_core::{DecodeError, EncodeError};

pub type Result<T> = std::result::Result<T, ExchangeError>;

/// Failure of one request/response exchange, tagged with the failing phase
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    #[error("Building request: {0}")]
    Encode(#[from] EncodeError),

    #[error("Sending request {}: {source}", hex::encode(.request))]
    Write {
        request: Bytes,
        #[source]
        source: dp100_transport::Error,
    },

    #[error("Reading from device: {0}")]
    Read(#[source] dp100_transport::Error),

    #[error("Decoding response {}: {source}", hex::encode(.response))]
    Decode {
        response: Bytes,
        #[source]
        source: DecodeError,
    },
}

impl ExchangeError {
    /// Check if the failure happened on the transport
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Write { .. } | Self::Read(_))
    }
}
