//! Async request/response executor
//!
//! Same codec, same single round trip per call, over an [`AsyncTransport`].
//! Timeouts, when wanted, are configured on the transport.

use bytes::Bytes;
use tracing::{debug, trace};

use dp100_core::{Command, DeviceConfig, Frame, constants::REPORT_SIZE, frame};
use dp100_transport::AsyncTransport;

use crate::error::{ExchangeError, Result};

/// Run one exchange on an async `transport`
pub async fn execute<T: AsyncTransport + ?Sized>(
    transport: &mut T,
    address: u8,
    command: Command,
    payload: &[u8],
) -> Result<Frame> {
    let request = frame::encode(address, command, payload)?;

    trace!("Sending {}: {:02X?}", command, &request[..]);

    transport
        .write(&request)
        .await
        .map_err(|source| ExchangeError::Write {
            request: request.clone().freeze(),
            source,
        })?;

    let mut buf = vec![0u8; REPORT_SIZE];
    let n = transport.read(&mut buf).await.map_err(ExchangeError::Read)?;
    let raw = &buf[..n];

    trace!("Received {} bytes: {:02X?}", n, raw);

    frame::decode(raw).map_err(|source| ExchangeError::Decode {
        response: Bytes::copy_from_slice(raw),
        source,
    })
}

/// Async DP100 client
pub struct AsyncClient<T> {
    transport: T,
    config: DeviceConfig,
}

impl<T: AsyncTransport> AsyncClient<T> {
    /// Create a client with the default configuration
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Create a client with a custom configuration
    pub fn with_config(transport: T, config: DeviceConfig) -> Self {
        Self { transport, config }
    }

    /// Get configuration
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Release the transport
    pub fn into_inner(self) -> T {
        self.transport
    }

    /// Send `command` with `payload` and return the validated response
    pub async fn execute(&mut self, command: Command, payload: &[u8]) -> Result<Frame> {
        debug!(
            "Executing {} (address={}, payload_len={})",
            command,
            self.config.address,
            payload.len()
        );

        let response =
            execute(&mut self.transport, self.config.address, command, payload).await?;

        debug!("Response: {}", response);

        Ok(response)
    }

    /// Query output state
    pub async fn basic_info(&mut self) -> Result<Frame> {
        self.execute(Command::BasicInfo, &[]).await
    }

    /// Query system settings
    pub async fn system_info(&mut self) -> Result<Frame> {
        self.execute(Command::SystemInfo, &[]).await
    }
}
