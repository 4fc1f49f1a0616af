//! Blocking request/response executor

use bytes::Bytes;
use tracing::{debug, trace};

use dp100_core::{Command, DeviceConfig, Frame, constants::REPORT_SIZE, frame};
use dp100_transport::{StreamTransport, Transport};

use crate::error::{ExchangeError, Result};

/// Run one exchange on `transport`
///
/// Encodes the request, writes it, reads one report of up to
/// [`REPORT_SIZE`] bytes and decodes it. No retries, no timeout: a read that
/// never returns blocks the caller.
pub fn execute<T: Transport + ?Sized>(
    transport: &mut T,
    address: u8,
    command: Command,
    payload: &[u8],
) -> Result<Frame> {
    let request = frame::encode(address, command, payload)?;

    trace!("Sending {}: {:02X?}", command, &request[..]);

    transport
        .write(&request)
        .map_err(|source| ExchangeError::Write {
            request: request.clone().freeze(),
            source,
        })?;

    let mut buf = [0u8; REPORT_SIZE];
    let n = transport.read(&mut buf).map_err(ExchangeError::Read)?;
    let raw = &buf[..n];

    trace!("Received {} bytes: {:02X?}", n, raw);

    frame::decode(raw).map_err(|source| ExchangeError::Decode {
        response: Bytes::copy_from_slice(raw),
        source,
    })
}

/// DP100 power supply client
///
/// Owns the transport exclusively and talks to one device at the
/// configured address.
///
/// # Examples
///
/// ```no_run
/// use dp100::Client;
///
/// fn main() -> anyhow::Result<()> {
///     let mut client = Client::open("/dev/hidraw0")?;
///
///     let frame = client.basic_info()?;
///     println!("{}", frame);
///
///     Ok(())
/// }
/// ```
pub struct Client<T> {
    transport: T,
    config: DeviceConfig,
}

impl Client<StreamTransport<std::fs::File>> {
    /// Open a hidraw node with the default configuration
    pub fn open(path: impl AsRef<std::path::Path>) -> dp100_transport::Result<Self> {
        Ok(Self::new(StreamTransport::open(path)?))
    }
}

impl<T: Transport> Client<T> {
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
    pub fn execute(&mut self, command: Command, payload: &[u8]) -> Result<Frame> {
        debug!(
            "Executing {} (address={}, payload_len={})",
            command,
            self.config.address,
            payload.len()
        );

        let response = execute(&mut self.transport, self.config.address, command, payload)?;

        debug!("Response: {}", response);

        Ok(response)
    }

    /// Query device information
    pub fn device_info(&mut self) -> Result<Frame> {
        self.execute(Command::DeviceInfo, &[])
    }

    /// Query firmware information
    pub fn firmware_info(&mut self) -> Result<Frame> {
        self.execute(Command::FirmwareInfo, &[])
    }

    /// Query output state
    pub fn basic_info(&mut self) -> Result<Frame> {
        self.execute(Command::BasicInfo, &[])
    }

    /// Query system settings
    pub fn system_info(&mut self) -> Result<Frame> {
        self.execute(Command::SystemInfo, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{Sequence, mock};
    use pretty_assertions::assert_eq;

    use dp100_core::{DecodeError, EncodeError};

    mock! {
        pub Port {}

        impl Transport for Port {
            fn write(&mut self, data: &[u8]) -> dp100_transport::Result<usize>;
            fn read(&mut self, buf: &mut [u8]) -> dp100_transport::Result<usize>;
        }
    }

    fn reply_with(port: &mut MockPort, report: Vec<u8>) {
        port.expect_read().times(1).returning(move |buf| {
            buf[..report.len()].copy_from_slice(&report);
            Ok(report.len())
        });
    }

    #[test]
    fn test_execute_basic_info() {
        let mut port = MockPort::new();
        let mut seq = Sequence::new();

        port.expect_write()
            .withf(|data| *data == [251, 48, 0, 0, 0x0F, 0x31])
            .times(1)
            .in_sequence(&mut seq)
            .returning(|data| Ok(data.len()));

        let response = frame::encode_response(251, 48, &[0x10, 0x20]).unwrap().to_vec();
        let mut report = response.clone();
        report.resize(64, 0);
        port.expect_read()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |buf| {
                buf[..report.len()].copy_from_slice(&report);
                Ok(report.len())
            });

        let mut client = Client::new(port);
        let frame = client.basic_info().unwrap();

        assert_eq!(frame.command(), Some(Command::BasicInfo));
        assert_eq!(&frame.payload[..], &[0x10, 0x20]);
        assert_eq!(frame.sequence, 0);
        assert!(frame.checksum_valid);
    }

    #[test]
    fn test_execute_custom_address() {
        let mut port = MockPort::new();

        port.expect_write()
            .withf(|data| data[0] == 7 && data[1] == 64)
            .times(1)
            .returning(|data| Ok(data.len()));
        reply_with(&mut port, frame::encode_response(7, 64, &[]).unwrap().to_vec());

        let config = DeviceConfig::default().with_address(7);
        let mut client = Client::with_config(port, config);

        assert_eq!(client.config().address, 7);
        assert_eq!(client.system_info().unwrap().address, 7);
    }

    #[test]
    fn test_execute_payload_too_large() {
        let mut port = MockPort::new();
        port.expect_write().never();
        port.expect_read().never();

        let mut client = Client::new(port);
        let result = client.execute(Command::BasicSet, &[0u8; 256]);

        assert!(matches!(
            result,
            Err(ExchangeError::Encode(EncodeError::PayloadTooLarge { size: 256, .. }))
        ));
    }

    #[test]
    fn test_execute_write_failure() {
        let mut port = MockPort::new();
        port.expect_write()
            .times(1)
            .returning(|_| Err(dp100_transport::Error::ConnectionClosed));
        port.expect_read().never();

        let mut client = Client::new(port);

        match client.device_info() {
            Err(ExchangeError::Write { request, source }) => {
                assert_eq!(&request[..], &[251, 16, 0, 0, 0xC5, 0x30]);
                assert!(matches!(source, dp100_transport::Error::ConnectionClosed));
            }
            other => panic!("Expected write error, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_read_failure() {
        let mut port = MockPort::new();
        port.expect_write().returning(|data| Ok(data.len()));
        port.expect_read()
            .times(1)
            .returning(|_| Err(dp100_transport::Error::ReadTimeout));

        let mut client = Client::new(port);
        let result = client.firmware_info();

        assert!(matches!(
            result,
            Err(ExchangeError::Read(dp100_transport::Error::ReadTimeout))
        ));
    }

    #[test]
    fn test_execute_short_response() {
        let mut port = MockPort::new();
        port.expect_write().returning(|data| Ok(data.len()));
        reply_with(&mut port, vec![251, 48, 0]);

        let mut client = Client::new(port);

        match client.basic_info() {
            Err(ExchangeError::Decode { response, source }) => {
                assert_eq!(&response[..], &[251, 48, 0]);
                assert_eq!(
                    source,
                    DecodeError::TooShort {
                        expected: 6,
                        actual: 3
                    }
                );
            }
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_checksum_mismatch() {
        let mut port = MockPort::new();
        port.expect_write().returning(|data| Ok(data.len()));
        reply_with(&mut port, vec![251, 48, 0, 0, 0x0F, 0x31]);

        let mut client = Client::new(port);
        let result = client.basic_info();

        assert!(matches!(
            result,
            Err(ExchangeError::Decode {
                source: DecodeError::ChecksumMismatch {
                    computed: 0x310F,
                    received: 0x0F31
                },
                ..
            })
        ));
    }

    #[test]
    fn test_execute_on_boxed_transport() {
        let mut port = MockPort::new();
        port.expect_write().returning(|data| Ok(data.len()));
        reply_with(&mut port, frame::encode_response(251, 16, &[1]).unwrap().to_vec());

        let mut transport: Box<dyn Transport> = Box::new(port);
        let frame = execute(&mut transport, 251, Command::DeviceInfo, &[]).unwrap();

        assert_eq!(frame.command(), Some(Command::DeviceInfo));
    }
}
