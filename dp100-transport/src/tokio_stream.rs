//! Async transport over a tokio byte stream

use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::time::timeout;
use tracing::{trace, warn};

use crate::{AsyncTransport, error::*};

/// Async transport wrapping an `AsyncRead + AsyncWrite` handle
///
/// Reads wait forever unless a read timeout is set.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use dp100_transport::AsyncStreamTransport;
///
/// let (client, _device) = tokio::io::duplex(512);
/// let transport = AsyncStreamTransport::new(client)
///     .with_read_timeout(Duration::from_secs(1));
/// ```
pub struct AsyncStreamTransport<T> {
    inner: T,
    read_timeout: Option<Duration>,
}

impl<T> AsyncStreamTransport<T>
where
    T: AsyncRead + AsyncWrite + Unpin + Send,
{
    /// Create new async transport
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            read_timeout: None,
        }
    }

    /// Set read timeout
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Unwrap the underlying handle
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[async_trait]
impl<T> AsyncTransport for AsyncStreamTransport<T>
where
    T: AsyncRead + AsyncWrite + Unpin + Send,
{
    async fn write(&mut self, data: &[u8]) -> Result<usize> {
        trace!("Sending {} bytes: {:02X?}", data.len(), &data[..data.len().min(32)]);

        self.inner.write_all(data).await?;
        self.inner.flush().await?;

        Ok(data.len())
    }

    async fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = match self.read_timeout {
            Some(limit) => timeout(limit, self.inner.read(buf)).await.map_err(|_| {
                warn!("Read timeout after {:?}", limit);
                Error::ReadTimeout
            })??,
            None => self.inner.read(buf).await?,
        };

        if n == 0 && !buf.is_empty() {
            warn!("Received 0 bytes");
            return Err(Error::ConnectionClosed);
        }

        trace!("Received {} bytes: {:02X?}", n, &buf[..n.min(32)]);

        Ok(n)
    }
}
