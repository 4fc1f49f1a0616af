//! Transport layer for the DP100 protocol
//!
//! The protocol rides on fixed-size HID reports. This crate only moves
//! bytes: framing and checksums belong to `dp100-core`.

pub mod error;
pub mod stream;
pub mod tokio_stream;

pub use error::{Error, Result};
pub use stream::StreamTransport;
pub use tokio_stream::AsyncStreamTransport;

use async_trait::async_trait;

/// Blocking report channel to a device
///
/// One `write` sends one report, one `read` fills `buf` with the next
/// report and returns how many bytes arrived. Both block until done.
pub trait Transport {
    /// Send raw bytes
    fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Receive raw bytes into `buf`
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        (**self).write(data)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }
}

/// Async report channel to a device
#[async_trait]
pub trait AsyncTransport: Send {
    /// Send raw bytes
    async fn write(&mut self, data: &[u8]) -> Result<usize>;

    /// Receive raw bytes into `buf`
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize>;
}
