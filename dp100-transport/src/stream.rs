//! Blocking transport over any byte stream
//!
//! On Linux a DP100 shows up as `/dev/hidrawN`. Reading and writing that
//! node moves whole HID reports, so a plain file is enough.

use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, trace};

use crate::{Transport, error::*};

/// Blocking transport wrapping a `Read + Write` handle
pub struct StreamTransport<T> {
    inner: T,
}

impl<T: Read + Write> StreamTransport<T> {
    /// Wrap an already opened handle
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Get a reference to the underlying handle
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Unwrap the underlying handle
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl StreamTransport<File> {
    /// Open a hidraw node read/write
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        debug!("Opening {}...", path.display());

        let file = OpenOptions::new().read(true).write(true).open(path)?;

        debug!("Opened {}", path.display());

        Ok(Self::new(file))
    }
}

impl<T: Read + Write> Transport for StreamTransport<T> {
    fn write(&mut self, data: &[u8]) -> Result<usize> {
        trace!("Sending {} bytes: {:02X?}", data.len(), &data[..data.len().min(32)]);

        let written = self.inner.write(data)?;
        self.inner.flush()?;

        if written != data.len() {
            return Err(Error::ShortWrite {
                written,
                expected: data.len(),
            });
        }

        Ok(written)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self.inner.read(buf)?;

        if n == 0 && !buf.is_empty() {
            return Err(Error::ConnectionClosed);
        }

        trace!("Received {} bytes: {:02X?}", n, &buf[..n.min(32)]);

        Ok(n)
    }
}
