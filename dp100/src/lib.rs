//! # dp100
//!
//! Rust implementation of the ALIENTEK ATK-MDP100 power supply USB protocol.
//!
//! ## Features
//!
//! - Bit-exact frame codec with Modbus-style CRC16
//! - Typed command registry
//! - Blocking client over hidraw, async client over any tokio stream
//! - Every failure tagged with the exchange phase that produced it
//!
//! ## Quick Start
//!
//! ```no_run
//! use dp100::{Client, Command};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut client = Client::open("/dev/hidraw0")?;
//!
//!     let frame = client.execute(Command::BasicInfo, &[])?;
//!     println!("{} payload={:02X?}", frame, &frame.payload[..]);
//!
//!     Ok(())
//! }
//! ```

pub mod async_client;
pub mod client;
pub mod error;

// Re-exports
pub use async_client::AsyncClient;
pub use client::{Client, execute};
pub use error::{ExchangeError, Result};

// Re-export protocol types
pub use dp100_core::{Command, DeviceConfig, Frame};
pub use dp100_transport::{AsyncTransport, Transport};
