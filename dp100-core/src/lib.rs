//! # dp100-core
//!
//! Core protocol implementation for the ALIENTEK ATK-MDP100 power supply.
//!
//! This crate provides the low-level protocol primitives:
//! - Frame encoding/decoding
//! - Checksum calculation
//! - Command definitions
//! - Device configuration and protocol constants
//!
//! Everything here is pure: no I/O, no logging, no shared state.

pub mod checksum;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod frame;

pub use command::Command;
pub use config::DeviceConfig;
pub use error::{DecodeError, EncodeError, Error, Result};
pub use frame::{Frame, Request, decode, encode};
