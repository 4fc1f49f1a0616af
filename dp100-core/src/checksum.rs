//! DP100 checksum algorithm
//!
//! The device uses the Modbus CRC16 (init `0xFFFF`, reflected polynomial
//! `0xA001`), but every caller works with the byte-swapped accumulator:
//!
//! ```text
//! raw     = Yh Yl
//! swapped = Yl Yh
//! ```
//!
//! Requests append the swapped value low byte first, responses are read back
//! with the first trailer byte as the high byte. The two conventions are kept
//! as separate helpers because the firmware expects exactly these orders.

use byteorder::{BigEndian, ByteOrder, LittleEndian};

/// Initial CRC accumulator
pub const INITIAL: u16 = 0xFFFF;

/// Reflected Modbus polynomial
pub const POLYNOMIAL: u16 = 0xA001;

/// Raw Modbus CRC16 accumulator, before the byte swap
///
/// # Examples
///
/// ```
/// use dp100_core::checksum;
///
/// assert_eq!(checksum::modbus_crc16(b"123456789"), 0x4B37);
/// ```
pub fn modbus_crc16(data: &[u8]) -> u16 {
    let mut crc = INITIAL;

    for &byte in data {
        crc ^= u16::from(byte);
        for _ in 0..8 {
            if crc & 0x0001 != 0 {
                crc = (crc >> 1) ^ POLYNOMIAL;
            } else {
                crc >>= 1;
            }
        }
    }

    crc
}

/// Calculate DP100 frame checksum
///
/// # Algorithm
///
/// ```text
/// 1. crc = 0xFFFF
/// 2. For each byte: crc ^= byte, then 8 times shift right (xor 0xA001 if the low bit was set)
/// 3. Return crc with its two bytes swapped
/// ```
///
/// # Examples
///
/// ```
/// use dp100_core::checksum;
///
/// // BasicInfo request header for the default address
/// assert_eq!(checksum::calculate(&[251, 48, 0, 0]), 0x310F);
/// ```
pub fn calculate(data: &[u8]) -> u16 {
    modbus_crc16(data).swap_bytes()
}

/// Verify checksum
pub fn verify(data: &[u8], expected: u16) -> bool {
    calculate(data) == expected
}

/// Trailer bytes appended to an outbound request: low byte first
pub fn request_trailer(checksum: u16) -> [u8; 2] {
    let mut trailer = [0u8; 2];
    LittleEndian::write_u16(&mut trailer, checksum);
    trailer
}

/// Checksum value carried by an inbound trailer: first byte is the high byte
pub fn response_value(trailer: [u8; 2]) -> u16 {
    BigEndian::read_u16(&trailer)
}

/// Trailer bytes a device puts after a response so that
/// [`response_value`] reads back `checksum`
pub fn response_trailer(checksum: u16) -> [u8; 2] {
    let mut trailer = [0u8; 2];
    BigEndian::write_u16(&mut trailer, checksum);
    trailer
}
