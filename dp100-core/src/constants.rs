//! Protocol constants

/// Default protocol address of the power supply on the bus
pub const DEFAULT_ADDRESS: u8 = 251;

/// USB vendor ID (ALIENTEK)
pub const DEFAULT_VENDOR_ID: u16 = 0x2E3C;

/// USB product ID (ATK-MDP100)
pub const DEFAULT_PRODUCT_ID: u16 = 0xAF01;

/// Expected manufacturer descriptor string
pub const DEFAULT_MANUFACTURER: &str = "ALIENTEK";

/// Expected product descriptor string
pub const DEFAULT_PRODUCT: &str = "ATK-MDP100";

/// Header size: address, command, sequence, length
pub const HEADER_SIZE: usize = 4;

/// Checksum trailer size
pub const CHECKSUM_SIZE: usize = 2;

/// Smallest frame that can be valid (header + trailer, empty payload)
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + CHECKSUM_SIZE;

/// Payload length has to fit in the length byte
pub const MAX_PAYLOAD_SIZE: usize = u8::MAX as usize;

/// Largest report the device class hands back in one read
pub const REPORT_SIZE: usize = 512;

/// Sequence byte sent in every request. Multi-frame sequencing is not used.
pub const REQUEST_SEQUENCE: u8 = 0;
