//! Device configuration
//!
//! Everything that identifies the target power supply. Set once when a
//! client is built and never changed afterwards.

use crate::constants::{
    DEFAULT_ADDRESS, DEFAULT_MANUFACTURER, DEFAULT_PRODUCT, DEFAULT_PRODUCT_ID, DEFAULT_VENDOR_ID,
};
use crate::error::{Error, Result};

/// Identification of a DP100 device
///
/// # Examples
///
/// ```
/// use dp100_core::DeviceConfig;
///
/// let config = DeviceConfig::default().with_address(1);
/// assert_eq!(config.address, 1);
/// assert_eq!(config.product, "ATK-MDP100");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    /// Protocol address written into every request
    pub address: u8,

    /// USB vendor ID
    pub vendor_id: u16,

    /// USB product ID
    pub product_id: u16,

    /// Expected manufacturer string
    pub manufacturer: String,

    /// Expected product string
    pub product: String,
}

impl DeviceConfig {
    /// Set protocol address
    pub fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set USB vendor ID
    pub fn with_vendor_id(mut self, vendor_id: u16) -> Self {
        self.vendor_id = vendor_id;
        self
    }

    /// Set USB product ID
    pub fn with_product_id(mut self, product_id: u16) -> Self {
        self.product_id = product_id;
        self
    }

    /// Set expected manufacturer string
    pub fn with_manufacturer(mut self, manufacturer: impl Into<String>) -> Self {
        self.manufacturer = manufacturer.into();
        self
    }

    /// Set expected product string
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = product.into();
        self
    }

    /// Check descriptor strings read from an opened device
    ///
    /// # Errors
    ///
    /// [`Error::IdentityMismatch`] naming the first string that differs.
    pub fn verify_identity(&self, manufacturer: &str, product: &str) -> Result<()> {
        if manufacturer != self.manufacturer {
            return Err(Error::IdentityMismatch {
                field: "manufacturer",
                expected: self.manufacturer.clone(),
                actual: manufacturer.to_string(),
            });
        }

        if product != self.product {
            return Err(Error::IdentityMismatch {
                field: "product",
                expected: self.product.clone(),
                actual: product.to_string(),
            });
        }

        Ok(())
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            vendor_id: DEFAULT_VENDOR_ID,
            product_id: DEFAULT_PRODUCT_ID,
            manufacturer: DEFAULT_MANUFACTURER.to_string(),
            product: DEFAULT_PRODUCT.to_string(),
        }
    }
}
