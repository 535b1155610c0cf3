// pn532-cardid/src/device/config.rs

//! Driver configuration

use crate::constants::{PN532_I2C_ADDRESS, SETTLE_DELAY_MS};
use crate::utils::DEFAULT_READ_TIMEOUT_MS;

/// Bus address and timing used by a `Pn532` instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeviceConfig {
    /// 7-bit I2C address
    pub address: u8,
    /// Delay before the wakeup frame and around every read (ms)
    pub settle_delay_ms: u64,
    /// Per-read timeout handed to the transport (ms)
    pub read_timeout_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            address: PN532_I2C_ADDRESS,
            settle_delay_ms: SETTLE_DELAY_MS,
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        }
    }
}
