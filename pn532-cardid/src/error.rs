// pn532-cardid/src/error.rs

use thiserror::Error;

/// 共通エラー型
///
/// Only faults surface here. A missing card, a rejected acknowledgement or a
/// bad checksum are ordinary negative results and never become an `Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// Linux I2C bus failure
    #[cfg(feature = "i2c")]
    #[error("i2c error: {0}")]
    I2c(#[from] i2cdev::linux::LinuxI2CError),

    /// Transport-specific failure
    #[error("transport error: {0}")]
    Transport(String),

    /// Nothing arrived before the read deadline
    #[error("operation timed out")]
    Timeout,

    /// Buffer or payload of the wrong size
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length
        expected: usize,
        /// Length received
        actual: usize,
    },

    /// Caller supplied a UID value outside 0..=255
    #[error("byte {index} out of range: {value}")]
    ByteOutOfRange {
        /// Position in the UID
        index: usize,
        /// Offending value
        value: i64,
    },
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, Error>;
