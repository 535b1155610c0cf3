// pn532-cardid/src/lib.rs

//! pn532-cardid
//!
//! Pure Rust driver for PN532 NFC readers: wakes the chip with a
//! SAMConfiguration handshake, then answers "is a card there, and what is
//! its 4 byte UID" over any blocking byte transport.
#![warn(missing_docs)]

pub mod constants;
/// Driver handle, link state and the public card operations.
pub mod device;
/// Error type and `Result` alias.
pub mod error;
/// Everything a typical caller needs in one import.
pub mod prelude;
/// Frame codec: checksums, frames, commands and response validation.
pub mod protocol;
pub mod test_support;
/// Byte transports: the trait, a recording mock and Linux I2C.
pub mod transport;
/// `Uid` and `CardStatus`.
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
