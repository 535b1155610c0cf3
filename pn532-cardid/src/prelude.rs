// pn532-cardid/src/prelude.rs

pub use crate::device::{DeviceConfig, LinkState, Pn532, Pn532Builder};
pub use crate::protocol::Command;
pub use crate::transport::Transport;
pub use crate::{CardStatus, Error, Result, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, poll_until};
