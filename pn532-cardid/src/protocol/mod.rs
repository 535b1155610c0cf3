// pn532-cardid/src/protocol/mod.rs

/// Acknowledgement frame matching.
pub mod ack;
/// LCS / DCS and response checksum verification.
pub mod checksum;
/// Commands the driver issues.
pub mod commands;
/// Normal information frame encoding.
pub mod frame;
/// Bounds-checked reads from inbound buffers.
pub mod parser;
/// One round trip's ack and response buffers.
pub mod response;

pub use ack::{matches_ack_prefix, matches_ack_template};
pub use checksum::{dcs, lcs, verify_checksum};
pub use commands::Command;
pub use frame::Frame;
pub use response::Exchange;
