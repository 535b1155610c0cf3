//! Small helpers shared across the crate: hex rendering for trace logs and
//! timeout conversion for transports.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
