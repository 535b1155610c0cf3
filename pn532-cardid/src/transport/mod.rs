// pn532-cardid/src/transport/mod.rs

#[cfg(feature = "i2c")]
pub mod i2c;
/// In-memory transport for tests.
pub mod mock;
/// The `Transport` trait.
pub mod traits;

#[cfg(feature = "i2c")]
pub use i2c::I2cTransport;
pub use mock::MockTransport;
pub use traits::Transport;
