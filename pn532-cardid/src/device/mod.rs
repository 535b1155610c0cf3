// pn532-cardid/src/device/mod.rs

/// `Pn532Builder`
pub mod builder;
pub mod config;
/// The `Pn532` driver and its wakeup handshake.
pub mod handle;
/// `LinkState`
pub mod link;
mod query;

pub use builder::Pn532Builder;
pub use config::DeviceConfig;
pub use handle::Pn532;
pub use link::LinkState;
