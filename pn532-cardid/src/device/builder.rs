// pn532-cardid/src/device/builder.rs

use crate::device::config::DeviceConfig;
use crate::device::handle::Pn532;
use crate::transport::Transport;

/// Helper to construct a `Pn532` with optional configuration overrides.
pub struct Pn532Builder<T: Transport> {
    transport: T,
    config: DeviceConfig,
}

impl<T: Transport> Pn532Builder<T> {
    /// Start from the default configuration.
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: DeviceConfig::default(),
        }
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: DeviceConfig) -> Self {
        self.config = config;
        self
    }

    /// 7-bit bus address of the chip.
    pub fn with_address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    /// Delay around each bus operation of an exchange.
    pub fn with_settle_delay_ms(mut self, ms: u64) -> Self {
        self.config.settle_delay_ms = ms;
        self
    }

    /// Deadline passed to every `Transport::read`.
    pub fn with_read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Consume the builder. The driver starts `NotReady`.
    pub fn build(self) -> Pn532<T> {
        Pn532::with_config(self.transport, self.config)
    }
}
