// pn532-cardid/src/device/handle.rs

use log::{debug, trace, warn};

use crate::constants::ACK_READ_LEN;
use crate::device::config::DeviceConfig;
use crate::device::link::LinkState;
use crate::protocol::{Command, Exchange};
use crate::transport::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// PN532 driver over a byte transport.
///
/// Every call runs to completion on the calling thread: bus writes, bus
/// reads and the settling delays all block. The driver is `&mut self`
/// throughout, so sharing one between threads takes an outer lock.
pub struct Pn532<T: Transport> {
    transport: T,
    config: DeviceConfig,
    link: LinkState,
    wakeup_attempts: usize,
}

impl<T: Transport> Pn532<T> {
    /// Create a driver with the default address and timings. The link
    /// starts `NotReady`; the first public operation performs the wakeup.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, DeviceConfig::default())
    }

    /// Create a driver with an explicit configuration.
    pub fn with_config(transport: T, config: DeviceConfig) -> Self {
        Self {
            transport,
            config,
            link: LinkState::NotReady,
            wakeup_attempts: 0,
        }
    }

    /// Current link state.
    pub fn link_state(&self) -> LinkState {
        self.link
    }

    /// Number of wakeup handshakes run by this instance.
    pub fn wakeup_attempts(&self) -> usize {
        self.wakeup_attempts
    }

    /// Active configuration.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the transport mutably.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back.
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Run the wakeup handshake unless the link is already `Ready`.
    pub fn ensure_ready(&mut self) -> Result<LinkState> {
        if self.link.is_ready() {
            return Ok(self.link);
        }
        self.wakeup()
    }

    /// SAMConfiguration handshake. Validation failures leave the link
    /// `NotReady` and return `Ok`; bus faults also leave it `NotReady` and
    /// are returned as `Err`. No retry happens here.
    pub fn wakeup(&mut self) -> Result<LinkState> {
        self.wakeup_attempts += 1;
        match self.run_wakeup() {
            Ok(true) => {
                self.link = self.link.on_wakeup_succeeded();
                debug!("pn532 link {}", self.link);
            }
            Ok(false) => {
                self.link = self.link.on_wakeup_failed();
                warn!("pn532 wakeup rejected, link {}", self.link);
            }
            Err(e) => {
                self.link = self.link.on_wakeup_failed();
                warn!("pn532 wakeup aborted: {}", e);
                return Err(e);
            }
        }
        Ok(self.link)
    }

    fn run_wakeup(&mut self) -> Result<bool> {
        let cmd = Command::WAKEUP;
        self.transport.delay_ms(self.config.settle_delay_ms);

        let exchange = self.exchange(&cmd)?;
        let ok = exchange.ack_ok()
            && exchange.status_ok(cmd.response_code())
            && exchange.checksum_ok(cmd.response_len());

        self.transport.delay_ms(self.config.settle_delay_ms);
        Ok(ok)
    }

    /// Write the command frame, then read the acknowledgement and the
    /// response with a settling delay before each read.
    pub(crate) fn exchange(&mut self, cmd: &Command) -> Result<Exchange> {
        let frame = cmd.to_frame()?;
        let address = self.config.address;
        let timeout = self.config.read_timeout_ms;

        trace!("pn532 tx {}", bytes_to_hex_spaced(&frame));
        self.transport.write(address, &frame)?;

        self.transport.delay_ms(self.config.settle_delay_ms);
        let ack = self.transport.read(address, ACK_READ_LEN, timeout)?;
        trace!("pn532 ack {}", bytes_to_hex_spaced(&ack));

        self.transport.delay_ms(self.config.settle_delay_ms);
        let response = self.transport.read(address, cmd.response_len(), timeout)?;
        trace!("pn532 rx {}", bytes_to_hex_spaced(&response));

        Ok(Exchange::new(ack, response))
    }
}
