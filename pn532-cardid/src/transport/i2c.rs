// pn532-cardid/src/transport/i2c.rs

//! Linux I2C transport.

#![cfg(feature = "i2c")]

use std::path::Path;

use i2cdev::core::I2CDevice;
use i2cdev::linux::LinuxI2CDevice;
use log::{debug, trace};

use crate::constants::{PN532_I2C_STATUS_READY, STATUS_POLL_INTERVAL_MS};
use crate::transport::traits::Transport;
use crate::utils::{bytes_to_hex_spaced, ms, poll_until};
use crate::Result;

/// Linux `/dev/i2c-N` transport. Feature-gated behind `--features i2c`.
///
/// A read first polls the one-byte PN532 status until bit 0 is set or
/// `timeout_ms` runs out, then reads the full `len` bytes. When the chip
/// answers but stays busy past the deadline the bytes are still read and
/// returned; their status byte fails validation upstream. `Error::Timeout`
/// means no status poll got through the bus before the deadline.
pub struct I2cTransport {
    device: LinuxI2CDevice,
    address: u8,
}

impl I2cTransport {
    /// Open the bus device node with `address` as the initial slave.
    pub fn open<P: AsRef<Path>>(path: P, address: u8) -> Result<Self> {
        let device = LinuxI2CDevice::new(path, u16::from(address))?;
        Ok(Self { device, address })
    }

    fn select(&mut self, address: u8) -> Result<()> {
        if address != self.address {
            self.device.set_slave_address(u16::from(address))?;
            self.address = address;
        }
        Ok(())
    }

    fn wait_ready(&mut self, timeout_ms: u64) -> Result<bool> {
        let device = &mut self.device;
        poll_until(ms(timeout_ms), ms(STATUS_POLL_INTERVAL_MS), || {
            let mut status = [0u8; 1];
            device.read(&mut status)?;
            Ok(status[0] & PN532_I2C_STATUS_READY != 0)
        })
    }
}

impl Transport for I2cTransport {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        self.select(address)?;
        trace!("i2c {:#04x} tx {}", address, bytes_to_hex_spaced(data));
        self.device.write(data)?;
        Ok(())
    }

    fn read(&mut self, address: u8, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        self.select(address)?;
        if !self.wait_ready(timeout_ms)? {
            debug!("i2c {:#04x} still busy after {} ms", address, timeout_ms);
        }
        let mut buf = vec![0u8; len];
        self.device.read(&mut buf)?;
        trace!("i2c {:#04x} rx {}", address, bytes_to_hex_spaced(&buf));
        Ok(buf)
    }
}
