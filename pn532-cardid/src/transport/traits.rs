// pn532-cardid/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the byte bus away from protocol/device logic.
///
/// Implementations block. A read may deliver fewer bytes than requested;
/// the protocol layer treats the missing bytes as mismatches.
pub trait Transport {
    /// Send raw bytes to the device at `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()>;

    /// Read up to `len` bytes from the device at `address`. `Error::Timeout`
    /// when the bus delivers nothing within `timeout_ms` milliseconds
    fn read(&mut self, address: u8, len: usize, timeout_ms: u64) -> Result<Vec<u8>>;

    /// Block for `ms` milliseconds. Default implementation sleeps the
    /// current thread.
    fn delay_ms(&mut self, ms: u64) {
        std::thread::sleep(crate::utils::ms(ms));
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).read(address, len, timeout_ms)
    }

    fn delay_ms(&mut self, ms: u64) {
        (**self).delay_ms(ms)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        (**self).write(address, data)
    }

    fn read(&mut self, address: u8, len: usize, timeout_ms: u64) -> Result<Vec<u8>> {
        (**self).read(address, len, timeout_ms)
    }

    fn delay_ms(&mut self, ms: u64) {
        (**self).delay_ms(ms)
    }
}
