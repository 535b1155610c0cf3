// pn532-cardid/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records writes and delays and replays
/// queued reads in order. Delays are recorded, never slept.
#[derive(Debug, Default)]
pub struct MockTransport {
    /// Every write as (address, bytes)
    pub writes: Vec<(u8, Vec<u8>)>,
    /// Every read request as (address, len)
    pub read_requests: Vec<(u8, usize)>,
    /// Every delay in milliseconds
    pub delays: Vec<u64>,
    /// Queued read results, consumed front to back
    pub reads: VecDeque<Vec<u8>>,
    /// Testing hook: number of writes that should fail with a transport error
    pub write_failures: usize,
}

impl MockTransport {
    /// Empty mock: no queued reads, no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes for the next read. A queued buffer longer than the
    /// requested length is truncated; a shorter one is delivered as a short read.
    pub fn push_read(&mut self, bytes: Vec<u8>) {
        self.reads.push_back(bytes);
    }

    /// Set how many subsequent writes should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Frames written so far, without addresses.
    pub fn written_frames(&self) -> Vec<&[u8]> {
        self.writes.iter().map(|(_, b)| b.as_slice()).collect()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, address: u8, data: &[u8]) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        self.writes.push((address, data.to_vec()));
        Ok(())
    }

    fn read(&mut self, address: u8, len: usize, _timeout_ms: u64) -> Result<Vec<u8>> {
        self.read_requests.push((address, len));
        match self.reads.pop_front() {
            Some(mut bytes) => {
                bytes.truncate(len);
                Ok(bytes)
            }
            None => Err(Error::Timeout),
        }
    }

    fn delay_ms(&mut self, ms: u64) {
        self.delays.push(ms);
    }
}
