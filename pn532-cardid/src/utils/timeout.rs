//! Timeout and delay helpers.
//!
//! Holds the default bus read timeout, the millisecond conversion used when
//! transports sleep, and the deadline loop transports use to wait for the
//! chip before reading.

use std::time::{Duration, Instant};

use log::trace;

use crate::{Error, Result};

/// Default read timeout in milliseconds used by transports when a caller
/// doesn't provide an explicit timeout.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Run `check` every `interval` until it answers `true` or `timeout` runs out.
///
/// `check` is always called at least once. Returns `Ok(true)` as soon as it
/// reports ready and `Ok(false)` when the deadline passes while it keeps
/// answering `false`. Failed attempts are retried; if no attempt succeeded
/// before the deadline the result is `Error::Timeout`.
pub fn poll_until<F>(timeout: Duration, interval: Duration, mut check: F) -> Result<bool>
where
    F: FnMut() -> Result<bool>,
{
    let started = Instant::now();
    let mut answered = false;
    loop {
        match check() {
            Ok(true) => return Ok(true),
            Ok(false) => answered = true,
            Err(e) => trace!("poll attempt failed: {}", e),
        }
        if started.elapsed() >= timeout {
            return if answered { Ok(false) } else { Err(Error::Timeout) };
        }
        std::thread::sleep(interval);
    }
}
