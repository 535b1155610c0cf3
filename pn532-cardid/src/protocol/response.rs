// pn532-cardid/src/protocol/response.rs

use crate::constants::{PN532_TFI_DEVICE, RESPONSE_CODE_INDEX, RESPONSE_TFI_INDEX, UID_OFFSET};
use crate::protocol::ack::{matches_ack_prefix, matches_ack_template};
use crate::protocol::checksum::verify_checksum;
use crate::protocol::parser::{byte_at, uid_at};
use crate::types::Uid;

/// Raw bytes captured from one command round trip: the acknowledgement read
/// followed by the response read. Both buffers keep the leading I2C status
/// byte so offsets line up with the documented layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exchange {
    /// Acknowledgement read
    pub ack: Vec<u8>,
    /// Response read
    pub response: Vec<u8>,
}

impl Exchange {
    /// Pair up the two reads of one round trip.
    pub fn new(ack: Vec<u8>, response: Vec<u8>) -> Self {
        Self { ack, response }
    }

    /// Full ACK template match.
    pub fn ack_ok(&self) -> bool {
        matches_ack_template(&self.ack)
    }

    /// First `n` bytes of the ACK template match.
    pub fn ack_prefix_ok(&self, n: usize) -> bool {
        matches_ack_prefix(&self.ack, n)
    }

    /// The TFI position carries the device->host marker 0xD5.
    pub fn direction_ok(&self) -> bool {
        byte_at(&self.response, RESPONSE_TFI_INDEX).ok() == Some(PN532_TFI_DEVICE)
    }

    /// 0xD5 followed by the expected response code.
    pub fn status_ok(&self, response_code: u8) -> bool {
        self.direction_ok()
            && byte_at(&self.response, RESPONSE_CODE_INDEX).ok() == Some(response_code)
    }

    /// DCS check over a response window of `window` bytes.
    pub fn checksum_ok(&self, window: usize) -> bool {
        verify_checksum(&self.response, window)
    }

    /// UID at the fixed offset, `None` if the response was cut short.
    pub fn uid(&self) -> Option<Uid> {
        uid_at(&self.response, UID_OFFSET).ok()
    }
}
