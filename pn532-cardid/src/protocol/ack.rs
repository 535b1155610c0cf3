// pn532-cardid/src/protocol/ack.rs

use crate::constants::PN532_ACK;

/// Offset of the ACK frame inside an acknowledgement read; index 0 is the
/// I2C status byte.
pub const ACK_OFFSET: usize = 1;

/// Compare the full 6 byte ACK template against `ack[1..7]`.
pub fn matches_ack_template(ack: &[u8]) -> bool {
    matches_ack_prefix(ack, PN532_ACK.len())
}

/// Compare only the first `n` bytes of the ACK template. Missing bytes in a
/// short read count as mismatches.
pub fn matches_ack_prefix(ack: &[u8], n: usize) -> bool {
    let n = n.min(PN532_ACK.len());
    match ack.get(ACK_OFFSET..ACK_OFFSET + n) {
        Some(window) => window == &PN532_ACK[..n],
        None => false,
    }
}
