// pn532-cardid/src/protocol/checksum.rs

use crate::constants::{RESPONSE_LCS_INDEX, RESPONSE_LEN_INDEX};

/// Compute Length Checksum (LCS) for a PN532 frame
/// LCS = 0x100 - length (mod 256), so LEN + LCS == 0
pub fn lcs(len: u8) -> u8 {
    0u8.wrapping_sub(len)
}

/// Compute Data Checksum (DCS) over TFI + command data
/// DCS = 0x100 - (sum(payload) & 0xff)
pub fn dcs(payload: &[u8]) -> u8 {
    let sum = payload.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}

/// Verify the DCS of an inbound response buffer.
///
/// `response[0]` is the I2C status byte, so the frame proper starts at
/// index 1. Every byte from index 1 up to (excluding) `frame_len - 2` is
/// summed except the LEN/LCS pair at indices 4 and 5; the start code 0xFF
/// inside the window is what makes `0xFF - sum` equal the wire DCS. The
/// result is compared against `response[frame_len - 2]`.
///
/// The exclusion is applied the same way for the 10 byte (SAMConfiguration)
/// and 20 byte (InListPassiveTarget) windows. A buffer shorter than
/// `frame_len` fails verification.
pub fn verify_checksum(response: &[u8], frame_len: usize) -> bool {
    if frame_len < 3 || response.len() < frame_len {
        return false;
    }

    let sum = response[1..frame_len - 2]
        .iter()
        .enumerate()
        .map(|(i, &b)| (i + 1, b))
        .filter(|&(idx, _)| idx != RESPONSE_LEN_INDEX && idx != RESPONSE_LCS_INDEX)
        .fold(0u8, |acc, (_, b)| acc.wrapping_add(b));

    0xFFu8.wrapping_sub(sum) == response[frame_len - 2]
}
