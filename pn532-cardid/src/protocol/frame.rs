// pn532-cardid/src/protocol/frame.rs

use crate::constants::{PN532_MAX_PAYLOAD_LEN, PN532_POSTAMBLE, PN532_PREAMBLE, PN532_STARTCODE};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame.
/// Format: [Preamble(1)] [StartCode(2)] [Len(1)] [LCS(1)] [TFI + Data(n)] [DCS(1)] [Postamble(1)]
/// Preamble: 0x00, StartCode: 0x00 0xFF, Postamble: 0x00
pub struct Frame;

impl Frame {
    /// Bytes a frame adds around its payload.
    pub const OVERHEAD: usize = 1 + 2 + 1 + 1 + 1 + 1;

    /// Wrap TFI + command data into a full wire frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PN532_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8;
        let mut out = Vec::with_capacity(Self::OVERHEAD + payload.len());
        out.push(PN532_PREAMBLE);
        out.extend_from_slice(&PN532_STARTCODE);
        out.push(len);
        out.push(lcs(len));
        out.extend_from_slice(payload);
        out.push(dcs(payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }
}
