// pn532-cardid/src/protocol/commands.rs

use crate::constants::*;
use crate::protocol::Frame;
use crate::Result;

/// The PN532 commands this driver issues. Each variant encodes to
/// TFI (0xD4) + command code + parameters, ready for `Frame::encode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// SAMConfiguration, used as the wakeup handshake.
    SamConfiguration {
        /// SAM mode byte
        mode: u8,
        /// Virtual card timeout, 50 ms units
        timeout: u8,
        /// IRQ pin usage
        irq: u8,
    },
    /// InListPassiveTarget, asks for the UID of a card in the field.
    InListPassiveTarget {
        /// Most targets to list (the chip supports 1 or 2)
        max_targets: u8,
        /// Baud rate and modulation selector
        baud_rate: u8,
    },
}

impl Command {
    /// Normal mode, 1 s virtual card timeout, IRQ driven.
    pub const WAKEUP: Self = Command::SamConfiguration {
        mode: SAM_MODE_NORMAL,
        timeout: SAM_TIMEOUT,
        irq: SAM_USE_IRQ,
    };

    /// One target at 106 kbps type A.
    pub const READ_PASSIVE_TARGET: Self = Command::InListPassiveTarget {
        max_targets: INLIST_MAX_TARGETS,
        baud_rate: INLIST_BAUD_106K_TYPE_A,
    };

    /// Command code sent after the TFI.
    pub fn command_code(&self) -> u8 {
        match self {
            Command::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Command::InListPassiveTarget { .. } => PN532_CMD_INLIST_PASSIVE_TARGET,
        }
    }

    /// The chip answers with the command code + 1.
    pub fn response_code(&self) -> u8 {
        match self {
            Command::SamConfiguration { .. } => PN532_RESP_SAM_CONFIGURATION,
            Command::InListPassiveTarget { .. } => PN532_RESP_INLIST_PASSIVE_TARGET,
        }
    }

    /// Declared length of the whole exchange; the response read is this
    /// minus `RESPONSE_LEN_ADJUST`.
    pub fn frame_len(&self) -> usize {
        match self {
            Command::SamConfiguration { .. } => WAKEUP_FRAME_LEN,
            Command::InListPassiveTarget { .. } => UID_QUERY_FRAME_LEN,
        }
    }

    /// Bytes requested by the response read, status byte included.
    pub fn response_len(&self) -> usize {
        self.frame_len() - RESPONSE_LEN_ADJUST
    }

    /// TFI + command code + parameters.
    pub fn encode(&self) -> Vec<u8> {
        let mut v = vec![PN532_TFI_HOST, self.command_code()];
        match *self {
            Command::SamConfiguration { mode, timeout, irq } => {
                v.extend_from_slice(&[mode, timeout, irq]);
            }
            Command::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => {
                v.extend_from_slice(&[max_targets, baud_rate]);
            }
        }
        v
    }

    /// Full wire frame for this command.
    pub fn to_frame(&self) -> Result<Vec<u8>> {
        Frame::encode(&self.encode())
    }
}
