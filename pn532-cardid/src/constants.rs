// pn532-cardid/src/constants.rs
//! Protocol constants for the PN532 I2C link.

/// Frame preamble byte
pub const PN532_PREAMBLE: u8 = 0x00;

/// Start code: 0x00 0xFF
pub const PN532_STARTCODE: [u8; 2] = [0x00, 0xFF];

/// Frame postamble byte
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Largest TFI + data payload a normal information frame can carry (LEN is one byte).
pub const PN532_MAX_PAYLOAD_LEN: usize = 255;

/// Frame identifier for host -> PN532 frames
pub const PN532_TFI_HOST: u8 = 0xD4;
/// Frame identifier for PN532 -> host frames
pub const PN532_TFI_DEVICE: u8 = 0xD5;

/// SAMConfiguration command code
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
/// SAMConfiguration response code (command + 1)
pub const PN532_RESP_SAM_CONFIGURATION: u8 = 0x15;

/// SAMConfiguration mode: normal, no SAM
pub const SAM_MODE_NORMAL: u8 = 0x01;
/// SAMConfiguration virtual card timeout, in 50 ms units
pub const SAM_TIMEOUT: u8 = 0x14;
/// SAMConfiguration IRQ flag: drive the IRQ pin
pub const SAM_USE_IRQ: u8 = 0x01;

/// InListPassiveTarget command code
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;
/// InListPassiveTarget response code
pub const PN532_RESP_INLIST_PASSIVE_TARGET: u8 = 0x4B;

/// InListPassiveTarget: list at most one target
pub const INLIST_MAX_TARGETS: u8 = 0x01;
/// InListPassiveTarget baud rate: 106 kbps type A
pub const INLIST_BAUD_106K_TYPE_A: u8 = 0x00;

/// ACK frame the chip sends after accepting any command
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// 7-bit I2C address (0x48 as an 8-bit write address)
pub const PN532_I2C_ADDRESS: u8 = 0x48 >> 1;

/// Bit 0 of the leading I2C status byte: a frame is ready to be read
pub const PN532_I2C_STATUS_READY: u8 = 0x01;

/// Interval between status byte polls while waiting for the chip (ms)
pub const STATUS_POLL_INTERVAL_MS: u64 = 1;

/// Bytes read for an acknowledgement: leading I2C status byte + ACK frame + slack
pub const ACK_READ_LEN: usize = 8;

/// Declared exchange length of the SAMConfiguration round trip
pub const WAKEUP_FRAME_LEN: usize = 14;

/// Declared exchange length of the InListPassiveTarget round trip
pub const UID_QUERY_FRAME_LEN: usize = 24;

/// The response read is the declared exchange length minus this many bytes.
pub const RESPONSE_LEN_ADJUST: usize = 4;

/// Index of LEN in a response buffer (index 0 is the I2C status byte)
pub const RESPONSE_LEN_INDEX: usize = 4;
/// Index of LCS in a response buffer
pub const RESPONSE_LCS_INDEX: usize = 5;
/// Index of the TFI (0xD5) in a response buffer
pub const RESPONSE_TFI_INDEX: usize = 6;
/// Index of the echoed response code in a response buffer
pub const RESPONSE_CODE_INDEX: usize = 7;

/// Offset of the first UID byte in an InListPassiveTarget response buffer
pub const UID_OFFSET: usize = 14;

/// UID length handled by this driver
pub const UID_LEN: usize = 4;

/// Nominal chip settling delay between bus operations (ms)
pub const SETTLE_DELAY_MS: u64 = 100;
