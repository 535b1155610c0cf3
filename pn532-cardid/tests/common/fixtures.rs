// fixtures.rs — commonly used wire bytes, written out as hex so they stay
// independent of the crate's frame encoder.

use pn532_cardid::Uid;

pub fn sample_uid() -> Uid {
    Uid::from_bytes([4, 210, 12, 88])
}

/// Wakeup (SAMConfiguration) frame as sent on the wire.
pub fn wakeup_frame() -> Vec<u8> {
    hex::decode("0000ff05fbd4140114010200").unwrap()
}

/// InListPassiveTarget frame as sent on the wire.
pub fn uid_query_frame() -> Vec<u8> {
    hex::decode("0000ff04fcd44a0100e100").unwrap()
}

/// 8 byte acknowledgement read.
pub fn ack_bytes() -> Vec<u8> {
    hex::decode("010000ff00ff0000").unwrap()
}

/// 10 byte SAMConfiguration reply window.
pub fn sam_reply_bytes() -> Vec<u8> {
    hex::decode("010000ff02fed5151600").unwrap()
}

/// 20 byte InListPassiveTarget reply window carrying UID 04 d2 0c 58.
pub fn card_reply_bytes() -> Vec<u8> {
    hex::decode("010000ff0cf4d54b01010004080404d20c589400").unwrap()
}
