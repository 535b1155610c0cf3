//! Test support helpers intended for use by unit and integration tests.
//!
//! These build the byte buffers a PN532 puts on the bus (status byte
//! included) and pre-seeded mock drivers, so tests in the crate and under
//! tests/ share one notion of a well-formed reply.
#![allow(dead_code)]

use crate::constants::{
    PN532_ACK, PN532_I2C_STATUS_READY, PN532_RESP_INLIST_PASSIVE_TARGET, PN532_TFI_DEVICE,
};
use crate::device::Pn532;
use crate::protocol::Frame;
use crate::transport::MockTransport;
use crate::types::Uid;
use crate::Result;

/// I2C status byte the chip prepends when data is ready.
pub const STATUS_READY: u8 = PN532_I2C_STATUS_READY;

/// An 8 byte acknowledgement read: status, ACK frame, trailing pad.
#[doc(hidden)]
pub fn ack_read() -> Vec<u8> {
    let mut v = vec![STATUS_READY];
    v.extend_from_slice(&PN532_ACK);
    v.push(0x00);
    v
}

/// A bus with nothing to say: `len` zero bytes.
#[doc(hidden)]
pub fn idle_read(len: usize) -> Vec<u8> {
    vec![0x00; len]
}

/// Status byte followed by a full frame carrying `payload` (TFI + data).
#[doc(hidden)]
pub fn frame_response(payload: &[u8]) -> Vec<u8> {
    let mut v = vec![STATUS_READY];
    // Test payloads are always small enough to frame.
    v.extend_from_slice(&Frame::encode(payload).unwrap_or_default());
    v
}

/// The 10 byte SAMConfiguration reply: D5 15.
#[doc(hidden)]
pub fn sam_configuration_reply() -> Vec<u8> {
    frame_response(&[PN532_TFI_DEVICE, 0x15])
}

/// The 20 byte InListPassiveTarget reply for one ISO14443A target with a
/// 4 byte UID: D5 4B NbTg Tg SENS_RES(2) SEL_RES NFCIDLength UID(4).
#[doc(hidden)]
pub fn in_list_reply(uid: Uid) -> Vec<u8> {
    let mut payload = vec![
        PN532_TFI_DEVICE,
        PN532_RESP_INLIST_PASSIVE_TARGET,
        0x01, // NbTg
        0x01, // Tg
        0x00, // SENS_RES
        0x04,
        0x08, // SEL_RES
        0x04, // NFCIDLength
    ];
    payload.extend_from_slice(uid.as_bytes());
    frame_response(&payload)
}

/// MockTransport with the wakeup replies queued first, then `reads`.
#[doc(hidden)]
pub fn seeded_mock(reads: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    mock.push_read(ack_read());
    mock.push_read(sam_configuration_reply());
    for r in reads {
        mock.push_read(r);
    }
    mock
}

/// A `NotReady` driver whose first operation will find the wakeup replies.
#[doc(hidden)]
pub fn mock_driver(reads: Vec<Vec<u8>>) -> Pn532<MockTransport> {
    Pn532::new(seeded_mock(reads))
}

/// A driver that has already completed the wakeup handshake.
#[doc(hidden)]
pub fn ready_mock_driver(reads: Vec<Vec<u8>>) -> Result<Pn532<MockTransport>> {
    let mut dev = mock_driver(reads);
    dev.wakeup()?;
    Ok(dev)
}
