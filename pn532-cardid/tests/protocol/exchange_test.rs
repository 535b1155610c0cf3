use crate::common::fixtures;

use pn532_cardid::protocol::Exchange;

#[test]
fn recorded_card_exchange() {
    let ex = Exchange::new(fixtures::ack_bytes(), fixtures::card_reply_bytes());
    assert!(ex.ack_ok());
    assert!(ex.status_ok(0x4B));
    assert!(ex.checksum_ok(20));
    assert_eq!(ex.uid(), Some(fixtures::sample_uid()));
}

#[test]
fn recorded_wakeup_exchange() {
    let ex = Exchange::new(fixtures::ack_bytes(), fixtures::sam_reply_bytes());
    assert!(ex.ack_ok());
    assert!(ex.status_ok(0x15));
    assert!(ex.checksum_ok(10));
}
