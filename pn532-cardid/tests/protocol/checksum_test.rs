use crate::common::{self, fixtures};

use pn532_cardid::protocol::{dcs, lcs, verify_checksum};
use pn532_cardid::Uid;

#[test]
fn lcs_and_dcs_examples() {
    assert_eq!(lcs(5), 0xfb);
    assert_eq!(lcs(4), 0xfc);
    assert_eq!(dcs(&[0xD4, 0x14, 0x01, 0x14, 0x01]), 0x02);
    assert_eq!(dcs(&[0xD4, 0x4A, 0x01, 0x00]), 0xe1);
}

#[test]
fn recorded_replies_verify() {
    assert!(verify_checksum(&fixtures::sam_reply_bytes(), 10));
    assert!(verify_checksum(&fixtures::card_reply_bytes(), 20));
}

#[test]
fn support_replies_agree_with_recorded_bytes() {
    assert_eq!(common::sam_configuration_reply(), fixtures::sam_reply_bytes());
    assert_eq!(
        common::in_list_reply(fixtures::sample_uid()),
        fixtures::card_reply_bytes()
    );
}

#[test]
fn every_payload_mutation_is_caught() {
    let good = common::in_list_reply(Uid::from_bytes([1, 2, 3, 4]));
    for idx in (1..=18).filter(|i| *i != 4 && *i != 5) {
        let mut bad = good.clone();
        bad[idx] = bad[idx].wrapping_add(1);
        assert!(!verify_checksum(&bad, 20), "mutation at {} accepted", idx);
    }
}

#[test]
fn zero_buffer_fails() {
    assert!(!verify_checksum(&common::idle_read(20), 20));
}
