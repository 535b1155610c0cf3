use crate::common::{self, fixtures};

use pn532_cardid::{CardStatus, Uid};

fn card_reads(uid: Uid) -> Vec<Vec<u8>> {
    vec![common::ack_read(), common::in_list_reply(uid)]
}

#[test]
fn get_card_id_renders_decimal() {
    let mut dev = common::ready_mock_driver(card_reads(fixtures::sample_uid())).unwrap();
    assert_eq!(dev.get_card_id().unwrap(), "4 210 12 88");
}

#[test]
fn get_card_id_rejects_sentinel() {
    let mut dev = common::ready_mock_driver(card_reads(Uid::SENTINEL)).unwrap();
    assert_eq!(dev.get_card_id().unwrap(), "");
}

#[test]
fn recorded_bytes_yield_uid() {
    let mut dev =
        common::ready_mock_driver(vec![fixtures::ack_bytes(), fixtures::card_reply_bytes()])
            .unwrap();
    assert_eq!(
        dev.query_card().unwrap(),
        CardStatus::Present(fixtures::sample_uid())
    );
}

#[test]
fn validate_card_id_exact_match() {
    let mut dev = common::ready_mock_driver(card_reads(fixtures::sample_uid())).unwrap();
    assert!(dev.validate_card_id(4, 210, 12, 88).unwrap());
}

#[test]
fn validate_card_id_any_single_difference_fails() {
    let expected = [4u8, 210, 12, 88];
    for i in 0..4 {
        let mut args = expected;
        args[i] = args[i].wrapping_add(1);
        let mut dev = common::ready_mock_driver(card_reads(fixtures::sample_uid())).unwrap();
        assert!(
            !dev.validate_card_id(args[0], args[1], args[2], args[3]).unwrap(),
            "argument {} changed but still matched",
            i
        );
    }
}

#[test]
fn validate_card_id_without_card_is_false() {
    let mut dev =
        common::ready_mock_driver(vec![common::idle_read(8), common::idle_read(20)]).unwrap();
    assert!(!dev.validate_card_id(4, 210, 12, 88).unwrap());
}

#[test]
fn removed_card_is_not_cached() {
    let mut reads = card_reads(fixtures::sample_uid());
    reads.push(common::idle_read(8));
    reads.push(common::idle_read(20));
    let mut dev = common::ready_mock_driver(reads).unwrap();

    assert!(dev.check_for_card().unwrap());
    assert!(!dev.check_for_card().unwrap());
}

#[test]
fn read_uid_typed() {
    let mut dev = common::ready_mock_driver(card_reads(fixtures::sample_uid())).unwrap();
    assert_eq!(dev.read_uid().unwrap(), Some(fixtures::sample_uid()));
}
