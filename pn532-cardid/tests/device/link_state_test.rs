use crate::common;

use pn532_cardid::device::{LinkState, Pn532};
use pn532_cardid::transport::MockTransport;

#[test]
fn handshake_with_wrong_command_echo_stays_not_ready() {
    common::init_logging();
    let mut mock = MockTransport::new();
    mock.push_read(common::ack_read());
    mock.push_read(common::frame_response(&[0xD5, 0x16]));

    let mut dev = Pn532::new(mock);
    assert_eq!(dev.wakeup().unwrap(), LinkState::NotReady);
    assert_eq!(dev.link_state(), LinkState::NotReady);
}

#[test]
fn failed_handshake_is_retried_by_next_operation() {
    common::init_logging();
    let mut mock = MockTransport::new();
    // First call: rejected handshake, then an idle query
    mock.push_read(common::ack_read());
    mock.push_read(common::frame_response(&[0xD5, 0x16]));
    mock.push_read(common::idle_read(8));
    mock.push_read(common::idle_read(20));
    // Second call: good handshake, then a card
    mock.push_read(common::ack_read());
    mock.push_read(common::sam_configuration_reply());
    mock.push_read(common::ack_read());
    mock.push_read(common::in_list_reply(common::fixtures::sample_uid()));

    let mut dev = Pn532::new(mock);
    assert_eq!(dev.get_card_id().unwrap(), "");
    assert_eq!(dev.link_state(), LinkState::NotReady);
    assert_eq!(dev.wakeup_attempts(), 1);

    assert_eq!(dev.get_card_id().unwrap(), "4 210 12 88");
    assert_eq!(dev.link_state(), LinkState::Ready);
    assert_eq!(dev.wakeup_attempts(), 2);
}

#[test]
fn handshake_runs_once_across_empty_polls() {
    common::init_logging();
    let mut dev = common::mock_driver(vec![
        common::idle_read(8),
        common::idle_read(20),
        common::idle_read(8),
        common::idle_read(20),
    ]);

    assert_eq!(dev.get_card_id().unwrap(), "");
    assert_eq!(dev.wakeup_attempts(), 1);
    assert_eq!(dev.get_card_id().unwrap(), "");
    assert_eq!(dev.wakeup_attempts(), 1);
    assert_eq!(dev.link_state(), LinkState::Ready);
}

#[test]
fn ack_mismatch_does_not_drop_ready() {
    common::init_logging();
    let mut bad_ack = common::ack_read();
    bad_ack[3] = 0x00;
    let mut dev = common::ready_mock_driver(vec![
        bad_ack,
        common::in_list_reply(common::fixtures::sample_uid()),
    ])
    .unwrap();
    assert_eq!(dev.link_state(), LinkState::Ready);

    assert!(!dev.check_for_card().unwrap());
    assert_eq!(dev.link_state(), LinkState::Ready);
    assert_eq!(dev.wakeup_attempts(), 1);
}
