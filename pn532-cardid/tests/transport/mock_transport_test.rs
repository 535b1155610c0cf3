use pn532_cardid::device::{LinkState, Pn532};
use pn532_cardid::transport::{MockTransport, Transport};
use pn532_cardid::Error;

#[test]
fn mock_transport_write_and_read() {
    let mut m = MockTransport::new();
    m.push_read(vec![0x01]);
    m.write(0x24, &[0xAA]).unwrap();
    assert_eq!(m.writes.len(), 1);
    let r = m.read(0x24, 1, 1000).unwrap();
    assert_eq!(r, vec![0x01]);
}

#[test]
fn write_failure_surfaces_as_error() {
    let mut m = MockTransport::new();
    m.set_write_failures(1);
    let mut dev = Pn532::new(&mut m);
    assert!(matches!(dev.check_for_card(), Err(Error::Transport(_))));
    assert_eq!(dev.link_state(), LinkState::NotReady);
}

#[test]
fn driver_over_borrowed_transport() {
    let mut m = MockTransport::new();
    m.push_read(crate::common::ack_read());
    m.push_read(crate::common::sam_configuration_reply());
    {
        let mut dev = Pn532::new(&mut m);
        assert_eq!(dev.ensure_ready().unwrap(), LinkState::Ready);
    }
    assert_eq!(m.writes.len(), 1);
    assert_eq!(m.delays.len(), 4);
}
