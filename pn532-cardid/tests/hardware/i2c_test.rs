//! Real-bus checks. Skipped when no PN532 answers on /dev/i2c-1.

use pn532_cardid::constants::PN532_I2C_ADDRESS;
use pn532_cardid::device::{LinkState, Pn532};
use pn532_cardid::transport::I2cTransport;
use serial_test::serial;

fn open_device() -> Option<Pn532<I2cTransport>> {
    crate::common::init_logging();
    let transport = I2cTransport::open("/dev/i2c-1", PN532_I2C_ADDRESS).ok()?;
    let mut dev = Pn532::new(transport);
    match dev.ensure_ready() {
        Ok(LinkState::Ready) => Some(dev),
        _ => None,
    }
}

#[test]
#[serial]
fn wakeup_reaches_ready() {
    if let Some(dev) = open_device() {
        assert_eq!(dev.link_state(), LinkState::Ready);
    }
}

#[test]
#[serial]
fn card_query_does_not_fail() {
    if let Some(mut dev) = open_device() {
        let id = dev.get_card_id().unwrap();
        assert!(id.is_empty() || id.split(' ').count() == 4);
    }
}

#[test]
#[serial]
fn card_query_is_bounded_by_read_timeout() {
    if let Some(mut dev) = open_device() {
        let limit = std::time::Duration::from_millis(
            2 * dev.config().read_timeout_ms + 3 * dev.config().settle_delay_ms + 500,
        );
        let started = std::time::Instant::now();
        dev.check_for_card().unwrap();
        assert!(started.elapsed() < limit);
    }
}
