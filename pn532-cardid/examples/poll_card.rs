// Card polling loop for a PN532 on a Linux I2C bus.
//
// Run with: cargo run --example poll_card --features i2c -- /dev/i2c-1

use std::thread::sleep;

use pn532_cardid::constants::PN532_I2C_ADDRESS;
use pn532_cardid::prelude::*;
use pn532_cardid::transport::I2cTransport;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let bus = std::env::args().nth(1).unwrap_or_else(|| "/dev/i2c-1".to_string());
    println!("Opening PN532 at {:#04x} on {}...", PN532_I2C_ADDRESS, bus);

    let transport = I2cTransport::open(&bus, PN532_I2C_ADDRESS)?;
    let mut reader = Pn532Builder::new(transport).build();

    loop {
        match reader.get_card_id() {
            Ok(id) if !id.is_empty() => println!("Card: {}", id),
            Ok(_) => println!("No card"),
            Err(e) => println!("Bus error: {}", e),
        }
        sleep(ms(500));
    }
}
