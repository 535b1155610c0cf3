// pn532-cardid/src/device/query.rs

//! Card query and the public card operations built on it.
//!
//! Every operation runs a full InListPassiveTarget exchange; nothing is
//! cached between calls, so a card taken away reads as absent next time.

use log::debug;

use crate::device::handle::Pn532;
use crate::protocol::Command;
use crate::transport::Transport;
use crate::types::{CardStatus, Uid};
use crate::Result;

/// Only the first four ACK bytes are checked on a card query.
const QUERY_ACK_PREFIX: usize = 4;

impl<T: Transport> Pn532<T> {
    /// Ask the chip for the UID of a card in range.
    ///
    /// ACK mismatch, a bad direction byte, a failed checksum, a short read
    /// or the `FF FF FF FF` sentinel all give `CardStatus::NoCard`. None of
    /// them touch the link state. `Err` means the bus itself failed.
    pub fn query_card(&mut self) -> Result<CardStatus> {
        self.ensure_ready()?;

        let cmd = Command::READ_PASSIVE_TARGET;
        let exchange = self.exchange(&cmd)?;

        if !exchange.ack_prefix_ok(QUERY_ACK_PREFIX) {
            debug!("pn532 query: no ack");
            return Ok(CardStatus::NoCard);
        }
        if !exchange.direction_ok() || !exchange.checksum_ok(cmd.response_len()) {
            debug!("pn532 query: invalid response");
            return Ok(CardStatus::NoCard);
        }

        let status = match exchange.uid() {
            Some(uid) if !uid.is_sentinel() => CardStatus::Present(uid),
            _ => CardStatus::NoCard,
        };
        debug!("pn532 query: {:?}", status);
        Ok(status)
    }

    /// `true` when a card answered with a valid UID.
    pub fn check_for_card(&mut self) -> Result<bool> {
        Ok(self.query_card()?.is_present())
    }

    /// The UID as space separated decimal bytes, or an empty string.
    pub fn get_card_id(&mut self) -> Result<String> {
        Ok(self
            .read_uid()?
            .map(|uid| uid.to_string())
            .unwrap_or_default())
    }

    /// `true` when a card is present and its UID is exactly `a b c d`.
    pub fn validate_card_id(&mut self, a: u8, b: u8, c: u8, d: u8) -> Result<bool> {
        self.validate_uid(&Uid::from_bytes([a, b, c, d]))
    }

    /// `true` when a card is present and its UID equals `expected`.
    pub fn validate_uid(&mut self, expected: &Uid) -> Result<bool> {
        Ok(self.read_uid()? == Some(*expected))
    }

    /// The UID of a card in range, if any.
    pub fn read_uid(&mut self) -> Result<Option<Uid>> {
        Ok(self.query_card()?.uid())
    }
}
