// pn532-cardid/src/device/link.rs

use derive_more::Display;

/// Whether the chip has completed the wakeup handshake.
///
/// Only the handshake moves the link. A failed card query leaves it alone.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LinkState {
    /// No successful handshake yet, or the last one failed.
    #[default]
    NotReady,
    /// Handshake accepted; card queries can run.
    Ready,
}

impl LinkState {
    /// `true` for `Ready`.
    pub fn is_ready(self) -> bool {
        self == LinkState::Ready
    }

    /// Handshake validated: ACK, `D5 15` echo and checksum all passed.
    pub fn on_wakeup_succeeded(self) -> LinkState {
        LinkState::Ready
    }

    /// Handshake rejected or aborted by a bus fault.
    pub fn on_wakeup_failed(self) -> LinkState {
        LinkState::NotReady
    }
}
