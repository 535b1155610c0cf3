// pn532-cardid/src/types.rs

use std::fmt;

use crate::Error;
use crate::constants::UID_LEN;

/// UID - Newtype Pattern (4 バイト)
///
/// `Display` renders the bytes as space separated decimal values in wire
/// order, e.g. `4 210 12 88`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; UID_LEN]);

impl Uid {
    /// Reserved value standing for "no valid card". Never returned as a real UID.
    pub const SENTINEL: Self = Self([0xFF; UID_LEN]);

    /// Wrap four UID bytes in wire order.
    pub const fn from_bytes(bytes: [u8; UID_LEN]) -> Self {
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; UID_LEN] {
        &self.0
    }

    /// `true` for `FF FF FF FF`.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::SENTINEL
    }

    /// Lowercase hex without separators, e.g. `04d20c58`.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", b)?;
        }
        Ok(())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != UID_LEN {
            return Err(Error::InvalidLength {
                expected: UID_LEN,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; UID_LEN];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Accept caller supplied integers only when every value fits in a byte.
impl TryFrom<[i64; UID_LEN]> for Uid {
    type Error = Error;

    fn try_from(values: [i64; UID_LEN]) -> Result<Self, Self::Error> {
        let mut arr = [0u8; UID_LEN];
        for (index, (slot, &value)) in arr.iter_mut().zip(values.iter()).enumerate() {
            *slot = u8::try_from(value).map_err(|_| Error::ByteOutOfRange { index, value })?;
        }
        Ok(Self(arr))
    }
}

/// Outcome of a single card query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardStatus {
    /// No card answered, or the answer failed validation.
    NoCard,
    /// A card answered with this UID.
    Present(Uid),
}

impl CardStatus {
    /// `true` for `Present`.
    pub fn is_present(&self) -> bool {
        matches!(self, CardStatus::Present(_))
    }

    /// The UID when a card is present.
    pub fn uid(&self) -> Option<Uid> {
        match self {
            CardStatus::Present(uid) => Some(*uid),
            CardStatus::NoCard => None,
        }
    }
}
