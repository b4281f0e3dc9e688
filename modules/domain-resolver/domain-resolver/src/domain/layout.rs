//! SPL token account layout.
//!
//! ```text
//! offset  size  field
//!      0    32  mint
//!     32    32  owner
//!     64     8  amount (u64, little-endian)
//!     72     *  delegate, state, ... (unused here)
//! ```

use std::ops::Range;

use domain_resolver_sdk::{Pubkey, pubkey_from_slice};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("token account data too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}

/// Read-only view over token account data.
#[derive(Debug, Clone, Copy)]
pub struct TokenAccountLayout<'a> {
    data: &'a [u8],
}

impl<'a> TokenAccountLayout<'a> {
    pub const OWNER: Range<usize> = 32..64;

    /// Wrap `data`, requiring at least the mint and owner fields.
    ///
    /// # Errors
    ///
    /// - `TooShort` if `data` ends before the owner field does
    pub fn new(data: &'a [u8]) -> Result<Self, LayoutError> {
        let needed = Self::OWNER.end;
        if data.len() < needed {
            return Err(LayoutError::TooShort {
                needed,
                actual: data.len(),
            });
        }
        Ok(Self { data })
    }

    /// Owner field of a token account.
    ///
    /// # Errors
    ///
    /// - `TooShort` if `data` is shorter than 64 bytes
    pub fn read_owner(data: &[u8]) -> Result<Pubkey, LayoutError> {
        Ok(TokenAccountLayout::new(data)?.owner())
    }

    #[must_use]
    pub fn owner(&self) -> Pubkey {
        // `new` guarantees the owner range is in bounds.
        self.data
            .get(Self::OWNER)
            .and_then(pubkey_from_slice)
            .unwrap_or_default()
    }
}
