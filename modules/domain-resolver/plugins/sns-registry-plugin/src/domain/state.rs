//! Binary layout of name registry accounts.
//!
//! ```text
//! offset  size  field
//!      0    32  parent_name
//!     32    32  owner
//!     64    32  class
//!     96     *  data
//! ```
//!
//! Reverse lookup records store the domain name in `data` as a
//! little-endian `u32` byte length followed by UTF-8 bytes.

use domain_resolver_sdk::{NameRegistryState, Pubkey, RegistryError};

/// Size of the fixed header preceding the payload.
pub const HEADER_LEN: usize = 96;

/// Offset of the owner field, used by ownership scans.
pub const OWNER_OFFSET: usize = 32;

/// Offset of the parent field, used by ownership scans.
pub const PARENT_OFFSET: usize = 0;

const LENGTH_PREFIX: usize = 4;

/// Decode a registry account.
///
/// # Errors
///
/// - `InvalidAccountData` if `raw` is shorter than [`HEADER_LEN`]
pub fn decode_registry(account: &Pubkey, raw: &[u8]) -> Result<NameRegistryState, RegistryError> {
    if raw.len() < HEADER_LEN {
        return Err(RegistryError::InvalidAccountData {
            account: *account,
            reason: format!(
                "expected at least {HEADER_LEN} bytes of header, got {}",
                raw.len()
            ),
        });
    }

    Ok(NameRegistryState {
        parent_name: key_at(raw, PARENT_OFFSET),
        owner: key_at(raw, OWNER_OFFSET),
        class: key_at(raw, 64),
        data: raw[HEADER_LEN..].to_vec(),
    })
}

/// Read the name stored in a reverse lookup payload.
///
/// Returns `None` if the length prefix is missing, points past the end of
/// the payload, or the bytes are not UTF-8.
#[must_use]
pub fn decode_reverse_name(payload: &[u8]) -> Option<String> {
    let prefix: [u8; LENGTH_PREFIX] = payload.get(..LENGTH_PREFIX)?.try_into().ok()?;
    let len = usize::try_from(u32::from_le_bytes(prefix)).ok()?;
    let end = LENGTH_PREFIX.checked_add(len)?;
    let bytes = payload.get(LENGTH_PREFIX..end)?;
    String::from_utf8(bytes.to_vec()).ok()
}

fn key_at(raw: &[u8], offset: usize) -> Pubkey {
    let mut bytes = [0u8; 32];
    bytes.copy_from_slice(&raw[offset..offset + 32]);
    Pubkey::new_from_array(bytes)
}
