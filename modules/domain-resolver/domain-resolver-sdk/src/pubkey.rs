//! Account identifiers and program-derived addresses.
//!
//! [`Pubkey`] is `solana_pubkey::Pubkey`: a 32-byte account identifier that
//! renders as base58 text. Models carry it over serde as that text through
//! `serde_with::DisplayFromStr`.

pub use solana_pubkey::{
    MAX_SEED_LEN, MAX_SEEDS, PUBKEY_BYTES, ParsePubkeyError, Pubkey, PubkeyError,
};

/// Finds the first off-curve program address, bump seeds 255 down to 0.
///
/// # Errors
///
/// Returns `InvalidSeeds` when no bump yields a valid address, which also
/// covers seeds that exceed [`MAX_SEEDS`] or [`MAX_SEED_LEN`].
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), PubkeyError> {
    Pubkey::try_find_program_address(seeds, program_id).ok_or(PubkeyError::InvalidSeeds)
}

/// Key stored in a 32-byte slice of account data.
#[must_use]
pub fn pubkey_from_slice(bytes: &[u8]) -> Option<Pubkey> {
    Pubkey::try_from(bytes).ok()
}
