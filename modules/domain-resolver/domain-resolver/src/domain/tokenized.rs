//! Tokenized (NFT-wrapped) SNS domains.
//!
//! Wrapping a domain mints a single-supply token whose mint address is
//! derived from the domain's registry entry. Whoever holds that token owns
//! the domain, regardless of the owner recorded in the registry.

use domain_resolver_sdk::{AccountData, ParsedAccount, Pubkey, PubkeyError, find_program_address};
use serde::Deserialize;

/// `nftD3vbNkNqfj2Sd3HZwbpw4BxxKWr4AjGb9X38JeZk`
pub const NAME_TOKENIZER_ID: Pubkey = Pubkey::new_from_array([
    11, 179, 25, 247, 166, 167, 29, 182, 28, 137, 181, 33, 75, 66, 0, 194, 145, 84, 78, 39, 168,
    99, 97, 254, 230, 223, 9, 233, 47, 115, 104, 119,
]);

pub const MINT_PREFIX: &[u8] = b"tokenized_name";

/// Supply of a mint backing a tokenized domain.
const NFT_SUPPLY: &str = "1";

/// Mint address of the token wrapping `name_account`.
///
/// # Errors
///
/// Returns `PubkeyError` if no bump seed yields a valid program address.
pub fn tokenized_mint_address(
    name_account: &Pubkey,
    tokenizer_program: &Pubkey,
) -> Result<Pubkey, PubkeyError> {
    find_program_address(&[MINT_PREFIX, name_account.as_ref()], tokenizer_program).map(|(mint, _bump)| mint)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MintInfo {
    supply: String,
    is_initialized: bool,
}

/// Whether a parsed account is an initialized mint with a supply of exactly one.
///
/// Raw data and data that does not look like a mint count as "not an NFT".
#[must_use]
pub fn is_nft_mint(account: &ParsedAccount) -> bool {
    let AccountData::Parsed(data) = &account.data else {
        return false;
    };
    let Some(info) = data.parsed.get("info") else {
        return false;
    };

    MintInfo::deserialize(info)
        .is_ok_and(|mint| mint.supply == NFT_SUPPLY && mint.is_initialized)
}
