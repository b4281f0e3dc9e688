//! Deterministic derivation of SNS registry addresses.
//!
//! A name account lives at the program-derived address of
//! `[sha256(HASH_PREFIX + name), class, parent]` under the name program,
//! with all-zero keys standing in for an absent class or parent.

use domain_resolver_sdk::{Pubkey, RegistryError, find_program_address};
use sha2::{Digest, Sha256};

use crate::config::SnsRegistryPluginConfig;

/// Prefix mixed into every hashed name.
pub const HASH_PREFIX: &str = "SPL Name Service";

/// Default suffix of top-level domains, matching [`ROOT_DOMAIN_ACCOUNT`].
pub const SOL_SUFFIX: &str = ".sol";

/// `namesLPneVptA9Z5rqUDD9tMTWEJwofgaYwp8cawRkX`
pub const NAME_PROGRAM_ID: Pubkey = Pubkey::new_from_array([
    11, 173, 81, 244, 19, 193, 243, 169, 148, 96, 217, 0, 216, 191, 46, 214, 146, 126, 202, 52,
    215, 183, 132, 43, 248, 16, 169, 115, 8, 45, 30, 220,
]);

/// `58PwtjSDuFHuUkYjH9BYnnQKHfwo9reZhC2zMJv9JPkx`, the `.sol` TLD entry.
pub const ROOT_DOMAIN_ACCOUNT: Pubkey = Pubkey::new_from_array([
    61, 83, 194, 75, 56, 54, 14, 211, 129, 58, 35, 223, 178, 223, 216, 32, 171, 88, 33, 203, 121,
    41, 163, 141, 46, 170, 178, 82, 232, 56, 37, 149,
]);

/// `33m47vH6Eav6jr5Ry86XjhRft2jRBLDnDgPSHoquXi2Z`
pub const REVERSE_LOOKUP_CLASS: Pubkey = Pubkey::new_from_array([
    30, 108, 88, 228, 177, 181, 74, 40, 91, 207, 20, 62, 230, 167, 136, 53, 110, 250, 134, 226,
    89, 243, 216, 171, 22, 106, 244, 14, 246, 43, 73, 142,
]);

/// Subdomain labels are hashed with this byte prepended.
const SUBDOMAIN_PREFIX: char = '\0';

#[must_use]
pub fn hashed_name(name: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(HASH_PREFIX.as_bytes());
    hasher.update(name.as_bytes());
    hasher.finalize().into()
}

/// Address of the name account for an already hashed name.
///
/// # Errors
///
/// Returns `Internal` if no bump seed yields an off-curve address.
pub fn name_account_key(
    hashed_name: &[u8; 32],
    class: Option<&Pubkey>,
    parent: Option<&Pubkey>,
    program_id: &Pubkey,
) -> Result<Pubkey, RegistryError> {
    let class = class.copied().unwrap_or_default();
    let parent = parent.copied().unwrap_or_default();

    find_program_address(&[hashed_name.as_slice(), class.as_ref(), parent.as_ref()], program_id)
        .map(|(key, _bump)| key)
        .map_err(|e| RegistryError::Internal(e.to_string()))
}

/// Registry entry address of a domain or one-level subdomain.
///
/// Accepts `name`, `sub.name` and both with the configured suffix, e.g.
/// `sub.name.sol`.
///
/// # Errors
///
/// - `InvalidDomain` for empty labels or deeper nesting
pub fn domain_key(domain: &str, cfg: &SnsRegistryPluginConfig) -> Result<Pubkey, RegistryError> {
    let bare = domain.strip_suffix(cfg.suffix.as_str()).unwrap_or(domain);
    let labels: Vec<&str> = bare.split('.').collect();

    if labels.iter().any(|label| label.is_empty()) {
        return Err(RegistryError::InvalidDomain(domain.to_owned()));
    }

    match labels.as_slice() {
        [name] => derive(name, &cfg.root_domain, cfg),
        [sub, parent] => {
            let parent_key = derive(parent, &cfg.root_domain, cfg)?;
            let prefixed = format!("{SUBDOMAIN_PREFIX}{sub}");
            derive(&prefixed, &parent_key, cfg)
        }
        _ => Err(RegistryError::InvalidDomain(domain.to_owned())),
    }
}

/// Address of the reverse lookup record for a registry entry.
///
/// # Errors
///
/// Returns `Internal` if no bump seed yields an off-curve address.
pub fn reverse_lookup_key(
    name_account: &Pubkey,
    cfg: &SnsRegistryPluginConfig,
) -> Result<Pubkey, RegistryError> {
    let hashed = hashed_name(&name_account.to_string());
    name_account_key(
        &hashed,
        Some(&cfg.reverse_lookup_class),
        None,
        &cfg.name_program_id,
    )
}

fn derive(
    name: &str,
    parent: &Pubkey,
    cfg: &SnsRegistryPluginConfig,
) -> Result<Pubkey, RegistryError> {
    name_account_key(&hashed_name(name), None, Some(parent), &cfg.name_program_id)
}
