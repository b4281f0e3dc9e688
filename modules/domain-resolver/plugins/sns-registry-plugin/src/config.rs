//! Configuration for the SNS registry plugin.

use domain_resolver_sdk::Pubkey;
use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::derivation::{
    NAME_PROGRAM_ID, REVERSE_LOOKUP_CLASS, ROOT_DOMAIN_ACCOUNT, SOL_SUFFIX,
};

/// Plugin configuration.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnsRegistryPluginConfig {
    /// Suffix stripped from names before their keys are derived. Must match
    /// the resolver's `sns_suffix` and the TLD behind `root_domain`.
    pub suffix: String,

    /// Name service program that owns every registry entry.
    #[serde_as(as = "DisplayFromStr")]
    pub name_program_id: Pubkey,

    /// Registry entry of the `.sol` top-level domain.
    #[serde_as(as = "DisplayFromStr")]
    pub root_domain: Pubkey,

    /// Class key under which reverse lookup records are stored.
    #[serde_as(as = "DisplayFromStr")]
    pub reverse_lookup_class: Pubkey,
}

impl Default for SnsRegistryPluginConfig {
    fn default() -> Self {
        Self {
            suffix: SOL_SUFFIX.to_owned(),
            name_program_id: NAME_PROGRAM_ID,
            root_domain: ROOT_DOMAIN_ACCOUNT,
            reverse_lookup_class: REVERSE_LOOKUP_CLASS,
        }
    }
}
