//! Domain models for the domain resolver module.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::pubkey::Pubkey;

/// Naming registry a domain belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryKind {
    /// Suffix-identified registry whose entries can be tokenized as NFTs.
    #[serde(rename = "sns")]
    Sns,
    /// Generic top-level-domain registry queried through its parser.
    #[serde(rename = "alldomains")]
    AllDomains,
}

impl RegistryKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sns => "sns",
            Self::AllDomains => "alldomains",
        }
    }
}

impl fmt::Display for RegistryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain owned by an account, as returned by enumeration.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    /// Human-readable name. `None` when the registry entry has no reverse record.
    pub domain_name: Option<String>,
    /// On-chain address of the domain's registry entry.
    #[serde_as(as = "DisplayFromStr")]
    pub domain_address: Pubkey,
    /// Registry the entry lives in.
    #[serde(rename = "type")]
    pub registry: RegistryKind,
}

/// Outcome of resolving a domain name to its owner.
///
/// Resolution never fails outward: every error collapses into
/// [`Resolution::Failed`], keeping the description for callers that care.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The domain is owned by this account.
    Owner(Pubkey),
    /// The domain, its token holder, or its owner record does not exist.
    NotFound,
    /// A lookup step failed (network, malformed account, registry error).
    Failed { reason: String },
}

impl Resolution {
    /// The owning account, or `None` when unresolved for any reason.
    #[must_use]
    pub fn owner(&self) -> Option<Pubkey> {
        match self {
            Self::Owner(owner) => Some(*owner),
            Self::NotFound | Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Owner(_))
    }
}

impl From<Option<Pubkey>> for Resolution {
    fn from(owner: Option<Pubkey>) -> Self {
        owner.map_or(Self::NotFound, Self::Owner)
    }
}

/// Header of a name registry account plus the payload that follows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRegistryState {
    /// Parent name account (the TLD for top-level domains).
    pub parent_name: Pubkey,
    /// Account recorded as the domain's owner.
    pub owner: Pubkey,
    /// Optional class key; all zeroes when unset.
    pub class: Pubkey,
    /// Bytes stored after the header.
    pub data: Vec<u8>,
}

/// A domain owned in the top-level-domain registry.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TldDomain {
    /// Full domain name including its TLD, e.g. `miester.abc`.
    pub domain: String,
    /// Address of the domain's name account.
    #[serde_as(as = "DisplayFromStr")]
    pub name_account: Pubkey,
}
