//! Registry capability traits.
//!
//! The resolver delegates every registry-specific step to these traits.
//! `sns_registry_plugin` implements [`SnsRegistryClient`] on top of a
//! [`SolanaRpcClient`](crate::SolanaRpcClient); the top-level-domain
//! registry is supplied by the embedding application.

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::models::{NameRegistryState, TldDomain};
use crate::pubkey::Pubkey;

/// SNS (Registry A) capability.
#[async_trait]
pub trait SnsRegistryClient: Send + Sync {
    /// Derive the registry entry address for a domain name.
    ///
    /// Derivation is deterministic and does not touch the network.
    ///
    /// # Errors
    ///
    /// - `InvalidDomain` if the name cannot be split into supported labels
    fn domain_key(&self, domain: &str) -> Result<Pubkey, RegistryError>;

    /// Fetch and decode the registry entry at `name_account`.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the entry does not exist
    /// - `InvalidAccountData` if the entry is shorter than its header
    /// - `Rpc` on transport failures
    async fn registry_state(&self, name_account: &Pubkey)
    -> Result<NameRegistryState, RegistryError>;

    /// List the registry entry addresses owned by `owner`.
    ///
    /// # Errors
    ///
    /// - `Rpc` on transport failures
    async fn owned_domains(&self, owner: &Pubkey) -> Result<Vec<Pubkey>, RegistryError>;

    /// Map registry entry addresses back to their names in one batch.
    ///
    /// The output is index-aligned with `name_accounts`; entries without a
    /// reverse record are `None`.
    ///
    /// # Errors
    ///
    /// - `Rpc` on transport failures
    async fn reverse_lookup_batch(
        &self,
        name_accounts: &[Pubkey],
    ) -> Result<Vec<Option<String>>, RegistryError>;
}

/// Top-level-domain (Registry B) capability.
#[async_trait]
pub trait TldRegistryClient: Send + Sync {
    /// Owner of a domain such as `miester.abc`.
    ///
    /// Returns `Ok(None)` when the registry has no owner for the name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the lookup itself fails.
    async fn owner_of(&self, domain: &str) -> Result<Option<Pubkey>, RegistryError>;

    /// All domains owned by `owner`, each with its name account.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the lookup itself fails.
    async fn owned_domains(&self, owner: &Pubkey) -> Result<Vec<TldDomain>, RegistryError>;
}
