//! Public API trait for the domain resolver.
//!
//! Consumers obtain an implementation from
//! `domain_resolver::DomainResolverBuilder` and call it like this:
//!
//! ```ignore
//! let resolution = resolver.resolve("bonfida.sol").await;
//! if let Some(owner) = resolution.owner() {
//!     println!("owned by {owner}");
//! }
//!
//! let domains = resolver.domains_owned_by(Some(&owner)).await?;
//! ```

use async_trait::async_trait;

use crate::error::DomainResolverError;
use crate::models::{DomainRecord, Resolution};
use crate::pubkey::Pubkey;

/// Public API trait for the domain resolver.
///
/// The two operations follow different failure policies:
/// - `resolve` never fails; every error becomes [`Resolution::Failed`]
/// - `domains_owned_by` is all-or-nothing; any registry failure aborts it
#[async_trait]
pub trait DomainResolverClient: Send + Sync {
    /// Resolve a domain name to the account that owns it.
    ///
    /// Names ending with the Registry-A suffix (`.sol` by default) are looked
    /// up in the SNS registry, honouring tokenized (NFT-wrapped) domains.
    /// Every other name is delegated to the top-level-domain registry.
    async fn resolve(&self, domain: &str) -> Resolution;

    /// List the domains owned by `owner` across both registries.
    ///
    /// SNS records come first, in reverse-lookup order, followed by the
    /// top-level-domain registry's records in the order it returned them.
    /// No de-duplication or sorting is performed.
    /// Returns an empty list without any remote call when `owner` is `None`.
    ///
    /// # Errors
    ///
    /// - `Registry` naming the registry whose query failed
    async fn domains_owned_by(
        &self,
        owner: Option<&Pubkey>,
    ) -> Result<Vec<DomainRecord>, DomainResolverError>;
}
