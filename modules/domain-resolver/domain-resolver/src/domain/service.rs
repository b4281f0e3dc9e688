//! Domain service for the domain resolver.
//!
//! Resolution and enumeration follow different failure
//! policies: `resolve` folds every error into a [`Resolution`], while
//! `domains_owned_by` aborts on the first registry failure.

use std::sync::Arc;

use domain_resolver_sdk::{
    DomainRecord, Pubkey, RegistryKind, Resolution, SnsRegistryClient, SolanaRpcClient,
    TldDomain, TldRegistryClient,
};
use tracing::debug;

use super::diagnostics::ResolutionObserver;
use super::error::DomainError;
use super::layout::TokenAccountLayout;
use super::tokenized::{is_nft_mint, tokenized_mint_address};
use crate::config::DomainResolverConfig;

/// Raw amount held by the owner of a tokenized domain.
const NFT_HOLDER_AMOUNT: &str = "1";

/// Domain resolver service.
///
/// Holds no mutable state; concurrent calls share the collaborators.
pub struct Service {
    rpc: Arc<dyn SolanaRpcClient>,
    sns: Arc<dyn SnsRegistryClient>,
    tld: Arc<dyn TldRegistryClient>,
    observer: Arc<dyn ResolutionObserver>,
    cfg: DomainResolverConfig,
}

impl Service {
    #[must_use]
    pub fn new(
        rpc: Arc<dyn SolanaRpcClient>,
        sns: Arc<dyn SnsRegistryClient>,
        tld: Arc<dyn TldRegistryClient>,
        observer: Arc<dyn ResolutionObserver>,
        cfg: DomainResolverConfig,
    ) -> Self {
        Self {
            rpc,
            sns,
            tld,
            observer,
            cfg,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DomainResolverConfig {
        &self.cfg
    }

    /// Whether `domain` is resolved through the SNS registry.
    #[must_use]
    pub fn is_sns_domain(&self, domain: &str) -> bool {
        domain.ends_with(&self.cfg.sns_suffix)
    }

    /// Resolve `domain` to its owner.
    ///
    /// Missing registry records yield `NotFound` and every other error
    /// yields `Failed`. Both are reported to the observer.
    #[tracing::instrument(skip_all, fields(domain = %domain))]
    pub async fn resolve(&self, domain: &str) -> Resolution {
        let e = match self.resolve_owner(domain).await {
            Ok(owner) => return owner.into(),
            Err(e) => e,
        };

        self.observer.resolution_failed(domain, &e);
        if e.is_not_found() {
            Resolution::NotFound
        } else {
            Resolution::Failed {
                reason: e.to_string(),
            }
        }
    }

    async fn resolve_owner(&self, domain: &str) -> Result<Option<Pubkey>, DomainError> {
        if !self.is_sns_domain(domain) {
            return self
                .tld
                .owner_of(domain)
                .await
                .map_err(DomainError::all_domains);
        }

        let name_account = self.sns.domain_key(domain).map_err(DomainError::sns)?;
        let mint = tokenized_mint_address(&name_account, &self.cfg.tokenizer_program_id)?;

        if self.is_tokenized(&mint).await? {
            debug!(mint = %mint, "Domain is tokenized");
            return self.nft_holder(&mint).await;
        }

        self.observer.registry_key_derived(domain, &name_account);
        let state = self
            .sns
            .registry_state(&name_account)
            .await
            .map_err(DomainError::sns)?;
        Ok(Some(state.owner))
    }

    async fn is_tokenized(&self, mint: &Pubkey) -> Result<bool, DomainError> {
        let account = self.rpc.get_parsed_account(mint).await?;
        Ok(account.as_ref().is_some_and(is_nft_mint))
    }

    /// Owner of the token account holding the domain's NFT.
    async fn nft_holder(&self, mint: &Pubkey) -> Result<Option<Pubkey>, DomainError> {
        let largest = self.rpc.get_token_largest_accounts(mint).await?;
        let Some(holder) = largest.iter().find(|b| b.amount == NFT_HOLDER_AMOUNT) else {
            debug!(mint = %mint, "No account holds the domain token");
            return Ok(None);
        };

        let Some(account) = self.rpc.get_account(&holder.address).await? else {
            return Ok(None);
        };
        if account.data.is_empty() {
            return Ok(None);
        }

        Ok(Some(TokenAccountLayout::read_owner(&account.data)?))
    }

    /// List the domains owned by `owner` in both registries.
    ///
    /// # Errors
    ///
    /// - `Registry` naming the registry whose query failed
    /// - `Internal` if the reverse lookup batch is not index-aligned
    #[tracing::instrument(skip_all, fields(owner = ?owner))]
    pub async fn domains_owned_by(
        &self,
        owner: Option<&Pubkey>,
    ) -> Result<Vec<DomainRecord>, DomainError> {
        let Some(owner) = owner else {
            return Ok(Vec::new());
        };

        let mut records = self.sns_domains(owner).await?;

        let tld_domains = self
            .tld
            .owned_domains(owner)
            .await
            .map_err(DomainError::all_domains)?;
        records.extend(tld_domains.into_iter().map(tld_record));

        debug!(count = records.len(), "Enumerated owned domains");
        Ok(records)
    }

    async fn sns_domains(&self, owner: &Pubkey) -> Result<Vec<DomainRecord>, DomainError> {
        let keys = self
            .sns
            .owned_domains(owner)
            .await
            .map_err(DomainError::sns)?;
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        let names = self
            .sns
            .reverse_lookup_batch(&keys)
            .await
            .map_err(DomainError::sns)?;
        if names.len() != keys.len() {
            return Err(DomainError::Internal(format!(
                "reverse lookup returned {} names for {} keys",
                names.len(),
                keys.len()
            )));
        }

        Ok(keys
            .into_iter()
            .zip(names)
            .map(|(domain_address, domain_name)| DomainRecord {
                domain_name,
                domain_address,
                registry: RegistryKind::Sns,
            })
            .collect())
    }
}

fn tld_record(domain: TldDomain) -> DomainRecord {
    DomainRecord {
        domain_name: Some(domain.domain),
        domain_address: domain.name_account,
        registry: RegistryKind::AllDomains,
    }
}
