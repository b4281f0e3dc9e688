//! Client implementation for the SNS registry plugin.
//!
//! Implements `SnsRegistryClient` using the domain service.

use async_trait::async_trait;
use domain_resolver_sdk::{
    MemcmpFilter, NameRegistryState, Pubkey, RegistryError, SnsRegistryClient,
};
use tracing::debug;

use super::derivation::{domain_key, reverse_lookup_key};
use super::service::Service;
use super::state::{HEADER_LEN, OWNER_OFFSET, PARENT_OFFSET, decode_registry, decode_reverse_name};

#[async_trait]
impl SnsRegistryClient for Service {
    fn domain_key(&self, domain: &str) -> Result<Pubkey, RegistryError> {
        domain_key(domain, &self.cfg)
    }

    async fn registry_state(
        &self,
        name_account: &Pubkey,
    ) -> Result<NameRegistryState, RegistryError> {
        let account = self
            .rpc
            .get_account(name_account)
            .await?
            .ok_or(RegistryError::AccountNotFound {
                account: *name_account,
            })?;

        decode_registry(name_account, &account.data)
    }

    #[tracing::instrument(skip_all, fields(owner = %owner))]
    async fn owned_domains(&self, owner: &Pubkey) -> Result<Vec<Pubkey>, RegistryError> {
        let filters = [
            MemcmpFilter::pubkey(OWNER_OFFSET, owner),
            MemcmpFilter::pubkey(PARENT_OFFSET, &self.cfg.root_domain),
        ];

        let accounts = self
            .rpc
            .get_program_accounts(&self.cfg.name_program_id, &filters)
            .await?;

        debug!(count = accounts.len(), "found owned .sol registry entries");
        Ok(accounts.into_iter().map(|(key, _)| key).collect())
    }

    #[tracing::instrument(skip_all, fields(count = name_accounts.len()))]
    async fn reverse_lookup_batch(
        &self,
        name_accounts: &[Pubkey],
    ) -> Result<Vec<Option<String>>, RegistryError> {
        if name_accounts.is_empty() {
            return Ok(Vec::new());
        }

        let reverse_keys = name_accounts
            .iter()
            .map(|key| reverse_lookup_key(key, &self.cfg))
            .collect::<Result<Vec<_>, _>>()?;

        let accounts = self.rpc.get_multiple_accounts(&reverse_keys).await?;
        if accounts.len() != reverse_keys.len() {
            return Err(RegistryError::Internal(format!(
                "requested {} reverse records, received {}",
                reverse_keys.len(),
                accounts.len()
            )));
        }

        Ok(accounts
            .into_iter()
            .map(|account| {
                account
                    .and_then(|a| a.data.get(HEADER_LEN..).and_then(decode_reverse_name))
            })
            .collect())
    }
}
