//! `SolanaRpcClient` implementation over JSON-RPC.

use async_trait::async_trait;
use domain_resolver_sdk::{
    Account, MemcmpFilter, ParsedAccount, Pubkey, RpcError, SolanaRpcClient, TokenAccountBalance,
};
use serde_json::json;

use super::service::Service;
use super::wire::{KeyedAccount, MAX_MULTIPLE_ACCOUNTS, UiAccount, WithContext, memcmp_filters};

#[async_trait]
impl SolanaRpcClient for Service {
    async fn get_parsed_account(
        &self,
        address: &Pubkey,
    ) -> Result<Option<ParsedAccount>, RpcError> {
        let params = json!([
            address.to_string(),
            { "encoding": "jsonParsed", "commitment": self.cfg.commitment.as_str() },
        ]);
        let response: WithContext<Option<UiAccount>> = self.call("getAccountInfo", params).await?;
        response
            .value
            .map(UiAccount::into_parsed_account)
            .transpose()
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RpcError> {
        let params = json!([
            address.to_string(),
            { "encoding": "base64", "commitment": self.cfg.commitment.as_str() },
        ]);
        let response: WithContext<Option<UiAccount>> = self.call("getAccountInfo", params).await?;
        response.value.map(UiAccount::into_account).transpose()
    }

    async fn get_token_largest_accounts(
        &self,
        mint: &Pubkey,
    ) -> Result<Vec<TokenAccountBalance>, RpcError> {
        let params = json!([
            mint.to_string(),
            { "commitment": self.cfg.commitment.as_str() },
        ]);
        let response: WithContext<Vec<TokenAccountBalance>> =
            self.call("getTokenLargestAccounts", params).await?;
        Ok(response.value)
    }

    #[tracing::instrument(skip_all, fields(count = addresses.len()))]
    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Account>>, RpcError> {
        let mut accounts = Vec::with_capacity(addresses.len());

        for chunk in addresses.chunks(MAX_MULTIPLE_ACCOUNTS) {
            let keys: Vec<String> = chunk.iter().map(ToString::to_string).collect();
            let params = json!([
                keys,
                { "encoding": "base64", "commitment": self.cfg.commitment.as_str() },
            ]);
            let response: WithContext<Vec<Option<UiAccount>>> =
                self.call("getMultipleAccounts", params).await?;

            if response.value.len() != chunk.len() {
                return Err(RpcError::InvalidResponse(format!(
                    "getMultipleAccounts returned {} entries for {} keys",
                    response.value.len(),
                    chunk.len()
                )));
            }

            for entry in response.value {
                accounts.push(entry.map(UiAccount::into_account).transpose()?);
            }
        }

        Ok(accounts)
    }

    #[tracing::instrument(skip_all, fields(program = %program, filters = filters.len()))]
    async fn get_program_accounts(
        &self,
        program: &Pubkey,
        filters: &[MemcmpFilter],
    ) -> Result<Vec<(Pubkey, Account)>, RpcError> {
        let params = json!([
            program.to_string(),
            {
                "encoding": "base64",
                "commitment": self.cfg.commitment.as_str(),
                "filters": memcmp_filters(filters),
            },
        ]);
        let keyed: Vec<KeyedAccount> = self.call("getProgramAccounts", params).await?;

        keyed
            .into_iter()
            .map(|k| Ok((k.pubkey, k.account.into_account()?)))
            .collect()
    }
}
