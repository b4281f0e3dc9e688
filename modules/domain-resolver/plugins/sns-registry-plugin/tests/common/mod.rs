#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! In-memory RPC node for SNS registry plugin tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use domain_resolver_sdk::{
    Account, MemcmpFilter, ParsedAccount, Pubkey, RpcError, SolanaRpcClient,
    TokenAccountBalance,
};

#[derive(Default)]
pub struct InMemoryRpc {
    accounts: Mutex<HashMap<Pubkey, Account>>,
    calls: Mutex<Vec<String>>,
    fail_with: Mutex<Option<RpcError>>,
}

impl InMemoryRpc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.lock().unwrap().insert(
            key,
            Account {
                lamports: 1_000_000,
                owner,
                executable: false,
                data,
            },
        );
    }

    pub fn fail_all(&self, err: RpcError) {
        *self.fail_with.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &str) -> Result<(), RpcError> {
        self.calls.lock().unwrap().push(call.to_owned());
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn matches(account: &Account, filter: &MemcmpFilter) -> bool {
    account
        .data
        .get(filter.offset..filter.offset + filter.bytes.len())
        .is_some_and(|window| window == filter.bytes.as_slice())
}

#[async_trait]
impl SolanaRpcClient for InMemoryRpc {
    async fn get_parsed_account(
        &self,
        _address: &Pubkey,
    ) -> Result<Option<ParsedAccount>, RpcError> {
        self.record("getParsedAccountInfo")?;
        Ok(None)
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RpcError> {
        self.record("getAccountInfo")?;
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }

    async fn get_token_largest_accounts(
        &self,
        _mint: &Pubkey,
    ) -> Result<Vec<TokenAccountBalance>, RpcError> {
        self.record("getTokenLargestAccounts")?;
        Ok(Vec::new())
    }

    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Account>>, RpcError> {
        self.record("getMultipleAccounts")?;
        let accounts = self.accounts.lock().unwrap();
        Ok(addresses.iter().map(|a| accounts.get(a).cloned()).collect())
    }

    async fn get_program_accounts(
        &self,
        program: &Pubkey,
        filters: &[MemcmpFilter],
    ) -> Result<Vec<(Pubkey, Account)>, RpcError> {
        self.record("getProgramAccounts")?;
        let accounts = self.accounts.lock().unwrap();
        let mut found: Vec<(Pubkey, Account)> = accounts
            .iter()
            .filter(|(_, account)| account.owner == *program)
            .filter(|(_, account)| filters.iter().all(|f| matches(account, f)))
            .map(|(key, account)| (*key, account.clone()))
            .collect();
        found.sort_by_key(|(key, _)| *key);
        Ok(found)
    }
}

/// Registry account bytes: 96-byte header followed by `payload`.
pub fn registry_data(parent: &Pubkey, owner: &Pubkey, class: &Pubkey, payload: &[u8]) -> Vec<u8> {
    let mut raw = parent.to_bytes().to_vec();
    raw.extend_from_slice(owner.as_ref());
    raw.extend_from_slice(class.as_ref());
    raw.extend_from_slice(payload);
    raw
}

/// Reverse record payload for `name`.
pub fn reverse_payload(name: &str) -> Vec<u8> {
    let mut payload = u32::try_from(name.len()).unwrap().to_le_bytes().to_vec();
    payload.extend_from_slice(name.as_bytes());
    payload
}
