#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

//! Scripted collaborators for domain resolver tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use domain_resolver::domain::tokenized::{NAME_TOKENIZER_ID, tokenized_mint_address};
use domain_resolver::{DomainError, DomainResolverBuilder, ResolutionObserver};
use domain_resolver_sdk::{
    Account, AccountData, DomainResolverClient, MemcmpFilter, NameRegistryState, ParsedAccount,
    ParsedAccountData, Pubkey, RegistryError, RpcError, SnsRegistryClient, SolanaRpcClient,
    TldDomain, TldRegistryClient, TokenAccountBalance,
};
use serde_json::json;

pub const TOKEN_PROGRAM: Pubkey = Pubkey::new_from_array([6; 32]);

pub fn key(byte: u8) -> Pubkey {
    Pubkey::new_from_array([byte; 32])
}

pub fn mint_of(name_account: &Pubkey) -> Pubkey {
    tokenized_mint_address(name_account, &NAME_TOKENIZER_ID).unwrap()
}

pub fn transport_error() -> RpcError {
    RpcError::Transport("connection reset by peer".to_owned())
}

/// Parsed mint account as returned with `jsonParsed` encoding.
pub fn mint_account(supply: &str, is_initialized: bool) -> ParsedAccount {
    ParsedAccount {
        lamports: 1_461_600,
        owner: TOKEN_PROGRAM,
        data: AccountData::Parsed(ParsedAccountData {
            program: "spl-token".to_owned(),
            parsed: json!({
                "type": "mint",
                "info": {
                    "decimals": 0,
                    "freezeAuthority": null,
                    "isInitialized": is_initialized,
                    "mintAuthority": null,
                    "supply": supply,
                },
            }),
            space: 82,
        }),
    }
}

/// 165-byte token account owned by `owner`.
pub fn token_account_data(mint: &Pubkey, owner: &Pubkey, amount: u64) -> Vec<u8> {
    let mut data = mint.to_bytes().to_vec();
    data.extend_from_slice(owner.as_ref());
    data.extend_from_slice(&amount.to_le_bytes());
    data.resize(165, 0);
    data
}

pub fn balance(address: Pubkey, amount: &str) -> TokenAccountBalance {
    TokenAccountBalance {
        address,
        amount: amount.to_owned(),
        decimals: 0,
        ui_amount_string: Some(amount.to_owned()),
    }
}

// ---------------------------------------------------------------------------
// RPC
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockRpc {
    parsed: Mutex<HashMap<Pubkey, ParsedAccount>>,
    largest: Mutex<HashMap<Pubkey, Vec<TokenAccountBalance>>>,
    accounts: Mutex<HashMap<Pubkey, Account>>,
    calls: Mutex<Vec<&'static str>>,
    fail_with: Mutex<Option<RpcError>>,
}

impl MockRpc {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put_parsed(&self, key: Pubkey, account: ParsedAccount) {
        self.parsed.lock().unwrap().insert(key, account);
    }

    pub fn put_largest(&self, mint: Pubkey, balances: Vec<TokenAccountBalance>) {
        self.largest.lock().unwrap().insert(mint, balances);
    }

    pub fn put_account(&self, key: Pubkey, owner: Pubkey, data: Vec<u8>) {
        self.accounts.lock().unwrap().insert(
            key,
            Account {
                lamports: 2_039_280,
                owner,
                executable: false,
                data,
            },
        );
    }

    pub fn fail_all(&self, err: RpcError) {
        *self.fail_with.lock().unwrap() = Some(err);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: &'static str) -> Result<(), RpcError> {
        self.calls.lock().unwrap().push(call);
        match self.fail_with.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl SolanaRpcClient for MockRpc {
    async fn get_parsed_account(
        &self,
        address: &Pubkey,
    ) -> Result<Option<ParsedAccount>, RpcError> {
        self.record("getParsedAccountInfo")?;
        Ok(self.parsed.lock().unwrap().get(address).cloned())
    }

    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RpcError> {
        self.record("getAccountInfo")?;
        Ok(self.accounts.lock().unwrap().get(address).cloned())
    }

    async fn get_token_largest_accounts(
        &self,
        mint: &Pubkey,
    ) -> Result<Vec<TokenAccountBalance>, RpcError> {
        self.record("getTokenLargestAccounts")?;
        Ok(self
            .largest
            .lock()
            .unwrap()
            .get(mint)
            .cloned()
            .unwrap_or_default())
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
            .filter(|(_, account)| {
                filters.iter().all(|f| {
                    account
                        .data
                        .get(f.offset..f.offset + f.bytes.len())
                        .is_some_and(|window| window == f.bytes.as_slice())
                })
            })
            .map(|(key, account)| (*key, account.clone()))
            .collect();
        found.sort_by_key(|(key, _)| *key);
        Ok(found)
    }
}

// ---------------------------------------------------------------------------
// Registry A
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockSns {
    keys: Mutex<HashMap<String, Pubkey>>,
    states: Mutex<HashMap<Pubkey, NameRegistryState>>,
    owned: Mutex<Vec<Pubkey>>,
    names: Mutex<Option<Vec<Option<String>>>>,
    failing: Mutex<Vec<&'static str>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockSns {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put_domain(&self, domain: &str, name_account: Pubkey, owner: Pubkey) {
        self.keys
            .lock()
            .unwrap()
            .insert(domain.to_owned(), name_account);
        self.states.lock().unwrap().insert(
            name_account,
            NameRegistryState {
                parent_name: key(200),
                owner,
                class: Pubkey::default(),
                data: Vec::new(),
            },
        );
    }

    /// Known key without a registry entry.
    pub fn put_key_only(&self, domain: &str, name_account: Pubkey) {
        self.keys
            .lock()
            .unwrap()
            .insert(domain.to_owned(), name_account);
    }

    pub fn set_owned(&self, keys: Vec<Pubkey>) {
        *self.owned.lock().unwrap() = keys;
    }

    /// Names returned by the reverse lookup; defaults to one `None` per key.
    pub fn set_names(&self, names: Vec<Option<String>>) {
        *self.names.lock().unwrap() = Some(names);
    }

    pub fn fail(&self, method: &'static str) {
        self.failing.lock().unwrap().push(method);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> Result<(), RegistryError> {
        self.calls.lock().unwrap().push(method);
        if self.failing.lock().unwrap().contains(&method) {
            return Err(RegistryError::Rpc(transport_error()));
        }
        Ok(())
    }
}

#[async_trait]
impl SnsRegistryClient for MockSns {
    fn domain_key(&self, domain: &str) -> Result<Pubkey, RegistryError> {
        self.record("domain_key")?;
        self.keys
            .lock()
            .unwrap()
            .get(domain)
            .copied()
            .ok_or_else(|| RegistryError::InvalidDomain(domain.to_owned()))
    }

    async fn registry_state(
        &self,
        name_account: &Pubkey,
    ) -> Result<NameRegistryState, RegistryError> {
        self.record("registry_state")?;
        self.states
            .lock()
            .unwrap()
            .get(name_account)
            .cloned()
            .ok_or(RegistryError::AccountNotFound {
                account: *name_account,
            })
    }

    async fn owned_domains(&self, _owner: &Pubkey) -> Result<Vec<Pubkey>, RegistryError> {
        self.record("owned_domains")?;
        Ok(self.owned.lock().unwrap().clone())
    }

    async fn reverse_lookup_batch(
        &self,
        name_accounts: &[Pubkey],
    ) -> Result<Vec<Option<String>>, RegistryError> {
        self.record("reverse_lookup_batch")?;
        Ok(self
            .names
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| vec![None; name_accounts.len()]))
    }
}

// ---------------------------------------------------------------------------
// Registry B
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct MockTld {
    owners: Mutex<HashMap<String, Pubkey>>,
    owned: Mutex<Vec<TldDomain>>,
    failing: Mutex<bool>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockTld {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put_owner(&self, domain: &str, owner: Pubkey) {
        self.owners.lock().unwrap().insert(domain.to_owned(), owner);
    }

    pub fn set_owned(&self, domains: Vec<TldDomain>) {
        *self.owned.lock().unwrap() = domains;
    }

    pub fn fail(&self) {
        *self.failing.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> Result<(), RegistryError> {
        self.calls.lock().unwrap().push(method);
        if *self.failing.lock().unwrap() {
            return Err(RegistryError::Internal("tld parser unavailable".to_owned()));
        }
        Ok(())
    }
}

#[async_trait]
impl TldRegistryClient for MockTld {
    async fn owner_of(&self, domain: &str) -> Result<Option<Pubkey>, RegistryError> {
        self.record("owner_of")?;
        Ok(self.owners.lock().unwrap().get(domain).copied())
    }

    async fn owned_domains(&self, _owner: &Pubkey) -> Result<Vec<TldDomain>, RegistryError> {
        self.record("owned_domains")?;
        Ok(self.owned.lock().unwrap().clone())
    }
}

// ---------------------------------------------------------------------------
// Observer
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingObserver {
    derived: Mutex<Vec<(String, Pubkey)>>,
    failures: Mutex<Vec<(String, String)>>,
}

impl RecordingObserver {
    pub fn derived(&self) -> Vec<(String, Pubkey)> {
        self.derived.lock().unwrap().clone()
    }

    pub fn failures(&self) -> Vec<(String, String)> {
        self.failures.lock().unwrap().clone()
    }
}

impl ResolutionObserver for RecordingObserver {
    fn registry_key_derived(&self, domain: &str, name_account: &Pubkey) {
        self.derived
            .lock()
            .unwrap()
            .push((domain.to_owned(), *name_account));
    }

    fn resolution_failed(&self, domain: &str, error: &DomainError) {
        self.failures
            .lock()
            .unwrap()
            .push((domain.to_owned(), error.to_string()));
    }
}

// ---------------------------------------------------------------------------
// Harness
// ---------------------------------------------------------------------------

pub struct Harness {
    pub rpc: Arc<MockRpc>,
    pub sns: Arc<MockSns>,
    pub tld: Arc<MockTld>,
    pub observer: Arc<RecordingObserver>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            rpc: MockRpc::new(),
            sns: MockSns::new(),
            tld: MockTld::new(),
            observer: Arc::new(RecordingObserver::default()),
        }
    }

    pub fn builder(&self) -> DomainResolverBuilder {
        DomainResolverBuilder::new()
            .with_rpc(self.rpc.clone())
            .with_sns_registry(self.sns.clone())
            .with_tld_registry(self.tld.clone())
            .with_observer(self.observer.clone())
    }

    pub fn resolver(&self) -> Arc<dyn DomainResolverClient> {
        self.builder().build().unwrap()
    }

    /// Tokenize `name_account` and give its NFT to `holder_owner`.
    pub fn tokenize(&self, name_account: &Pubkey, holder: Pubkey, holder_owner: &Pubkey) {
        let mint = mint_of(name_account);
        self.rpc.put_parsed(mint, mint_account("1", true));
        self.rpc
            .put_largest(mint, vec![balance(key(250), "0"), balance(holder, "1")]);
        self.rpc.put_account(
            holder,
            TOKEN_PROGRAM,
            token_account_data(&mint, holder_owner, 1),
        );
    }
}
