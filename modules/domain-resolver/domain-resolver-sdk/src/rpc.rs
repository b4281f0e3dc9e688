//! RPC capability the resolver is built on.
//!
//! Implementations talk to a Solana node. The resolver only ever reads
//! account state; it never submits transactions.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::error::RpcError;
use crate::pubkey::Pubkey;

/// Raw account state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub lamports: u64,
    /// Program that owns the account.
    pub owner: Pubkey,
    pub executable: bool,
    pub data: Vec<u8>,
}

/// Account data as returned by a parsed-account query.
///
/// Nodes return structured JSON only for account types they know how to
/// parse (token mints, token accounts, ...); everything else comes back raw.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountData {
    Binary(Vec<u8>),
    Parsed(ParsedAccountData),
}

/// Structured account contents produced by the node's account parsers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAccountData {
    /// Name of the program whose parser produced the data, e.g. `spl-token`.
    pub program: String,
    /// Parser output; for token mints this is `{"type": "mint", "info": {...}}`.
    pub parsed: serde_json::Value,
    /// Size of the raw account data in bytes.
    pub space: u64,
}

/// Account state from a parsed-account query.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedAccount {
    pub lamports: u64,
    pub owner: Pubkey,
    pub data: AccountData,
}

/// One entry of a mint's largest token accounts.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenAccountBalance {
    /// Token account holding the balance.
    #[serde_as(as = "DisplayFromStr")]
    pub address: Pubkey,
    /// Raw amount as a decimal string, without decimals applied.
    pub amount: String,
    pub decimals: u8,
    #[serde(default)]
    pub ui_amount_string: Option<String>,
}

/// Byte comparison filter for program account scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemcmpFilter {
    /// Offset into the account data.
    pub offset: usize,
    /// Bytes expected at `offset`.
    pub bytes: Vec<u8>,
}

impl MemcmpFilter {
    #[must_use]
    pub fn new(offset: usize, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            offset,
            bytes: bytes.into(),
        }
    }

    /// Filter matching a 32-byte key at `offset`.
    #[must_use]
    pub fn pubkey(offset: usize, key: &Pubkey) -> Self {
        Self::new(offset, key.to_bytes())
    }
}

/// Read-only RPC operations used by the resolver and the registry plugins.
#[async_trait]
pub trait SolanaRpcClient: Send + Sync {
    /// Fetch an account with node-side parsing enabled.
    ///
    /// Returns `Ok(None)` if the account does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RpcError` if the node cannot be reached or answers with an error.
    async fn get_parsed_account(&self, address: &Pubkey)
    -> Result<Option<ParsedAccount>, RpcError>;

    /// Fetch an account's raw data.
    ///
    /// Returns `Ok(None)` if the account does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RpcError` if the node cannot be reached or answers with an error.
    async fn get_account(&self, address: &Pubkey) -> Result<Option<Account>, RpcError>;

    /// Fetch the largest token accounts of a mint, largest first.
    ///
    /// # Errors
    ///
    /// Returns `RpcError` if the node cannot be reached or answers with an error.
    async fn get_token_largest_accounts(
        &self,
        mint: &Pubkey,
    ) -> Result<Vec<TokenAccountBalance>, RpcError>;

    /// Fetch several accounts in one request.
    ///
    /// The output is index-aligned with `addresses`; missing accounts are `None`.
    ///
    /// # Errors
    ///
    /// Returns `RpcError` if the node cannot be reached or answers with an error.
    async fn get_multiple_accounts(
        &self,
        addresses: &[Pubkey],
    ) -> Result<Vec<Option<Account>>, RpcError>;

    /// Scan all accounts owned by `program` that match every filter.
    ///
    /// # Errors
    ///
    /// Returns `RpcError` if the node cannot be reached or answers with an error.
    async fn get_program_accounts(
        &self,
        program: &Pubkey,
        filters: &[MemcmpFilter],
    ) -> Result<Vec<(Pubkey, Account)>, RpcError>;
}
