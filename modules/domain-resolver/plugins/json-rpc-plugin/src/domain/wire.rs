//! JSON-RPC wire types and their conversion into SDK models.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use domain_resolver_sdk::{
    Account, AccountData, MemcmpFilter, ParsedAccount, ParsedAccountData, Pubkey, RpcError,
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use serde_with::{DisplayFromStr, serde_as};

pub const JSONRPC_VERSION: &str = "2.0";

/// Largest batch accepted by `getMultipleAccounts`.
pub const MAX_MULTIPLE_ACCOUNTS: usize = 100;

#[derive(Debug, Serialize)]
pub struct JsonRpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'a str,
    pub params: Value,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<JsonRpcErrorObject>,
}

#[derive(Debug, Deserialize)]
pub struct JsonRpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// `{"context": {...}, "value": ...}` wrapper used by most account methods.
#[derive(Debug, Deserialize)]
pub struct WithContext<T> {
    pub value: T,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct UiAccount {
    pub lamports: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub owner: Pubkey,
    #[serde(default)]
    pub executable: bool,
    pub data: UiAccountData,
}

/// Account data as encoded by the node.
///
/// Binary encodings arrive as `[payload, encoding]`; parsed encodings as an
/// object produced by one of the node's account parsers.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum UiAccountData {
    Binary(String, String),
    Parsed(ParsedAccountData),
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct KeyedAccount {
    #[serde_as(as = "DisplayFromStr")]
    pub pubkey: Pubkey,
    pub account: UiAccount,
}

fn decode_binary(payload: &str, encoding: &str) -> Result<Vec<u8>, RpcError> {
    match encoding {
        "base64" => STANDARD
            .decode(payload)
            .map_err(|e| RpcError::InvalidResponse(format!("bad base64 account data: {e}"))),
        "base58" => bs58::decode(payload)
            .into_vec()
            .map_err(|e| RpcError::InvalidResponse(format!("bad base58 account data: {e}"))),
        other => Err(RpcError::InvalidResponse(format!(
            "unsupported account data encoding '{other}'"
        ))),
    }
}

impl UiAccount {
    /// Raw account; parsed payloads are rejected.
    ///
    /// # Errors
    ///
    /// `InvalidResponse` for parsed data or an undecodable binary payload.
    pub fn into_account(self) -> Result<Account, RpcError> {
        let data = match self.data {
            UiAccountData::Binary(payload, encoding) => decode_binary(&payload, &encoding)?,
            UiAccountData::Parsed(parsed) => {
                return Err(RpcError::InvalidResponse(format!(
                    "expected binary account data, got parsed '{}' data",
                    parsed.program
                )));
            }
        };
        Ok(Account {
            lamports: self.lamports,
            owner: self.owner,
            executable: self.executable,
            data,
        })
    }

    /// Account in either representation.
    ///
    /// # Errors
    ///
    /// `InvalidResponse` if a binary payload cannot be decoded.
    pub fn into_parsed_account(self) -> Result<ParsedAccount, RpcError> {
        let data = match self.data {
            UiAccountData::Binary(payload, encoding) => {
                AccountData::Binary(decode_binary(&payload, &encoding)?)
            }
            UiAccountData::Parsed(parsed) => AccountData::Parsed(parsed),
        };
        Ok(ParsedAccount {
            lamports: self.lamports,
            owner: self.owner,
            data,
        })
    }
}

/// `getProgramAccounts` filter entries; filter bytes travel base58-encoded.
#[must_use]
pub fn memcmp_filters(filters: &[MemcmpFilter]) -> Vec<Value> {
    filters
        .iter()
        .map(|f| {
            json!({
                "memcmp": {
                    "offset": f.offset,
                    "bytes": bs58::encode(&f.bytes).into_string(),
                }
            })
        })
        .collect()
}
