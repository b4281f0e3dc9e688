//! Error types for the domain resolver module.

use thiserror::Error;

use crate::models::RegistryKind;
use crate::pubkey::Pubkey;

/// Errors raised by a [`SolanaRpcClient`](crate::SolanaRpcClient).
#[derive(Debug, Clone, Error)]
pub enum RpcError {
    /// The request never produced an HTTP response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The request did not complete within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The node answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The node answered with a JSON-RPC error object.
    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    /// The response could not be decoded.
    #[error("invalid RPC response: {0}")]
    InvalidResponse(String),
}

/// Errors raised by the registry capabilities.
#[derive(Debug, Clone, Error)]
pub enum RegistryError {
    /// The domain name cannot be mapped to a registry key.
    #[error("invalid domain name: {0}")]
    InvalidDomain(String),

    /// The registry account does not exist on chain.
    #[error("account not found: {account}")]
    AccountNotFound { account: Pubkey },

    /// The account exists but its data does not match the expected layout.
    #[error("invalid account data for {account}: {reason}")]
    InvalidAccountData { account: Pubkey, reason: String },

    #[error(transparent)]
    Rpc(#[from] RpcError),

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Errors surfaced by domain enumeration.
///
/// Resolution never fails: see [`Resolution`](crate::Resolution).
#[derive(Debug, Clone, Error)]
pub enum DomainResolverError {
    /// A registry query failed; no partial result is returned.
    #[error("{registry} registry query failed: {source}")]
    Registry {
        registry: RegistryKind,
        #[source]
        source: RegistryError,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}
