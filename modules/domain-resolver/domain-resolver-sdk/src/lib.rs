//! Domain Resolver SDK
//!
//! This crate provides the public API for the `domain-resolver` module:
//!
//! - [`DomainResolverClient`] - Public API trait for consumers
//! - [`SolanaRpcClient`] - RPC capability the resolver is built on
//! - [`SnsRegistryClient`], [`TldRegistryClient`] - Registry capabilities
//! - [`Pubkey`] - Account identifier and program-derived address helpers
//! - [`DomainRecord`], [`Resolution`], [`RegistryKind`] - Domain models
//! - [`DomainResolverError`], [`RegistryError`], [`RpcError`] - Error types
//!
//! ## Usage
//!
//! ```ignore
//! use domain_resolver_sdk::DomainResolverClient;
//!
//! let owner = resolver.resolve("bonfida.sol").await.owner();
//! let domains = resolver.domains_owned_by(Some(&wallet)).await?;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;
pub mod plugin_api;
pub mod pubkey;
pub mod rpc;

// Re-export main types at crate root
pub use api::DomainResolverClient;
pub use error::{DomainResolverError, RegistryError, RpcError};
pub use models::{DomainRecord, NameRegistryState, RegistryKind, Resolution, TldDomain};
pub use plugin_api::{SnsRegistryClient, TldRegistryClient};
pub use pubkey::{
    MAX_SEED_LEN, MAX_SEEDS, PUBKEY_BYTES, ParsePubkeyError, Pubkey, PubkeyError,
    find_program_address, pubkey_from_slice,
};
pub use rpc::{
    Account, AccountData, MemcmpFilter, ParsedAccount, ParsedAccountData, SolanaRpcClient,
    TokenAccountBalance,
};
