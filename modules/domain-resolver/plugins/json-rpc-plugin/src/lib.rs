//! Solana JSON-RPC Plugin
//!
//! Implements [`SolanaRpcClient`](domain_resolver_sdk::SolanaRpcClient) over
//! JSON-RPC 2.0 with a hyper-based HTTPS client.
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   json_rpc_plugin:
//!     config:
//!       endpoint: "https://api.mainnet-beta.solana.com"
//!       commitment: confirmed
//!       request_timeout: "30s"
//! ```
//!
//! Plain `http://` endpoints are rejected unless `allow_insecure_http` is set.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::{Commitment, JsonRpcPluginConfig};
pub use domain::{DomainError, Service as JsonRpcService};
