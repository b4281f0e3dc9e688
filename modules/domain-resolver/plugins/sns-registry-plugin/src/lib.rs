//! SNS Registry Plugin
//!
//! Implements [`SnsRegistryClient`](domain_resolver_sdk::SnsRegistryClient)
//! for `.sol` domains on top of any
//! [`SolanaRpcClient`](domain_resolver_sdk::SolanaRpcClient).
//!
//! ## Configuration
//!
//! ```yaml
//! modules:
//!   sns_registry_plugin:
//!     config:
//!       name_program_id: "namesLPneVptA9Z5rqUDD9tMTWEJwofgaYwp8cawRkX"
//!       root_domain: "58PwtjSDuFHuUkYjH9BYnnQKHfwo9reZhC2zMJv9JPkx"
//!       reverse_lookup_class: "33m47vH6Eav6jr5Ry86XjhRft2jRBLDnDgPSHoquXi2Z"
//! ```
//!
//! All keys are optional and default to the mainnet deployment.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;

pub use config::SnsRegistryPluginConfig;
pub use domain::Service as SnsRegistryService;
