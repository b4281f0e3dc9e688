//! Domain Resolver Module
//!
//! Resolves Solana domain names to their owning account and lists the
//! domains an account owns.
//!
//! Names ending with `.sol` are looked up in the SNS name registry, honouring
//! tokenized (NFT-wrapped) domains. Every other name is delegated to the
//! top-level-domain registry. Enumeration queries both registries.
//!
//! The service is assembled from collaborators defined in
//! `domain_resolver_sdk`:
//!
//! ```ignore
//! let resolver = DomainResolverBuilder::new()
//!     .with_rpc(rpc.clone())
//!     .with_sns_registry(Arc::new(SnsRegistryService::with_defaults(rpc)))
//!     .with_tld_registry(tld)
//!     .build()?;
//!
//! let owner = resolver.resolve("bonfida.sol").await.owner();
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod builder;
pub mod config;
pub mod domain;

pub use builder::{BuildError, DomainResolverBuilder};
pub use config::{ConfigError, DomainResolverConfig, load_figment, module_config_or_default};
pub use domain::{
    DomainError, DomainResolverLocalClient, ResolutionObserver, Service, TracingObserver,
};
