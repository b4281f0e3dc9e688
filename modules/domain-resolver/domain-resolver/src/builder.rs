//! Assembly of the resolver from its collaborators.

use std::sync::Arc;

use domain_resolver_sdk::{
    DomainResolverClient, SnsRegistryClient, SolanaRpcClient, TldRegistryClient,
};

use crate::config::DomainResolverConfig;
use crate::domain::{DomainResolverLocalClient, ResolutionObserver, Service, TracingObserver};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("missing collaborator: {0}")]
    MissingCollaborator(&'static str),

    #[error("sns_suffix must not be empty")]
    EmptySuffix,
}

/// Builder for [`DomainResolverClient`] instances.
///
/// The RPC client and both registries are required; the observer defaults
/// to [`TracingObserver`] and the configuration to its defaults.
#[derive(Default)]
pub struct DomainResolverBuilder {
    rpc: Option<Arc<dyn SolanaRpcClient>>,
    sns: Option<Arc<dyn SnsRegistryClient>>,
    tld: Option<Arc<dyn TldRegistryClient>>,
    observer: Option<Arc<dyn ResolutionObserver>>,
    cfg: DomainResolverConfig,
}

impl DomainResolverBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rpc(mut self, rpc: Arc<dyn SolanaRpcClient>) -> Self {
        self.rpc = Some(rpc);
        self
    }

    #[must_use]
    pub fn with_sns_registry(mut self, sns: Arc<dyn SnsRegistryClient>) -> Self {
        self.sns = Some(sns);
        self
    }

    #[must_use]
    pub fn with_tld_registry(mut self, tld: Arc<dyn TldRegistryClient>) -> Self {
        self.tld = Some(tld);
        self
    }

    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn ResolutionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    #[must_use]
    pub fn with_config(mut self, cfg: DomainResolverConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Build the resolver service.
    ///
    /// # Errors
    ///
    /// - `MissingCollaborator` if the RPC client or a registry was not set
    /// - `EmptySuffix` if the configured SNS suffix is empty
    pub fn build_service(self) -> Result<Service, BuildError> {
        if self.cfg.sns_suffix.is_empty() {
            return Err(BuildError::EmptySuffix);
        }
        let rpc = self.rpc.ok_or(BuildError::MissingCollaborator("rpc"))?;
        let sns = self
            .sns
            .ok_or(BuildError::MissingCollaborator("sns_registry"))?;
        let tld = self
            .tld
            .ok_or(BuildError::MissingCollaborator("tld_registry"))?;
        let observer = self
            .observer
            .unwrap_or_else(|| Arc::new(TracingObserver));

        tracing::info!(
            sns_suffix = %self.cfg.sns_suffix,
            tokenizer_program_id = %self.cfg.tokenizer_program_id,
            "Domain resolver initialized"
        );

        Ok(Service::new(rpc, sns, tld, observer, self.cfg))
    }

    /// Build the resolver behind its public API trait.
    ///
    /// # Errors
    ///
    /// - `MissingCollaborator` if the RPC client or a registry was not set
    /// - `EmptySuffix` if the configured SNS suffix is empty
    pub fn build(self) -> Result<Arc<dyn DomainResolverClient>, BuildError> {
        let svc = Arc::new(self.build_service()?);
        Ok(Arc::new(DomainResolverLocalClient::new(svc)))
    }
}
