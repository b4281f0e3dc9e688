//! Local (in-process) client for the domain resolver.

use std::sync::Arc;

use async_trait::async_trait;
use domain_resolver_sdk::{
    DomainRecord, DomainResolverClient, DomainResolverError, Pubkey, Resolution,
};

use super::{DomainError, Service};

/// Local client wrapping the resolver service.
///
/// Returned by [`DomainResolverBuilder::build`](crate::DomainResolverBuilder::build).
pub struct DomainResolverLocalClient {
    svc: Arc<Service>,
}

impl DomainResolverLocalClient {
    #[must_use]
    pub fn new(svc: Arc<Service>) -> Self {
        Self { svc }
    }
}

fn log_and_convert(op: &str, e: DomainError) -> DomainResolverError {
    tracing::error!(operation = op, error = ?e, "domain-resolver call failed");
    e.into()
}

#[async_trait]
impl DomainResolverClient for DomainResolverLocalClient {
    async fn resolve(&self, domain: &str) -> Resolution {
        self.svc.resolve(domain).await
    }

    async fn domains_owned_by(
        &self,
        owner: Option<&Pubkey>,
    ) -> Result<Vec<DomainRecord>, DomainResolverError> {
        self.svc
            .domains_owned_by(owner)
            .await
            .map_err(|e| log_and_convert("domains_owned_by", e))
    }
}
