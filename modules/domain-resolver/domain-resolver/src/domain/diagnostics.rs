//! Diagnostics emitted while resolving domains.

use domain_resolver_sdk::Pubkey;

use super::error::DomainError;

/// Observer notified at the diagnostic points of a resolution.
///
/// Notifications never influence the outcome.
pub trait ResolutionObserver: Send + Sync {
    /// The SNS registry entry of a non-tokenized domain is about to be read.
    fn registry_key_derived(&self, domain: &str, name_account: &Pubkey);

    /// A resolution step failed and the domain is reported as unresolved,
    /// including a registry entry that does not exist.
    fn resolution_failed(&self, domain: &str, error: &DomainError);
}

/// Default observer writing `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ResolutionObserver for TracingObserver {
    fn registry_key_derived(&self, domain: &str, name_account: &Pubkey) {
        tracing::debug!(domain, name_account = %name_account, "Derived SNS registry key");
    }

    fn resolution_failed(&self, domain: &str, error: &DomainError) {
        tracing::warn!(domain, error = %error, "Domain resolution failed");
    }
}
