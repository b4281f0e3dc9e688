//! Domain errors for the domain resolver.

use domain_resolver_sdk::{
    DomainResolverError, PubkeyError, RegistryError, RegistryKind, RpcError,
};

use super::layout::LayoutError;

#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("{registry} registry query failed: {source}")]
    Registry {
        registry: RegistryKind,
        #[source]
        source: RegistryError,
    },

    #[error("RPC call failed: {0}")]
    Rpc(#[from] RpcError),

    #[error("address derivation failed: {0}")]
    Derivation(#[from] PubkeyError),

    #[error("invalid token account: {0}")]
    Layout(#[from] LayoutError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub(crate) fn sns(source: RegistryError) -> Self {
        Self::Registry {
            registry: RegistryKind::Sns,
            source,
        }
    }

    pub(crate) fn all_domains(source: RegistryError) -> Self {
        Self::Registry {
            registry: RegistryKind::AllDomains,
            source,
        }
    }

    /// Whether the error means the domain has no on-chain record.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Registry {
                source: RegistryError::AccountNotFound { .. },
                ..
            }
        )
    }
}

impl From<DomainError> for DomainResolverError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Registry { registry, source } => {
                DomainResolverError::Registry { registry, source }
            }
            DomainError::Rpc(source) => DomainResolverError::Registry {
                registry: RegistryKind::Sns,
                source: RegistryError::Rpc(source),
            },
            other @ (DomainError::Derivation(_) | DomainError::Layout(_)) => {
                DomainResolverError::Internal(other.to_string())
            }
            DomainError::Internal(msg) => DomainResolverError::Internal(msg),
        }
    }
}
