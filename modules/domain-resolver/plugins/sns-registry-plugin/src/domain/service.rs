//! Domain service for the SNS registry plugin.

use std::sync::Arc;

use domain_resolver_sdk::SolanaRpcClient;

use crate::config::SnsRegistryPluginConfig;

/// SNS registry service.
///
/// Stateless apart from its configuration; every call goes to the RPC client.
pub struct Service {
    pub(crate) rpc: Arc<dyn SolanaRpcClient>,
    pub(crate) cfg: SnsRegistryPluginConfig,
}

impl Service {
    #[must_use]
    pub fn new(rpc: Arc<dyn SolanaRpcClient>, cfg: SnsRegistryPluginConfig) -> Self {
        Self { rpc, cfg }
    }

    /// Service with the mainnet program ids.
    #[must_use]
    pub fn with_defaults(rpc: Arc<dyn SolanaRpcClient>) -> Self {
        Self::new(rpc, SnsRegistryPluginConfig::default())
    }

    #[must_use]
    pub fn config(&self) -> &SnsRegistryPluginConfig {
        &self.cfg
    }
}
