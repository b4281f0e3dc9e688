//! Configuration for the domain resolver.
//!
//! Every crate in this workspace reads its settings from the same layered
//! document, one section per module:
//!
//! ```yaml
//! modules:
//!   domain_resolver:
//!     config:
//!       sns_suffix: ".sol"
//!   sns_registry_plugin:
//!     config: {}
//!   json_rpc_plugin:
//!     config:
//!       endpoint: "https://api.mainnet-beta.solana.com"
//! ```
//!
//! Missing sections fall back to defaults; present but malformed sections
//! are errors.

use std::path::Path;

use domain_resolver_sdk::Pubkey;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_with::{DisplayFromStr, serde_as};

use crate::domain::tokenized::NAME_TOKENIZER_ID;

/// Module name of the resolver's own config section.
pub const MODULE_NAME: &str = "domain_resolver";

/// Prefix of environment overrides, e.g.
/// `SOL_RESOLVER__MODULES__JSON_RPC_PLUGIN__CONFIG__ENDPOINT`.
pub const ENV_PREFIX: &str = "SOL_RESOLVER__";

/// Configuration error for typed config operations.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config for module '{module}': {source}")]
    Load {
        module: String,
        #[source]
        source: Box<figment::Error>,
    },
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolver configuration.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DomainResolverConfig {
    /// Names ending with this suffix are resolved through the SNS registry.
    ///
    /// Matched byte-for-byte.
    pub sns_suffix: String,

    /// Program that wraps SNS domains into NFTs.
    #[serde_as(as = "DisplayFromStr")]
    pub tokenizer_program_id: Pubkey,
}

impl Default for DomainResolverConfig {
    fn default() -> Self {
        Self {
            sns_suffix: ".sol".to_owned(),
            tokenizer_program_id: NAME_TOKENIZER_ID,
        }
    }
}

/// Layered configuration: optional YAML file, then environment overrides.
#[must_use]
pub fn load_figment(path: Option<&Path>) -> Figment {
    let figment = match path {
        Some(path) => Figment::new().merge(Yaml::file(path)),
        None => Figment::new(),
    };
    figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Deserialize `modules.<module>.config` into `T`, or use defaults if missing.
///
/// - If the module is not present → returns `Ok(T::default())`
/// - If the module value is not an object → returns `Ok(T::default())`
/// - If the module has no "config" field → returns `Ok(T::default())`
/// - If "config" is present but invalid → returns `Err(ConfigError::InvalidConfig)`
///
/// # Errors
///
/// Returns `ConfigError` if the figment cannot be read or the section cannot be
/// deserialized.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    figment: &Figment,
    module: &str,
) -> Result<T, ConfigError> {
    let module_raw: serde_json::Value = match figment.extract_inner(&format!("modules.{module}")) {
        Ok(raw) => raw,
        Err(e) if e.missing() => return Ok(T::default()),
        Err(e) => {
            return Err(ConfigError::Load {
                module: module.to_owned(),
                source: Box::new(e),
            });
        }
    };

    let Some(obj) = module_raw.as_object() else {
        return Ok(T::default());
    };

    let Some(config_section) = obj.get("config") else {
        return Ok(T::default());
    };

    serde_json::from_value(config_section.clone()).map_err(|e| ConfigError::InvalidConfig {
        module: module.to_owned(),
        source: e,
    })
}
