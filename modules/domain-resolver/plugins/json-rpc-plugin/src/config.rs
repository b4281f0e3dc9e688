//! Configuration for the JSON-RPC plugin.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Default public mainnet endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.mainnet-beta.solana.com";

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JsonRpcPluginConfig {
    /// JSON-RPC endpoint URL.
    pub endpoint: String,

    /// Commitment level attached to every request.
    pub commitment: Commitment,

    /// Upper bound for a single request, including reading the body.
    ///
    /// Humantime string such as `"30s"`. Unset means requests wait as long
    /// as the node takes.
    #[serde(deserialize_with = "humantime_option")]
    pub request_timeout: Option<Duration>,

    /// Accept plain `http://` endpoints. Intended for local validators and tests.
    pub allow_insecure_http: bool,
}

impl Default for JsonRpcPluginConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            commitment: Commitment::default(),
            request_timeout: None,
            allow_insecure_http: false,
        }
    }
}

/// Bank state a query is evaluated against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processed => "processed",
            Self::Confirmed => "confirmed",
            Self::Finalized => "finalized",
        }
    }
}

fn humantime_option<'de, D>(d: D) -> Result<Option<Duration>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d)?
        .map(|raw| humantime::parse_duration(&raw).map_err(serde::de::Error::custom))
        .transpose()
}
