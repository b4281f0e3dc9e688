//! Construction errors for the JSON-RPC plugin.
//!
//! Request-time failures are reported as `domain_resolver_sdk::RpcError`.

/// Errors raised while building the plugin from configuration.
#[derive(thiserror::Error, Debug)]
pub enum DomainError {
    #[error("invalid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("insecure endpoint '{0}' requires allow_insecure_http")]
    InsecureEndpoint(String),

    #[error("TLS setup failed: {0}")]
    Tls(String),
}
