//! JSON-RPC transport over a pooled hyper client.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use bytes::Bytes;
use domain_resolver_sdk::RpcError;
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{Method, Request, Uri};
use http_body_util::{BodyExt, Full};
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::Client;
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::rt::{TokioExecutor, TokioTimer};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::JsonRpcPluginConfig;
use crate::domain::error::DomainError;
use crate::domain::wire::{JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse};

/// Longest slice of a non-2xx body kept in the error.
const MAX_ERROR_BODY: usize = 512;

type HyperClient = Client<HttpsConnector<HttpConnector>, Full<Bytes>>;

/// JSON-RPC plugin service.
///
/// Cheap to share behind an `Arc`; the underlying connection pool is reused
/// across requests.
pub struct Service {
    client: HyperClient,
    endpoint: Uri,
    pub(crate) cfg: JsonRpcPluginConfig,
    next_id: AtomicU64,
}

impl Service {
    /// Build a service from configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidEndpoint` if the endpoint is not an absolute URL
    /// - `InsecureEndpoint` for `http://` endpoints unless explicitly allowed
    /// - `Tls` if the TLS connector cannot be initialised
    pub fn new(cfg: JsonRpcPluginConfig) -> Result<Self, DomainError> {
        let endpoint = parse_endpoint(&cfg)?;

        if cfg.allow_insecure_http {
            tracing::warn!(
                endpoint = %endpoint,
                "insecure HTTP enabled for JSON-RPC endpoint; use only with local validators"
            );
        }

        let provider = rustls::crypto::CryptoProvider::get_default()
            .cloned()
            .unwrap_or_else(|| Arc::new(rustls::crypto::aws_lc_rs::default_provider()));
        let builder = hyper_rustls::HttpsConnectorBuilder::new()
            .with_provider_and_webpki_roots(provider)
            .map_err(|e| DomainError::Tls(e.to_string()))?;
        let https = if cfg.allow_insecure_http {
            builder.https_or_http().enable_all_versions().build()
        } else {
            builder.https_only().enable_all_versions().build()
        };

        let client = Client::builder(TokioExecutor::new())
            .pool_timer(TokioTimer::new())
            .build::<_, Full<Bytes>>(https);

        tracing::info!(
            endpoint = %endpoint,
            commitment = cfg.commitment.as_str(),
            "JSON-RPC plugin initialized"
        );

        Ok(Self {
            client,
            endpoint,
            cfg,
            next_id: AtomicU64::new(1),
        })
    }

    #[must_use]
    pub fn config(&self) -> &JsonRpcPluginConfig {
        &self.cfg
    }

    /// Perform one JSON-RPC call and decode its `result`.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, RpcError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let payload = serde_json::to_vec(&JsonRpcRequest {
            jsonrpc: JSONRPC_VERSION,
            id,
            method,
            params,
        })
        .map_err(|e| RpcError::Transport(format!("failed to encode request: {e}")))?;

        tracing::debug!(method, id, "sending JSON-RPC request");

        let exchange = self.exchange(payload);
        let body = match self.cfg.request_timeout {
            Some(limit) => tokio::time::timeout(limit, exchange)
                .await
                .map_err(|_| RpcError::Timeout(limit))??,
            None => exchange.await?,
        };

        let response: JsonRpcResponse<T> = serde_json::from_slice(&body)
            .map_err(|e| RpcError::InvalidResponse(format!("{method}: {e}")))?;

        if let Some(err) = response.error {
            tracing::debug!(method, id, code = err.code, "JSON-RPC error response");
            return Err(RpcError::JsonRpc {
                code: err.code,
                message: err.message,
            });
        }

        response
            .result
            .ok_or_else(|| RpcError::InvalidResponse(format!("{method}: missing result")))
    }

    async fn exchange(&self, payload: Vec<u8>) -> Result<Bytes, RpcError> {
        let request = Request::builder()
            .method(Method::POST)
            .uri(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(Full::new(Bytes::from(payload)))
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let response = self
            .client
            .request(request)
            .await
            .map_err(|e| RpcError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .into_body()
            .collect()
            .await
            .map_err(|e| RpcError::Transport(format!("failed to read response body: {e}")))?
            .to_bytes();

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body);
            return Err(RpcError::HttpStatus {
                status: status.as_u16(),
                body: text.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        Ok(body)
    }
}

fn parse_endpoint(cfg: &JsonRpcPluginConfig) -> Result<Uri, DomainError> {
    let invalid = |reason: &str| DomainError::InvalidEndpoint {
        endpoint: cfg.endpoint.clone(),
        reason: reason.to_owned(),
    };

    let uri: Uri = cfg
        .endpoint
        .parse()
        .map_err(|e: http::uri::InvalidUri| invalid(&e.to_string()))?;
    if uri.host().is_none() {
        return Err(invalid("missing host"));
    }

    match uri.scheme_str() {
        Some("https") => Ok(uri),
        Some("http") if cfg.allow_insecure_http => Ok(uri),
        Some("http") => Err(DomainError::InsecureEndpoint(cfg.endpoint.clone())),
        _ => Err(invalid("scheme must be http or https")),
    }
}
