//! Domain layer for the JSON-RPC plugin.

pub mod client;
pub mod error;
pub mod service;
pub mod wire;

pub use error::DomainError;
pub use service::Service;
