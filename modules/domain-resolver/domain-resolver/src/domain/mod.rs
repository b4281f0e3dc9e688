//! Domain layer for the domain resolver.

pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod local_client;
pub mod service;
pub mod tokenized;

pub use diagnostics::{ResolutionObserver, TracingObserver};
pub use error::DomainError;
pub use local_client::DomainResolverLocalClient;
pub use service::Service;
