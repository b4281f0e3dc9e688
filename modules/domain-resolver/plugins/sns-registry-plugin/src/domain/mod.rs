//! Domain layer for the SNS registry plugin.

pub mod client;
pub mod derivation;
pub mod service;
pub mod state;

pub use service::Service;
