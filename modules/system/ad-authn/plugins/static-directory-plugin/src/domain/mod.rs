//! Domain layer for the static directory plugin.

pub mod client;
pub mod service;

pub use service::Service;
