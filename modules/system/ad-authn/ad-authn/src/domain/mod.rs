//! Domain layer for the Active Directory `AuthN` module.

pub mod client;
pub mod service;

pub use service::AuthResolver;
