#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Directory Plugin
//!
//! Serves the `UserDirectory` and `SiteConfig` collaborators of the Active
//! Directory `AuthN` module from static configuration. Meant for development,
//! demos and tests where no real user store is available.
//!
//! ## Configuration
//!
//! ```yaml
//! super_user_name: "admin"
//! users:
//!   - id: "11111111-6a88-4768-9dfc-6bcd5187d9ed"
//!     user_name: "admin"
//!     email: "admin@corp.example"
//!   - id: "22222222-6a88-4768-9dfc-6bcd5187d9ed"
//!     user_name: "CORP\\bob"
//! ```
//!
//! Any key can be overridden with an `AD_AUTHN__`-prefixed environment
//! variable, e.g. `AD_AUTHN__SUPER_USER_NAME=root`.

pub mod config;
pub mod domain;

pub use domain::Service;
