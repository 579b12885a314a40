//! Active Directory `AuthN` Module
//!
//! Identity is established outside the application (integrated Windows /
//! Active Directory authentication in the web server). This module maps that
//! externally asserted identity onto an application user:
//!
//! - a matching record in the [`UserDirectory`](ad_authn_sdk::UserDirectory) wins;
//! - otherwise a synthetic, non-persisted external identity user is returned;
//! - the configured super-user can be impersonated for a request when the host
//!   offers it as the candidate before any user is bound.
//!
//! Sign-in and sign-out are no-ops.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;
pub mod factory;

pub use domain::AuthResolver;
pub use factory::AuthResolverFactory;
