//! Active Directory `AuthN` SDK
//!
//! This crate provides the public contracts for the `ad_authn` module:
//!
//! - [`AuthenticationService`] - Capability trait the host invokes
//! - [`UserDirectory`], [`SiteConfig`], [`RequestIdentityContext`] - Collaborators the
//!   resolver consumes
//! - [`User`], [`LocalUser`], [`ExternalIdentityUser`], [`SiteSettings`] - Models
//! - [`RequestIdentity`] - Concrete per-request identity context
//! - [`AuthnCollaboratorError`] - Error type returned by collaborators
//!
//! ## Usage
//!
//! The host builds a request context from the identity asserted by the web server
//! and asks a per-request resolver who the caller is:
//!
//! ```ignore
//! use ad_authn_sdk::{AuthenticationService, RequestIdentity};
//!
//! let ctx = RequestIdentity::builder()
//!     .ambient_identity_name("CORP\\alice")
//!     .build();
//!
//! let mut authn = factory.for_request();
//! authn.set_authenticated_user_for_request(&ctx, candidate.as_ref()).await?;
//! let user = authn.get_authenticated_user(&ctx).await?;
//! ```

pub mod api;
pub mod collaborators;
pub mod error;
pub mod models;
pub mod request;

// Re-export main types at crate root
pub use api::AuthenticationService;
pub use collaborators::{RequestIdentityContext, SiteConfig, UserDirectory};
pub use error::AuthnCollaboratorError;
pub use models::{ExternalIdentityUser, LocalUser, SiteSettings, User};
pub use request::{RequestIdentity, RequestIdentityBuilder};
