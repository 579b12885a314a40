//! Collaborator traits consumed by the resolver.
//!
//! Hosts provide implementations of these; the resolver holds the directory
//! and configuration as shared trait objects and receives the request context
//! explicitly on every call.

use async_trait::async_trait;

use crate::error::AuthnCollaboratorError;
use crate::models::{LocalUser, SiteSettings, User};

/// Local user store lookup.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a local user by name.
    ///
    /// # Errors
    ///
    /// Only backend failures are errors. An unknown name is `Ok(None)`.
    async fn find_by_name(&self, name: &str) -> Result<Option<LocalUser>, AuthnCollaboratorError>;
}

/// Site configuration provider.
#[async_trait]
pub trait SiteConfig: Send + Sync {
    /// Read the current site settings.
    ///
    /// # Errors
    ///
    /// `SiteConfigUnavailable` if the configuration cannot be read.
    async fn get_site_settings(&self) -> Result<SiteSettings, AuthnCollaboratorError>;
}

/// Read-only view of one request's identity state.
pub trait RequestIdentityContext: Send + Sync {
    /// The application user the host has already bound to this request, if any.
    fn current_bound_user(&self) -> Option<&User>;

    /// Name of the identity asserted by the transport layer, if any.
    fn ambient_identity_name(&self) -> Option<&str>;
}
