//! Collaborator implementations for the static directory plugin.
//!
//! Implements `UserDirectory` and `SiteConfig` using the domain service.

use ad_authn_sdk::{AuthnCollaboratorError, LocalUser, SiteConfig, SiteSettings, UserDirectory};
use async_trait::async_trait;

use super::service::Service;

#[async_trait]
impl UserDirectory for Service {
    async fn find_by_name(&self, name: &str) -> Result<Option<LocalUser>, AuthnCollaboratorError> {
        Ok(self.find_by_name(name))
    }
}

#[async_trait]
impl SiteConfig for Service {
    async fn get_site_settings(&self) -> Result<SiteSettings, AuthnCollaboratorError> {
        Ok(self.site_settings())
    }
}
