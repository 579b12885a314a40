//! Composition-root helper that hands out one resolver per request.

use std::sync::Arc;

use ad_authn_sdk::{AuthenticationService, SiteConfig, UserDirectory};
use tracing::debug;

use crate::domain::AuthResolver;

/// Owns the shared collaborators and creates a fresh [`AuthResolver`] for
/// every request scope.
///
/// The host builds this once when wiring its services and selects it as the
/// authentication service explicitly; collaborators are shared, resolver
/// state never is.
#[derive(Clone)]
pub struct AuthResolverFactory {
    directory: Arc<dyn UserDirectory>,
    site_config: Arc<dyn SiteConfig>,
}

impl AuthResolverFactory {
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>, site_config: Arc<dyn SiteConfig>) -> Self {
        debug!("Active Directory authentication service selected");
        Self {
            directory,
            site_config,
        }
    }

    /// Use a single provider as both the user directory and site configuration.
    #[must_use]
    pub fn from_provider<P>(provider: &Arc<P>) -> Self
    where
        P: UserDirectory + SiteConfig + 'static,
    {
        let directory: Arc<dyn UserDirectory> = provider.clone();
        let site_config: Arc<dyn SiteConfig> = provider.clone();
        Self::new(directory, site_config)
    }

    /// A resolver in its initial (non-impersonating) state.
    #[must_use]
    pub fn for_request(&self) -> AuthResolver {
        AuthResolver::new(self.directory.clone(), self.site_config.clone())
    }

    /// Same as [`Self::for_request`], behind the capability trait.
    #[must_use]
    pub fn service_for_request(&self) -> Box<dyn AuthenticationService> {
        Box::new(self.for_request())
    }
}
