//! Authentication resolution policy.

use std::sync::Arc;

use ad_authn_sdk::{
    AuthnCollaboratorError, ExternalIdentityUser, RequestIdentityContext, SiteConfig, User,
    UserDirectory,
};
use tracing::debug;

/// Per-request authentication resolver.
///
/// Holds the only piece of request state this module owns: whether the
/// request impersonates the super-user. One instance serves exactly one
/// request scope; create a new one (see [`AuthResolverFactory`]) for the next.
///
/// [`AuthResolverFactory`]: crate::AuthResolverFactory
pub struct AuthResolver {
    directory: Arc<dyn UserDirectory>,
    site_config: Arc<dyn SiteConfig>,
    impersonate_super_user: bool,
}

impl AuthResolver {
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>, site_config: Arc<dyn SiteConfig>) -> Self {
        Self {
            directory,
            site_config,
            impersonate_super_user: false,
        }
    }

    /// Whether this request currently resolves to the super-user.
    #[must_use]
    pub fn is_impersonating_super_user(&self) -> bool {
        self.impersonate_super_user
    }

    /// Decide whether this request impersonates the super-user.
    ///
    /// Impersonation is enabled only when no user is bound to the request yet
    /// and `user` is the configured super-user's directory account. Any other
    /// input clears the flag. The bound user is inspected at call time only.
    /// Site settings and the directory are consulted only when a candidate is
    /// given and nothing is bound yet.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures unchanged; the flag is left as it was.
    #[tracing::instrument(skip_all)]
    pub async fn set_authenticated_user_for_request(
        &mut self,
        ctx: &dyn RequestIdentityContext,
        user: Option<&User>,
    ) -> Result<(), AuthnCollaboratorError> {
        let already_bound = ctx.current_bound_user().is_some();
        let candidate = match user {
            Some(candidate) if !already_bound => candidate,
            _ => {
                self.impersonate_super_user = false;
                debug!(already_bound, "Super-user impersonation not applicable");
                return Ok(());
            }
        };

        let super_user = self.resolve_super_user().await?;
        self.impersonate_super_user = super_user
            .as_ref()
            .is_some_and(|owner| candidate.is_same_identity(owner));

        debug!(
            impersonate_super_user = self.impersonate_super_user,
            "Recorded authenticated user for request"
        );
        Ok(())
    }

    /// Resolve the caller of the current request.
    ///
    /// Returns the super-user while impersonating, `None` for requests without
    /// an asserted identity, the matching directory user, or else a fresh
    /// [`ExternalIdentityUser`] that is not written anywhere.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures unchanged.
    #[tracing::instrument(skip_all)]
    pub async fn get_authenticated_user(
        &self,
        ctx: &dyn RequestIdentityContext,
    ) -> Result<Option<User>, AuthnCollaboratorError> {
        if self.impersonate_super_user {
            debug!("Impersonating super-user");
            return self.resolve_super_user().await;
        }

        let Some(name) = ctx.ambient_identity_name() else {
            debug!("No asserted identity, request is anonymous");
            return Ok(None);
        };

        if let Some(local) = self.directory.find_by_name(name).await? {
            debug!(user_name = %local.user_name, "Resolved local user");
            return Ok(Some(User::Local(local)));
        }

        debug!(identity = %name, "No local profile, using external identity");
        Ok(Some(User::External(ExternalIdentityUser::new(name))))
    }

    /// Look up the super-user account named in site settings.
    async fn resolve_super_user(&self) -> Result<Option<User>, AuthnCollaboratorError> {
        let settings = self.site_config.get_site_settings().await?;
        let Some(name) = settings.super_user_name() else {
            return Ok(None);
        };
        Ok(self.directory.find_by_name(name).await?.map(User::Local))
    }
}
