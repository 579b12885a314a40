//! `AuthenticationService` implementation for the resolver.

use ad_authn_sdk::{AuthenticationService, AuthnCollaboratorError, RequestIdentityContext, User};
use async_trait::async_trait;

use super::service::AuthResolver;

#[async_trait]
impl AuthenticationService for AuthResolver {
    // Identity is asserted by the web server; there is nothing to sign in.
    fn sign_in(&self, _user: Option<&User>, _persistent: bool) {}

    // The asserted identity outlives any local session, so there is nothing to clear.
    fn sign_out(&self) {}

    async fn set_authenticated_user_for_request(
        &mut self,
        ctx: &dyn RequestIdentityContext,
        user: Option<&User>,
    ) -> Result<(), AuthnCollaboratorError> {
        self.set_authenticated_user_for_request(ctx, user).await
    }

    async fn get_authenticated_user(
        &self,
        ctx: &dyn RequestIdentityContext,
    ) -> Result<Option<User>, AuthnCollaboratorError> {
        self.get_authenticated_user(ctx).await
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::sync::Arc;

    use ad_authn_sdk::RequestIdentity;
    use static_directory_plugin::Service;
    use static_directory_plugin::config::{StaticDirectoryPluginConfig, UserConfig};
    use uuid::Uuid;

    use super::*;

    fn service() -> Arc<Service> {
        let cfg = StaticDirectoryPluginConfig {
            super_user_name: "admin".to_owned(),
            users: vec![UserConfig {
                id: Uuid::from_u128(1),
                user_name: "admin".to_owned(),
                email: None,
            }],
        };
        Arc::new(Service::from_config(&cfg).unwrap())
    }

    #[tokio::test]
    async fn trait_object_impersonates_super_user() {
        let svc = service();
        let mut authn: Box<dyn AuthenticationService> =
            Box::new(AuthResolver::new(svc.clone(), svc.clone()));
        let ctx = RequestIdentity::anonymous();
        let admin = authn
            .get_authenticated_user(&RequestIdentity::builder().ambient_identity_name("admin").build())
            .await
            .unwrap();

        authn
            .set_authenticated_user_for_request(&ctx, admin.as_ref())
            .await
            .unwrap();

        let resolved = authn.get_authenticated_user(&ctx).await.unwrap();
        assert_eq!(resolved.as_ref().map(User::name), Some("admin"));
    }

    #[tokio::test]
    async fn trait_object_sign_in_is_noop() {
        let svc = service();
        let authn: Box<dyn AuthenticationService> = Box::new(AuthResolver::new(svc.clone(), svc));
        authn.sign_in(None, true);
        authn.sign_out();

        let resolved = authn
            .get_authenticated_user(&RequestIdentity::anonymous())
            .await
            .unwrap();
        assert!(resolved.is_none());
    }
}
