use crate::collaborators::RequestIdentityContext;
use crate::models::User;

/// `RequestIdentity` holds the identity state of a single request.
///
/// Built by the host from what the web server asserted for the request and
/// passed explicitly to every resolver call.
#[derive(Debug, Clone, Default)]
pub struct RequestIdentity {
    /// User the host already bound to the request.
    bound_user: Option<User>,
    /// Identity name asserted by the transport layer (e.g. `CORP\alice`).
    ambient_identity_name: Option<String>,
}

impl RequestIdentity {
    #[must_use]
    pub fn builder() -> RequestIdentityBuilder {
        RequestIdentityBuilder::default()
    }

    /// A request with no asserted identity and no bound user.
    #[must_use]
    pub fn anonymous() -> Self {
        RequestIdentityBuilder::default().build()
    }
}

impl RequestIdentityContext for RequestIdentity {
    fn current_bound_user(&self) -> Option<&User> {
        self.bound_user.as_ref()
    }

    fn ambient_identity_name(&self) -> Option<&str> {
        self.ambient_identity_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}

#[derive(Default)]
pub struct RequestIdentityBuilder {
    bound_user: Option<User>,
    ambient_identity_name: Option<String>,
}

impl RequestIdentityBuilder {
    #[must_use]
    pub fn bound_user(mut self, user: impl Into<User>) -> Self {
        self.bound_user = Some(user.into());
        self
    }

    #[must_use]
    pub fn ambient_identity_name(mut self, name: &str) -> Self {
        self.ambient_identity_name = Some(name.to_owned());
        self
    }

    #[must_use]
    pub fn build(self) -> RequestIdentity {
        RequestIdentity {
            bound_user: self.bound_user,
            ambient_identity_name: self.ambient_identity_name,
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::models::{ExternalIdentityUser, LocalUser};

    #[test]
    fn anonymous_has_nothing() {
        let ctx = RequestIdentity::anonymous();
        assert!(ctx.current_bound_user().is_none());
        assert!(ctx.ambient_identity_name().is_none());
    }

    #[test]
    fn builder_full() {
        let carol = LocalUser {
            id: Uuid::from_u128(3),
            user_name: "carol".to_owned(),
            email: Some("carol@corp.example".to_owned()),
        };
        let ctx = RequestIdentity::builder()
            .bound_user(carol.clone())
            .ambient_identity_name("CORP\\carol")
            .build();

        assert_eq!(ctx.current_bound_user(), Some(&User::Local(carol)));
        assert_eq!(ctx.ambient_identity_name(), Some("CORP\\carol"));
    }

    #[test]
    fn blank_ambient_name_is_absent() {
        let ctx = RequestIdentity::builder()
            .ambient_identity_name("  ")
            .bound_user(ExternalIdentityUser::new("x"))
            .build();
        assert!(ctx.ambient_identity_name().is_none());
        assert!(ctx.current_bound_user().is_some());
    }
}
