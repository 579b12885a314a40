//! Domain models for the `ad_authn` module.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted application user record, keyed by `id` in the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUser {
    /// Directory key.
    pub id: Uuid,
    /// Unique user name the directory is searched by.
    pub user_name: String,
    /// Contact email, if the profile has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// A caller authenticated by the external identity source who has no local
/// profile yet.
///
/// Built on the fly during resolution and never written to the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalIdentityUser {
    /// The externally asserted identity name (e.g. `CORP\alice`).
    pub name: String,
}

impl ExternalIdentityUser {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// An application user as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum User {
    /// A user with a record in the user directory.
    Local(LocalUser),
    /// A synthetic user standing in for an externally authenticated caller.
    External(ExternalIdentityUser),
}

impl User {
    /// The unique identifying name of this user.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Local(user) => &user.user_name,
            Self::External(user) => &user.name,
        }
    }

    /// Returns the local record if this user has one.
    #[must_use]
    pub fn as_local(&self) -> Option<&LocalUser> {
        match self {
            Self::Local(user) => Some(user),
            Self::External(_) => None,
        }
    }

    /// Whether `self` and `other` denote the same directory account.
    ///
    /// Only local users have a directory key, so an external identity user is
    /// never the same identity as anything, itself included.
    #[must_use]
    pub fn is_same_identity(&self, other: &User) -> bool {
        match (self, other) {
            (Self::Local(a), Self::Local(b)) => a.id == b.id,
            _ => false,
        }
    }
}

impl From<LocalUser> for User {
    fn from(user: LocalUser) -> Self {
        Self::Local(user)
    }
}

impl From<ExternalIdentityUser> for User {
    fn from(user: ExternalIdentityUser) -> Self {
        Self::External(user)
    }
}

/// Site-wide settings read by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Name of the administrative super-user account. May be empty.
    pub super_user_name: String,
}

impl SiteSettings {
    #[must_use]
    pub fn new(super_user_name: impl Into<String>) -> Self {
        Self {
            super_user_name: super_user_name.into(),
        }
    }

    /// The configured super-user name, or `None` when it is empty or blank.
    ///
    /// A non-blank name is returned exactly as configured.
    #[must_use]
    pub fn super_user_name(&self) -> Option<&str> {
        if self.super_user_name.trim().is_empty() {
            None
        } else {
            Some(&self.super_user_name)
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn local(id: u128, name: &str) -> User {
        User::Local(LocalUser {
            id: Uuid::from_u128(id),
            user_name: name.to_owned(),
            email: None,
        })
    }

    #[test]
    fn local_users_compare_by_directory_key() {
        assert!(local(1, "admin").is_same_identity(&local(1, "Admin")));
        assert!(!local(1, "admin").is_same_identity(&local(2, "admin")));
    }

    #[test]
    fn external_user_is_never_same_identity() {
        let ext = User::External(ExternalIdentityUser::new("admin"));
        assert!(!ext.is_same_identity(&ext));
        assert!(!ext.is_same_identity(&local(1, "admin")));
        assert!(!local(1, "admin").is_same_identity(&ext));
    }

    #[test]
    fn name_covers_both_variants() {
        assert_eq!(local(1, "bob").name(), "bob");
        assert_eq!(
            User::External(ExternalIdentityUser::new("CORP\\dave")).name(),
            "CORP\\dave"
        );
        assert!(User::External(ExternalIdentityUser::new("x")).as_local().is_none());
    }

    #[test]
    fn blank_super_user_name_is_unset() {
        assert_eq!(SiteSettings::default().super_user_name(), None);
        assert_eq!(SiteSettings::new("   ").super_user_name(), None);
        assert_eq!(SiteSettings::new("admin").super_user_name(), Some("admin"));
    }

    #[test]
    fn configured_super_user_name_is_not_trimmed() {
        assert_eq!(SiteSettings::new(" admin ").super_user_name(), Some(" admin "));
    }

    #[test]
    fn user_serializes_with_kind_tag() {
        let json = serde_json::to_value(User::External(ExternalIdentityUser::new("carol"))).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "external", "name": "carol" }));

        let back: User = serde_json::from_value(serde_json::json!({
            "kind": "local",
            "id": "00000000-0000-0000-0000-000000000007",
            "user_name": "erin",
        }))
        .unwrap();
        assert_eq!(back, local(7, "erin"));
    }
}
