//! Configuration for the static directory plugin.

use std::path::Path;

use ad_authn_sdk::LocalUser;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::Deserialize;
use uuid::Uuid;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "AD_AUTHN__";

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticDirectoryPluginConfig {
    /// Name of the super-user account exposed through site settings.
    pub super_user_name: String,

    /// Local users served by the directory.
    pub users: Vec<UserConfig>,
}

impl Default for StaticDirectoryPluginConfig {
    fn default() -> Self {
        Self {
            super_user_name: "admin".to_owned(),
            users: Vec::new(),
        }
    }
}

impl StaticDirectoryPluginConfig {
    /// Load configuration from a YAML file, then apply `AD_AUTHN__*`
    /// environment overrides (`__` separates nested keys).
    ///
    /// A missing file is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file or an override cannot be parsed into
    /// this configuration.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let cfg = Figment::new()
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(cfg)
    }
}

/// A local user entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    /// Directory key.
    pub id: Uuid,

    /// User name the directory is searched by.
    pub user_name: String,

    /// Optional contact email.
    #[serde(default)]
    pub email: Option<String>,
}

impl UserConfig {
    #[must_use]
    pub fn to_local_user(&self) -> LocalUser {
        LocalUser {
            id: self.id,
            user_name: self.user_name.clone(),
            email: self.email.clone(),
        }
    }
}
