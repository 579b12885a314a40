//! Service implementation for the static directory plugin.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use ad_authn_sdk::{LocalUser, SiteSettings};
use tracing::{info, warn};

use crate::config::StaticDirectoryPluginConfig;

/// In-memory user directory and site settings.
///
/// User names are matched case-insensitively, the way the host membership
/// store normalizes them.
pub struct Service {
    users: HashMap<String, LocalUser>,
    settings: SiteSettings,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if two users share a name (ignoring case).
    pub fn from_config(cfg: &StaticDirectoryPluginConfig) -> anyhow::Result<Self> {
        let mut users = HashMap::with_capacity(cfg.users.len());
        for user in &cfg.users {
            match users.entry(normalize(&user.user_name)) {
                Entry::Occupied(_) => {
                    anyhow::bail!("duplicate user name '{}' in directory", user.user_name);
                }
                Entry::Vacant(slot) => {
                    slot.insert(user.to_local_user());
                }
            }
        }

        let settings = SiteSettings::new(cfg.super_user_name.clone());
        match settings.super_user_name() {
            None => warn!("No super-user configured, impersonation is disabled"),
            Some(name) if !users.contains_key(&normalize(name)) => {
                warn!(super_user = %name, "Configured super-user has no directory entry");
            }
            Some(_) => {}
        }

        info!(
            user_count = users.len(),
            super_user = %settings.super_user_name,
            "Loaded static directory"
        );

        Ok(Self { users, settings })
    }

    /// Find a user by name, ignoring case.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<LocalUser> {
        self.users.get(&normalize(name)).cloned()
    }

    #[must_use]
    pub fn site_settings(&self) -> SiteSettings {
        self.settings.clone()
    }
}

fn normalize(name: &str) -> String {
    name.to_lowercase()
}
