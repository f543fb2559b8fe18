//! Seeded credential catalog
//!
//! `registered_user` must hand back credentials the application's backing
//! store already recognizes. Seeding the store happens outside this repo;
//! this module only records which credentials that seeding used.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Environment override for the active account's login.
pub const ENV_ACTIVE_LOGIN: &str = "IBANK_ACTIVE_LOGIN";
/// Environment override for the active account's password.
pub const ENV_ACTIVE_PASSWORD: &str = "IBANK_ACTIVE_PASSWORD";
/// Environment override for the blocked account's login.
pub const ENV_BLOCKED_LOGIN: &str = "IBANK_BLOCKED_LOGIN";
/// Environment override for the blocked account's password.
pub const ENV_BLOCKED_PASSWORD: &str = "IBANK_BLOCKED_PASSWORD";

/// One seeded login/password pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub login: String,
    pub password: String,
}

/// The credentials the application's store is seeded with.
///
/// Resolution order: explicit YAML file, then environment variables, then
/// the defaults the demo application ships with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub active: Credentials,
    pub blocked: Credentials,
}

impl Default for SeedCatalog {
    fn default() -> Self {
        Self {
            active: Credentials {
                login: "vasya".to_string(),
                password: "qwerty123".to_string(),
            },
            blocked: Credentials {
                login: "petya".to_string(),
                password: "123qwerty".to_string(),
            },
        }
    }
}

impl SeedCatalog {
    /// Parse a catalog from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a catalog from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Resolve the catalog: an explicit file wins outright, otherwise
    /// environment overrides are applied on top of the defaults.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            debug!("loading seed catalog from {}", path.display());
            return Self::from_file(path);
        }

        let mut catalog = Self::default();
        if let Ok(v) = std::env::var(ENV_ACTIVE_LOGIN) {
            catalog.active.login = v;
        }
        if let Ok(v) = std::env::var(ENV_ACTIVE_PASSWORD) {
            catalog.active.password = v;
        }
        if let Ok(v) = std::env::var(ENV_BLOCKED_LOGIN) {
            catalog.blocked.login = v;
        }
        if let Ok(v) = std::env::var(ENV_BLOCKED_PASSWORD) {
            catalog.blocked.password = v;
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_keeps_the_accounts_apart() {
        let catalog = SeedCatalog::default();
        assert_ne!(catalog.active.login, catalog.blocked.login);
    }

    #[test]
    fn catalog_parses_from_yaml() {
        let yaml = r#"
active:
  login: masha
  password: secret-one
blocked:
  login: dasha
  password: secret-two
"#;
        let catalog = SeedCatalog::from_yaml(yaml).unwrap();
        assert_eq!(catalog.active.login, "masha");
        assert_eq!(catalog.blocked.password, "secret-two");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        assert!(SeedCatalog::from_yaml("active: [not, a, record]").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = SeedCatalog::resolve(Some(Path::new("/nonexistent/seeds.yaml")));
        assert!(err.is_err());
    }
}
