use std::{env, fmt, path::PathBuf};

use zeroize::Zeroizing;

use super::{optional_var, required_secret};
use crate::{constants::DEFAULT_KEYSTORE_PATH, models::ConfigError};

/// Location and password of the local keystore to decrypt.
#[derive(Clone)]
pub struct KeystoreConfig {
    pub path: PathBuf,
    pub password: Zeroizing<String>,
}

impl fmt::Debug for KeystoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeystoreConfig")
            .field("path", &self.path)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl KeystoreConfig {
    /// Reads `KEYSTORE_PASSWORD` (required) and `KEYSTORE_PATH`
    /// (defaults to `config/keys/local-signer.json`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let password = Zeroizing::new(required_secret(&lookup, "KEYSTORE_PASSWORD")?);
        let path = optional_var(&lookup, "KEYSTORE_PATH")
            .unwrap_or_else(|| DEFAULT_KEYSTORE_PATH.to_string());

        Ok(Self {
            path: PathBuf::from(path),
            password,
        })
    }
}
