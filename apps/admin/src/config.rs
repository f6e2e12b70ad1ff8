//! Console configuration loaded from TOML.

use anyhow::{Context, Result, bail};
use auth::{FailureDisclosure, HmacAuthenticator, MasterKey};
use serde::Deserialize;
use std::{
    fmt,
    path::{Path, PathBuf},
    sync::Arc,
};
use store::{CachedStore, FsObjectStore, JsonCredentialStore};

/// Config directory name under the platform config and data dirs.
pub const CONFIG_DIR: &str = "chattgp";
/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "console.toml";
/// Default credential document object name.
pub const AUTH_FILE: &str = "auth.json";

/// Credential store used by the console: the JSON document in a
/// filesystem bucket, loaded once per process.
pub type ConsoleStore = Arc<CachedStore<JsonCredentialStore<FsObjectStore>>>;

/// Resolve the global configuration directory (`~/.config/chattgp/` on
/// unix).
pub fn global_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR))
        .context("no platform config directory")
}

/// Path of the config file used when `--config` is not given.
pub fn default_config_path() -> Result<PathBuf> {
    Ok(global_config_dir()?.join(CONFIG_FILE))
}

/// Top-level console configuration.
#[derive(Debug, Default, Deserialize)]
pub struct ConsoleConfig {
    /// Secrets.
    pub security: SecurityConfig,
    /// Where the credential document lives.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Login behavior.
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Secret material.
#[derive(Default, Deserialize)]
pub struct SecurityConfig {
    /// Master key every user key is derived from (supports `${ENV_VAR}`
    /// expansion).
    #[serde(default)]
    pub master_key: String,
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("master_key", &"***")
            .finish()
    }
}

/// Storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory standing in for the bucket.
    pub root: PathBuf,
    /// Object name of the credential document.
    pub auth_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(CONFIG_DIR),
            auth_file: AUTH_FILE.to_owned(),
        }
    }
}

/// Login behavior.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Tell users whether the email or the key was wrong.
    pub disclose_failure_reason: bool,
}

impl ConsoleConfig {
    /// Parse a TOML string into a `ConsoleConfig`, expanding environment
    /// variables first.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let expanded = crate::utils::expand_env_vars(toml_str);
        let config: Self = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// The master key. Rejects an empty key.
    pub fn master_key(&self) -> Result<MasterKey> {
        let key = MasterKey::new(self.security.master_key.as_str());
        if key.is_empty() {
            bail!("security.master_key is empty");
        }
        Ok(key)
    }

    /// How much a failed login tells the user.
    pub fn disclosure(&self) -> FailureDisclosure {
        if self.auth.disclose_failure_reason {
            FailureDisclosure::Detailed
        } else {
            FailureDisclosure::Generic
        }
    }

    /// Open the credential store.
    pub fn credential_store(&self) -> ConsoleStore {
        tracing::debug!(
            "credential document {} in {}",
            self.storage.auth_file,
            self.storage.root.display()
        );
        let bucket = FsObjectStore::new(self.storage.root.clone());
        Arc::new(CachedStore::new(JsonCredentialStore::new(
            bucket,
            self.storage.auth_file.as_str(),
        )))
    }

    /// Authenticator over `store`.
    pub fn authenticator(&self, store: ConsoleStore) -> Result<HmacAuthenticator<ConsoleStore>> {
        Ok(HmacAuthenticator::new(store, self.master_key()?))
    }
}
