//! Client configuration for the datasite tools.

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable holding the path to the client config file.
pub const CLIENT_CONFIG_ENV: &str = "SYFTBOX_CLIENT_CONFIG_PATH";

/// The subset of the sync client's configuration these tools consume.
///
/// The client writes more fields than this (server URL, port, token); they are
/// ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Email address identifying the datasite owner.
    pub email: String,
    /// Root of the synchronized folder tree.
    pub sync_folder: PathBuf,
}

impl ClientConfig {
    /// Load the config from the file named by [`CLIENT_CONFIG_ENV`].
    pub fn load_from_env() -> CoreResult<Self> {
        let path = config_path_from_env(std::env::var_os(CLIENT_CONFIG_ENV))?;
        Self::load_from_file(&path)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CoreError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: ClientConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), email = %config.email, "loaded client config");
        Ok(config)
    }

    fn validate(&self) -> CoreResult<()> {
        if self.email.trim().is_empty() {
            return Err(CoreError::Config("email must not be empty".to_string()));
        }
        if self.sync_folder.as_os_str().is_empty() {
            return Err(CoreError::Config("sync_folder must not be empty".to_string()));
        }
        Ok(())
    }

    /// `<sync_folder>/<user_id>`
    pub fn datasite_dir(&self, user_id: &str) -> PathBuf {
        self.sync_folder.join(user_id)
    }

    /// `<sync_folder>/<user_id>/public`
    pub fn public_dir(&self, user_id: &str) -> PathBuf {
        self.datasite_dir(user_id).join("public")
    }
}

fn config_path_from_env(value: Option<OsString>) -> CoreResult<PathBuf> {
    match value {
        Some(raw) if !raw.is_empty() => Ok(PathBuf::from(raw)),
        _ => Err(CoreError::Config(format!("{CLIENT_CONFIG_ENV} is not set"))),
    }
}
