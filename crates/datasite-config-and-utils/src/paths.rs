//! Machine-level file system locations.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// File name of the datasite key pair under `~/.ssh`.
pub const KEY_FILE_NAME: &str = "syftbox_ecdsa";

/// Locations rooted at the user's home directory.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Home directory (usually `$HOME`).
    home_dir: PathBuf,
}

impl Paths {
    /// Resolve paths against the current user's home directory.
    pub fn new() -> CoreResult<Self> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;
        Ok(Self { home_dir })
    }

    /// Create a Paths instance rooted at a custom home directory.
    pub fn with_home(home_dir: PathBuf) -> Self {
        Self { home_dir }
    }

    pub fn home_dir(&self) -> &PathBuf {
        &self.home_dir
    }

    /// `~/.ssh`
    pub fn ssh_dir(&self) -> PathBuf {
        self.home_dir.join(".ssh")
    }

    /// `~/.ssh/syftbox_ecdsa`
    pub fn private_key_file(&self) -> PathBuf {
        self.ssh_dir().join(KEY_FILE_NAME)
    }

    /// `~/.ssh/syftbox_ecdsa.pub`
    pub fn public_key_file(&self) -> PathBuf {
        self.ssh_dir().join(format!("{KEY_FILE_NAME}.pub"))
    }

    /// `~/.syftbox/logs/dev.jsonl`
    pub fn log_file(&self) -> PathBuf {
        self.home_dir.join(".syftbox").join("logs").join("dev.jsonl")
    }
}
