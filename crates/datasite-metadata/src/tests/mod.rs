//! Flow-level tests for datasite metadata setup.
//!
//! - `key_pair.rs` - key pair generation and idempotence
//! - `flow.rs`     - permissions, metadata, full runs, and failure ordering


use crate::DatasiteApp;
use datasite_config_and_utils::{ClientConfig, Paths};
use keygen_ops::{KeyProvider, KeygenError};
use std::cell::Cell;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const FAKE_PUBLIC_KEY: &str = "ecdsa-sha2-nistp521 AAAAE2VjZHNhLXNoYTItbmlzdHA1MjE= a@x.com\n";

/// Writes fixed key material instead of running a tool, and counts calls.
///
/// Like `ssh-keygen` with stdin closed, it refuses to replace a private key.
#[derive(Default)]
pub(crate) struct FakeKeyProvider {
    pub calls: Cell<usize>,
}

impl KeyProvider for FakeKeyProvider {
    fn generate(&self, private_key_path: &Path) -> Result<(), KeygenError> {
        self.calls.set(self.calls.get() + 1);
        if private_key_path.exists() {
            return Err(KeygenError::KeyAlreadyExists {
                path: private_key_path.to_path_buf(),
            });
        }
        if let Some(parent) = private_key_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(private_key_path, format!("private-{}", self.calls.get()))?;
        let mut public = private_key_path.as_os_str().to_os_string();
        public.push(".pub");
        std::fs::write(PathBuf::from(public), FAKE_PUBLIC_KEY)?;
        Ok(())
    }
}

/// Provider standing in for a tool that exits non-zero.
pub(crate) struct FailingKeyProvider;

impl KeyProvider for FailingKeyProvider {
    fn generate(&self, _private_key_path: &Path) -> Result<(), KeygenError> {
        Err(KeygenError::CommandFailed {
            message: "ssh-keygen exited with status 1".to_string(),
            exit_code: Some(1),
            stderr: String::new(),
        })
    }
}

/// A temp home directory and sync folder for one user.
pub(crate) struct Fixture {
    pub dir: TempDir,
    pub app: DatasiteApp,
    pub paths: Paths,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let app = DatasiteApp::new(
            ClientConfig {
                email: "a@x.com".to_string(),
                sync_folder: dir.path().join("sync"),
            },
            crate::APP_NAME,
        );
        let paths = Paths::with_home(dir.path().join("home"));
        Self { dir, app, paths }
    }

    pub fn sync_folder(&self) -> &Path {
        &self.app.config().sync_folder
    }
}
