use crate::{KeygenCommandRunner, KeygenError};
use std::ffi::OsString;
use std::path::Path;

/// Something that can create a key pair on disk.
///
/// `generate` writes the private key to `private_key_path` and the public key
/// next to it with a `.pub` suffix.
pub trait KeyProvider {
    fn generate(&self, private_key_path: &Path) -> Result<(), KeygenError>;
}

/// Key algorithm and strength requested from the tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub key_type: String,
    pub bits: u32,
}

impl Default for KeySpec {
    /// ECDSA on NIST P-521.
    fn default() -> Self {
        Self {
            key_type: "ecdsa".to_string(),
            bits: 521,
        }
    }
}

/// [`KeyProvider`] backed by the `ssh-keygen` binary.
///
/// Keys are generated without a passphrase. An existing private key is never
/// overwritten: `generate` fails with [`KeygenError::KeyAlreadyExists`] naming
/// the file instead of running the tool.
#[derive(Debug, Clone, Default)]
pub struct SshKeygenProvider {
    runner: KeygenCommandRunner,
    spec: KeySpec,
}

impl SshKeygenProvider {
    pub fn new(runner: KeygenCommandRunner, spec: KeySpec) -> Self {
        Self { runner, spec }
    }
}

impl KeyProvider for SshKeygenProvider {
    fn generate(&self, private_key_path: &Path) -> Result<(), KeygenError> {
        if private_key_path.exists() {
            return Err(KeygenError::KeyAlreadyExists {
                path: private_key_path.to_path_buf(),
            });
        }
        if let Some(parent) = private_key_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        self.runner
            .run(keygen_args(private_key_path, &self.spec))?;

        tracing::info!(
            path = %private_key_path.display(),
            key_type = %self.spec.key_type,
            bits = self.spec.bits,
            "key pair generated"
        );
        Ok(())
    }
}

/// `-f <path> -t <type> -b <bits> -N ""`
fn keygen_args(private_key_path: &Path, spec: &KeySpec) -> Vec<OsString> {
    vec![
        "-f".into(),
        private_key_path.as_os_str().to_os_string(),
        "-t".into(),
        spec.key_type.clone().into(),
        "-b".into(),
        spec.bits.to_string().into(),
        "-N".into(),
        "".into(),
    ]
}
