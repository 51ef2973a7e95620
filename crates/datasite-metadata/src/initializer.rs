//! The datasite metadata setup flow.
//!
//! Steps run strictly in order and the first error aborts the run. Re-running
//! after a failure is safe: the key pair and directories are only created when
//! missing, and both JSON files are rewritten in full.

use crate::app::DatasiteApp;
use crate::metadata::{MetadataRecord, METADATA_FILE_NAME};
use crate::{MetadataError, MetadataResult};
use datasite_config_and_utils::Paths;
use keygen_ops::KeyProvider;
use std::path::PathBuf;
use tracing::info;

/// Application name used for this tool's app directory.
pub const APP_NAME: &str = "syftbox-metadata";

/// Outcome of [`ensure_key_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPairStatus {
    Generated,
    AlreadyPresent,
}

/// What a completed [`run`] touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    pub key_pair: KeyPairStatus,
    pub permission_file: PathBuf,
    pub metadata_file: PathBuf,
}

/// `<sync_folder>/<user_id>/public/metadata`
pub fn metadata_dir(app: &DatasiteApp) -> PathBuf {
    app.public_dir(app.user_id()).join("metadata")
}

/// Generate the key pair unless both halves already exist.
///
/// Existing files are not inspected. A private key left without its public
/// half is not replaced; the provider's error names the file to deal with.
pub fn ensure_key_pair(paths: &Paths, provider: &dyn KeyProvider) -> MetadataResult<KeyPairStatus> {
    let private_key = paths.private_key_file();
    let public_key = paths.public_key_file();

    if private_key.exists() && public_key.exists() {
        info!(path = %private_key.display(), "key pair already exists");
        return Ok(KeyPairStatus::AlreadyPresent);
    }

    info!(
        path = %private_key.display(),
        private_present = private_key.exists(),
        public_present = public_key.exists(),
        "key pair incomplete, generating"
    );
    provider.generate(&private_key)?;
    Ok(KeyPairStatus::Generated)
}

/// Grant the current user admin, read, and write on the metadata directory.
///
/// Any existing descriptor there is replaced, including grants to other users.
pub fn set_metadata_permissions(app: &DatasiteApp) -> MetadataResult<PathBuf> {
    let dir = metadata_dir(app);
    let written = app.set_owner_only_permissions(&dir)?;
    info!(path = %dir.display(), "metadata permissions set");
    Ok(written)
}

/// Publish the public key, email, and description to `metadata.json`.
pub fn create_metadata_file(app: &DatasiteApp, paths: &Paths) -> MetadataResult<PathBuf> {
    let public_key_path = paths.public_key_file();
    let public_key = std::fs::read_to_string(&public_key_path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            MetadataError::MissingPublicKey {
                path: public_key_path.clone(),
            }
        } else {
            MetadataError::Io(err)
        }
    })?;

    let record = MetadataRecord::new(&public_key, app.user_id());
    let metadata_path = metadata_dir(app).join(METADATA_FILE_NAME);
    app.create_file(&metadata_path, record.to_pretty_json()?)?;

    info!(path = %metadata_path.display(), "metadata file created");
    Ok(metadata_path)
}

/// Run every setup step in order.
pub fn run(
    app: &DatasiteApp,
    paths: &Paths,
    provider: &dyn KeyProvider,
) -> MetadataResult<SetupReport> {
    info!("-----------------------------");

    let key_pair = ensure_key_pair(paths, provider)?;
    let permission_file = set_metadata_permissions(app)?;
    let metadata_file = create_metadata_file(app, paths)?;

    info!(email = %app.user_id(), "Setup complete.");

    Ok(SetupReport {
        key_pair,
        permission_file,
        metadata_file,
    })
}
