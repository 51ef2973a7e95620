//! # Datasite Metadata
//!
//! One-shot setup that makes a datasite discoverable: it ensures a key pair
//! exists, locks the metadata folder down to its owner, and publishes the
//! owner's public key.
//!
//! ## Key Operations
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`ensure_key_pair`] | Generate `~/.ssh/syftbox_ecdsa{,.pub}` when either is missing |
//! | [`set_metadata_permissions`] | Write an owner-only `_.syftperm` in `public/metadata` |
//! | [`create_metadata_file`] | Write `public/metadata/metadata.json` |
//! | [`run`] | All of the above, in order |
//!
//! ## Files Produced
//!
//! ```text
//! ~/.ssh/syftbox_ecdsa
//! ~/.ssh/syftbox_ecdsa.pub
//! <sync_folder>/<email>/public/metadata/_.syftperm
//! <sync_folder>/<email>/public/metadata/metadata.json
//! ```
//!
//! ## Example Usage
//!
//! ```ignore
//! use datasite_config_and_utils::Paths;
//! use datasite_metadata::{run, DatasiteApp, APP_NAME};
//! use keygen_ops::SshKeygenProvider;
//!
//! let app = DatasiteApp::load(Path::new("/home/a/.syftbox/config.json"), APP_NAME)?;
//! let report = run(&app, &Paths::new()?, &SshKeygenProvider::default())?;
//! println!("{}", report.metadata_file.display());
//! ```

mod app;
mod error;
mod initializer;
mod metadata;
mod permissions;

#[cfg(test)]
mod tests;

pub use app::DatasiteApp;
pub use error::{MetadataError, MetadataResult};
pub use initializer::{
    create_metadata_file, ensure_key_pair, metadata_dir, run, set_metadata_permissions,
    KeyPairStatus, SetupReport, APP_NAME,
};
pub use metadata::{MetadataRecord, DEFAULT_DESCRIPTION, METADATA_FILE_NAME};
pub use permissions::{descriptor_path, PermissionDescriptor, PERMISSION_FILE_NAME};
