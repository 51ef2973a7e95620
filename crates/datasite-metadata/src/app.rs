//! Directory and permission helpers shared by datasite applications.
//!
//! ```text
//! <sync_folder>/
//! └── <user_id>/
//!     ├── app_pipelines/
//!     │   └── <app_name>/
//!     └── public/
//!         └── _.syftperm
//! ```

use crate::permissions::PermissionDescriptor;
use crate::MetadataResult;
use datasite_config_and_utils::ClientConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// A named application running against one user's datasite.
#[derive(Debug, Clone)]
pub struct DatasiteApp {
    config: ClientConfig,
    app_name: String,
}

impl DatasiteApp {
    pub fn new(config: ClientConfig, app_name: impl Into<String>) -> Self {
        Self {
            config,
            app_name: app_name.into(),
        }
    }

    /// Load the client config from `config_path` and wrap it.
    pub fn load(config_path: &Path, app_name: impl Into<String>) -> MetadataResult<Self> {
        let config = ClientConfig::load_from_file(config_path)?;
        Ok(Self::new(config, app_name))
    }

    /// Load the client config named by `SYFTBOX_CLIENT_CONFIG_PATH` and wrap it.
    pub fn from_env(app_name: impl Into<String>) -> MetadataResult<Self> {
        let config = ClientConfig::load_from_env()?;
        Ok(Self::new(config, app_name))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The current user's id (their email).
    pub fn user_id(&self) -> &str {
        &self.config.email
    }

    pub fn datasite_dir(&self, user_id: &str) -> PathBuf {
        self.config.datasite_dir(user_id)
    }

    pub fn public_dir(&self, user_id: &str) -> PathBuf {
        self.config.public_dir(user_id)
    }

    /// `<sync_folder>/<user_id>/app_pipelines/<app_name>`
    pub fn app_dir(&self, user_id: &str) -> PathBuf {
        self.datasite_dir(user_id)
            .join("app_pipelines")
            .join(&self.app_name)
    }

    /// Create `path` and any missing parents.
    pub fn create_directory(&self, path: &Path) -> MetadataResult<()> {
        std::fs::create_dir_all(path)?;
        info!(path = %path.display(), "created directory");
        Ok(())
    }

    /// Write `content` to `path`, replacing any existing file.
    pub fn create_file(&self, path: &Path, content: impl AsRef<[u8]>) -> MetadataResult<()> {
        let content = content.as_ref();
        std::fs::write(path, content)?;
        info!(path = %path.display(), bytes = content.len(), "created file");
        debug!(path = %path.display(), content = %String::from_utf8_lossy(content));
        Ok(())
    }

    /// Write a permission descriptor for `path`, creating the directory first.
    ///
    /// `admin` defaults to the current user. The descriptor replaces whatever
    /// was there; grants are not merged.
    pub fn set_permissions(
        &self,
        path: &Path,
        read: &[String],
        write: &[String],
        admin: Option<&[String]>,
    ) -> MetadataResult<PathBuf> {
        self.create_directory(path)?;

        let default_admin = [self.user_id().to_string()];
        let admin = admin.unwrap_or(&default_admin[..]);
        let descriptor = PermissionDescriptor::new(path, admin, read, write);
        let written = descriptor.write_to(path)?;

        info!(
            path = %path.display(),
            admin = ?descriptor.admin,
            read = ?descriptor.read,
            write = ?descriptor.write,
            "set permissions"
        );
        Ok(written)
    }

    /// Grant the current user admin, read, and write on `path` and nobody else.
    pub fn set_owner_only_permissions(&self, path: &Path) -> MetadataResult<PathBuf> {
        self.create_directory(path)?;
        let written = PermissionDescriptor::owner_only(path, self.user_id()).write_to(path)?;
        info!(path = %path.display(), owner = %self.user_id(), "set owner-only permissions");
        Ok(written)
    }

    /// Read the permission descriptor currently stored in `path`.
    pub fn read_permissions(&self, path: &Path) -> MetadataResult<PermissionDescriptor> {
        PermissionDescriptor::read_from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn app_at(sync_folder: &Path) -> DatasiteApp {
        DatasiteApp::new(
            ClientConfig {
                email: "a@x.com".to_string(),
                sync_folder: sync_folder.to_path_buf(),
            },
            "syftbox-metadata",
        )
    }

    #[test]
    fn directory_layout() {
        let app = app_at(Path::new("/tmp/sync"));

        assert_eq!(app.user_id(), "a@x.com");
        assert_eq!(app.public_dir("a@x.com"), PathBuf::from("/tmp/sync/a@x.com/public"));
        assert_eq!(
            app.app_dir("b@y.org"),
            PathBuf::from("/tmp/sync/b@y.org/app_pipelines/syftbox-metadata")
        );
    }

    #[test]
    fn set_permissions_defaults_admin_to_current_user() {
        let dir = tempdir().unwrap();
        let app = app_at(dir.path());
        let shared = app.public_dir("a@x.com").join("shared");
        let readers = ["a@x.com".to_string(), "b@y.org".to_string()];
        let writers = ["a@x.com".to_string()];

        let written = app.set_permissions(&shared, &readers, &writers, None).unwrap();

        assert_eq!(written, shared.join("_.syftperm"));
        let stored = app.read_permissions(&shared).unwrap();
        assert_eq!(stored.admin, ["a@x.com"]);
        assert_eq!(stored.read, ["a@x.com", "b@y.org"]);
        assert_eq!(stored.write, ["a@x.com"]);
    }

    #[test]
    fn set_permissions_with_explicit_admins() {
        let dir = tempdir().unwrap();
        let app = app_at(dir.path());
        let target = dir.path().join("a@x.com").join("app_pipelines");
        let admins = ["ops@x.com".to_string()];

        app.set_permissions(&target, &[], &[], Some(&admins[..])).unwrap();

        let stored = app.read_permissions(&target).unwrap();
        assert_eq!(stored.admin, ["ops@x.com"]);
        assert!(stored.read.is_empty());
    }

    #[test]
    fn owner_only_permissions_replace_shared_grants() {
        let dir = tempdir().unwrap();
        let app = app_at(dir.path());
        let target = app.public_dir("a@x.com").join("metadata");
        let everyone = ["a@x.com".to_string(), "b@y.org".to_string()];
        app.set_permissions(&target, &everyone, &everyone, None).unwrap();

        let written = app.set_owner_only_permissions(&target).unwrap();

        assert_eq!(written, target.join("_.syftperm"));
        let stored = app.read_permissions(&target).unwrap();
        assert_eq!(stored, PermissionDescriptor::owner_only(&target, "a@x.com"));
        assert_eq!(stored.read, ["a@x.com"]);
    }

    #[test]
    fn create_file_overwrites() {
        let dir = tempdir().unwrap();
        let app = app_at(dir.path());
        let path = dir.path().join("note.txt");

        app.create_file(&path, "first").unwrap();
        app.create_file(&path, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn create_directory_is_idempotent() {
        let dir = tempdir().unwrap();
        let app = app_at(dir.path());
        let nested = dir.path().join("a").join("b").join("c");

        app.create_directory(&nested).unwrap();
        app.create_directory(&nested).unwrap();

        assert!(nested.is_dir());
    }
}
