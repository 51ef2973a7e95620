//! `_.syftperm` permission descriptors.
//!
//! A descriptor grants admin, read, and write capabilities on the directory it
//! lives in. The sync engine reads them; this crate only writes whole files,
//! so the last writer wins.

use crate::MetadataResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the permission descriptor inside a directory.
pub const PERMISSION_FILE_NAME: &str = "_.syftperm";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDescriptor {
    pub admin: Vec<String>,
    pub read: Vec<String>,
    pub write: Vec<String>,
    /// Path of the descriptor file itself.
    pub filepath: String,
    pub terminal: bool,
}

impl PermissionDescriptor {
    /// Build a non-terminal descriptor for `dir`. Duplicate user ids are
    /// dropped, keeping first-seen order.
    pub fn new(dir: &Path, admin: &[String], read: &[String], write: &[String]) -> Self {
        Self {
            admin: dedup(admin),
            read: dedup(read),
            write: dedup(write),
            filepath: descriptor_path(dir).to_string_lossy().into_owned(),
            terminal: false,
        }
    }

    /// Descriptor granting every capability to `user_id` alone.
    pub fn owner_only(dir: &Path, user_id: &str) -> Self {
        let owner = [user_id.to_string()];
        Self::new(dir, &owner, &owner, &owner)
    }

    /// Serialize to `dir/_.syftperm`, replacing any existing file.
    pub fn write_to(&self, dir: &Path) -> MetadataResult<PathBuf> {
        let path = descriptor_path(dir);
        std::fs::write(&path, serde_json::to_vec(self)?)?;
        Ok(path)
    }

    /// Parse `dir/_.syftperm`.
    pub fn read_from(dir: &Path) -> MetadataResult<Self> {
        let content = std::fs::read(descriptor_path(dir))?;
        Ok(serde_json::from_slice(&content)?)
    }
}

pub fn descriptor_path(dir: &Path) -> PathBuf {
    dir.join(PERMISSION_FILE_NAME)
}

fn dedup(users: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(users.len());
    for user in users {
        if !out.contains(user) {
            out.push(user.clone());
        }
    }
    out
}
