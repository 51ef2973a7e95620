use std::path::PathBuf;
use thiserror::Error;

/// Error taxonomy for key generation.
#[derive(Debug, Error)]
pub enum KeygenError {
    #[error("key generation tool is not installed: {executable}")]
    ToolNotInstalled { executable: String },

    /// A private key without its public half is in the way.
    #[error(
        "refusing to overwrite existing key {}; remove it, or restore its .pub file, and re-run",
        .path.display()
    )]
    KeyAlreadyExists { path: PathBuf },

    #[error("key generation failed: {message}")]
    CommandFailed {
        message: String,
        exit_code: Option<i32>,
        stderr: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
