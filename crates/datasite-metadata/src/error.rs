use datasite_config_and_utils::CoreError;
use keygen_ops::KeygenError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from datasite metadata setup. Every variant is fatal to the run.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to load client config: {0}")]
    ConfigLoad(#[from] CoreError),

    #[error("failed to generate key pair: {0}")]
    KeyGeneration(#[from] KeygenError),

    #[error("public key not found at {path}")]
    MissingPublicKey { path: PathBuf },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type MetadataResult<T> = Result<T, MetadataError>;
