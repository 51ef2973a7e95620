//! The published `metadata.json` record.

use crate::MetadataResult;
use serde::{Deserialize, Serialize};

/// File name of the metadata record inside the metadata directory.
pub const METADATA_FILE_NAME: &str = "metadata.json";

/// Description published for every datasite set up by this tool.
pub const DEFAULT_DESCRIPTION: &str = "this datasite hosts some healthcare datasets";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// OpenSSH public key line, without surrounding whitespace.
    pub public_key: String,
    pub email: String,
    pub description: String,
}

impl MetadataRecord {
    pub fn new(public_key: &str, email: &str) -> Self {
        Self {
            public_key: public_key.trim().to_string(),
            email: email.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }

    /// Pretty JSON with four-space indentation.
    pub fn to_pretty_json(&self) -> MetadataResult<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(buf)
    }
}
