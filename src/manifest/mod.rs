//! Per-directory checksum manifests (`files.md5`)
//!
//! Each line of a manifest is `<32 hex digest><spaces><file name>`. Lines
//! starting with `#` are comments and blank lines are ignored.

pub mod parse;
pub mod write;

pub use parse::{parse_line, parse_manifest, read_manifest, Malformed, NumberedLine, ParsedLine};
pub use write::{serialize_manifest, verify_written, write_manifest};

use crate::types::Digest;

/// Fixed name of the manifest file inside every managed directory
pub const MANIFEST_FILE_NAME: &str = "files.md5";

/// One `digest filename` pair from a manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub digest: Digest,
    /// Name relative to the manifest's directory
    pub filename: String,
}

impl ManifestEntry {
    pub fn new(filename: impl Into<String>, digest: Digest) -> Self {
        Self {
            digest,
            filename: filename.into(),
        }
    }
}
