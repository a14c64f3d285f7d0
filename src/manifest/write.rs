//! Manifest writer
//!
//! Manifests are created once and never overwritten. The content is staged in
//! a temporary file next to the manifest, synced, read back and compared byte
//! for byte, and only then renamed into place. A failed or interrupted write
//! never leaves a `files.md5` behind.

use super::{ManifestEntry, MANIFEST_FILE_NAME};
use crate::error::FatalError;
use crate::tree::walker::compare_names;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Render entries as manifest text, sorted case-insensitively by file name.
///
/// Each line is `<digest><two spaces><filename>\n`.
pub fn serialize_manifest(entries: &[ManifestEntry]) -> String {
    let mut sorted: Vec<&ManifestEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| compare_names(&a.filename, &b.filename));

    let mut text = String::new();
    for entry in sorted {
        text.push_str(&entry.digest.to_hex());
        text.push_str("  ");
        text.push_str(&entry.filename);
        text.push('\n');
    }
    text
}

/// Create the manifest at `path` with `content` and confirm it landed intact.
///
/// Fails if a file already exists at `path`.
pub fn write_manifest(path: &Path, content: &str) -> Result<(), FatalError> {
    let staged = stage_manifest(path, content.as_bytes())?;
    commit_manifest(staged, path, content.as_bytes())?;
    debug!(path = %path.display(), bytes = content.len(), "Manifest written and verified");
    Ok(())
}

/// Write `content` to a synced temporary file in the manifest's directory.
fn stage_manifest(path: &Path, content: &[u8]) -> Result<NamedTempFile, FatalError> {
    let write_error = |source| FatalError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut staged = tempfile::Builder::new()
        .prefix(&format!(".{}.", MANIFEST_FILE_NAME))
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(write_error)?;
    staged.write_all(content).map_err(write_error)?;
    staged.as_file().sync_all().map_err(write_error)?;
    Ok(staged)
}

/// Check the staged bytes, then move them to `path` without replacing an
/// existing file. The temporary file is removed on every failure.
fn commit_manifest(staged: NamedTempFile, path: &Path, expected: &[u8]) -> Result<(), FatalError> {
    verify_written(staged.path(), expected).map_err(|e| match e {
        FatalError::WriteMismatch(_) => FatalError::WriteMismatch(path.to_path_buf()),
        other => other,
    })?;
    staged
        .persist_noclobber(path)
        .map_err(|e| FatalError::Write {
            path: path.to_path_buf(),
            source: e.error,
        })?;
    Ok(())
}

/// Re-read `path` and require its bytes to equal `expected`.
pub fn verify_written(path: &Path, expected: &[u8]) -> Result<(), FatalError> {
    let actual = std::fs::read(path).map_err(|source| FatalError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if actual != expected {
        return Err(FatalError::WriteMismatch(path.to_path_buf()));
    }
    Ok(())
}
