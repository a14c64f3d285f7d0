//! Content digests for files using MD5
//!
//! MD5 is used for compatibility with existing `files.md5` manifests, not for
//! collision resistance.

use crate::types::Digest;
use md5::{Digest as _, Md5};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Default read size when streaming a file through the hasher (64 KiB)
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Compute the digest of a file's content.
///
/// The file is streamed in chunks of `chunk_size` bytes so memory use does not
/// depend on file size. Fails if the file cannot be opened or a read fails
/// part way through.
pub fn compute_file_digest(path: &Path, chunk_size: usize) -> std::io::Result<Digest> {
    let mut file = File::open(path)?;
    let mut hasher = Md5::new();
    let mut buffer = vec![0u8; chunk_size.max(1)];

    loop {
        let count = match file.read(&mut buffer) {
            Ok(0) => break,
            Ok(count) => count,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buffer[..count]);
    }

    Ok(finish(hasher))
}

/// Compute the digest of an in-memory buffer
pub fn compute_content_digest(content: &[u8]) -> Digest {
    let mut hasher = Md5::new();
    hasher.update(content);
    finish(hasher)
}

fn finish(hasher: Md5) -> Digest {
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hasher.finalize());
    Digest::from_bytes(bytes)
}
