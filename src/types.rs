//! Core value types shared across the crate.

use std::fmt;

/// A 128-bit MD5 content digest.
///
/// Always rendered as 32 lowercase hexadecimal characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 16]);

impl Digest {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Lowercase hex form used in manifest files
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse a 32-digit hex string. Either letter case is accepted.
    ///
    /// Returns `None` for anything that is not exactly 32 hex digits.
    pub fn parse_hex(candidate: &str) -> Option<Self> {
        if !is_digest_hex(candidate) {
            return None;
        }
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(candidate, &mut bytes).ok()?;
        Some(Self(bytes))
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// True when `candidate` is exactly 32 ASCII hex digits.
pub fn is_digest_hex(candidate: &str) -> bool {
    candidate.len() == 32 && candidate.bytes().all(|b| b.is_ascii_hexdigit())
}
