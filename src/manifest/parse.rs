//! Manifest reader

use super::ManifestEntry;
use crate::types::Digest;
use std::path::Path;
use thiserror::Error;

/// Why a manifest line was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("missing file name")]
    MissingFilename,

    #[error("invalid checksum {0:?}")]
    InvalidDigest(String),
}

/// Classification of one physical manifest line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(ManifestEntry),
    Comment,
    Blank,
    Malformed(Malformed),
}

/// A parsed line with its 1-based position in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub line_number: usize,
    pub parsed: ParsedLine,
}

/// Read a manifest file as UTF-8 text
pub fn read_manifest(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Parse full manifest text, one result per physical line.
///
/// Malformed lines are returned alongside valid ones so the caller can report
/// them without stopping.
pub fn parse_manifest(text: &str) -> Vec<NumberedLine> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .map(|(index, line)| NumberedLine {
            line_number: index + 1,
            parsed: parse_line(line),
        })
        .collect()
}

/// Parse a single manifest line (without its terminator)
pub fn parse_line(line: &str) -> ParsedLine {
    if line.trim().is_empty() {
        return ParsedLine::Blank;
    }
    if line.starts_with('#') {
        return ParsedLine::Comment;
    }

    let (candidate, remainder) = line.split_once(' ').unwrap_or((line, ""));
    let candidate = candidate.to_lowercase();
    let filename = remainder.trim();

    if filename.is_empty() {
        return ParsedLine::Malformed(Malformed::MissingFilename);
    }
    match Digest::parse_hex(&candidate) {
        Some(digest) => ParsedLine::Entry(ManifestEntry::new(filename, digest)),
        None => ParsedLine::Malformed(Malformed::InvalidDigest(candidate)),
    }
}
