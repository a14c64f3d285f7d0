//! md5tree: per-directory MD5 checksum manifests
//!
//! Walks a directory tree and, for every directory holding files, generates a
//! `files.md5` manifest, verifies the files against an existing one, or
//! reports that the manifest is missing.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod report;
pub mod tree;
pub mod types;
