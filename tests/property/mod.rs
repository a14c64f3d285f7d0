//! Property-based tests for the manifest format

mod manifest_roundtrip;
