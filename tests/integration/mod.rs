//! Integration tests for md5tree

mod binary_cli;
mod find_missing;
mod test_utils;

pub use test_utils::*;
