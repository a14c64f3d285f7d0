//! Directory tree access
//!
//! Traversal of the tree being checked and content hashing of its files.

pub mod hasher;
pub mod walker;
