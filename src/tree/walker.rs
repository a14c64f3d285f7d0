//! Filesystem walker for traversing directory structures
//!
//! Visits directories depth-first in pre-order, children sorted
//! case-insensitively. Each visited directory is yielded together with the
//! names of the regular files directly inside it.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// Walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to descend into symlinked directories (default: false)
    pub follow_symlinks: bool,
}

/// One visited directory and the files directly inside it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryListing {
    pub path: PathBuf,
    /// File names as found on disk, sorted with [`compare_names`] on their
    /// lossy UTF-8 form. Names that are not valid UTF-8 are kept unaltered.
    pub files: Vec<OsString>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Iterate over every directory under the root, root first.
    ///
    /// A directory that cannot be read yields an `Err` and its subtree is
    /// skipped; iteration continues with the next sibling.
    pub fn directories(&self) -> Directories {
        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .sort_by(compare_entries);

        Directories {
            inner: walker.into_iter(),
            pending: None,
        }
    }
}

/// Iterator returned by [`Walker::directories`]
pub struct Directories {
    inner: walkdir::IntoIter,
    pending: Option<DirectoryListing>,
}

impl Iterator for Directories {
    type Item = Result<DirectoryListing, walkdir::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next() {
                Some(Ok(entry)) => entry,
                Some(Err(e)) => {
                    // Keep the directory we were filling; it is emitted on a later call.
                    return Some(Err(e));
                }
                None => return self.pending.take().map(Ok),
            };

            if entry.file_type().is_dir() {
                let finished = self.pending.replace(DirectoryListing {
                    path: entry.into_path(),
                    files: Vec::new(),
                });
                if let Some(listing) = finished {
                    return Some(Ok(listing));
                }
            } else if is_regular_file(&entry) {
                // Files sort ahead of subdirectories, so the parent is always pending.
                if let Some(listing) = self.pending.as_mut() {
                    listing.files.push(entry.file_name().to_os_string());
                }
            }
        }
    }
}

/// Case-insensitive name ordering, ties broken by the exact name
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn compare_os_names(a: &OsStr, b: &OsStr) -> Ordering {
    compare_names(&a.to_string_lossy(), &b.to_string_lossy())
}

// Files first, then directories, each group by name.
fn compare_entries(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| compare_os_names(a.file_name(), b.file_name()))
}

fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    // An unfollowed symlink still counts when it points at a regular file.
    file_type.is_symlink() && entry.path().is_file()
}
