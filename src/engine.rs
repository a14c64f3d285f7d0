//! Manifest engine: the verify, generate and find-missing runs over a tree.
//!
//! All three modes share the same traversal. Directories without any files
//! are skipped in every mode.

use crate::error::FatalError;
use crate::manifest::{self, ManifestEntry, ParsedLine, MANIFEST_FILE_NAME};
use crate::report::Reporter;
use crate::tree::hasher::{compute_file_digest, DEFAULT_CHUNK_SIZE};
use crate::tree::walker::{DirectoryListing, Walker, WalkerConfig};
use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// What a run does with each directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Check files against existing manifests
    Verify,
    /// Write manifests for directories that lack one
    Generate,
    /// Only report directories that lack a manifest
    FindMissing,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Verify => "verify",
            Mode::Generate => "generate",
            Mode::FindMissing => "find-missing",
        };
        f.write_str(name)
    }
}

/// Tunables for a run
#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// Read size used when hashing files
    pub chunk_size: usize,
    pub walker: WalkerConfig,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            walker: WalkerConfig::default(),
        }
    }
}

/// Runs one mode over the tree rooted at `root`
pub struct Engine {
    root: PathBuf,
    options: EngineOptions,
}

impl Engine {
    pub fn new(root: PathBuf) -> Self {
        Self::with_options(root, EngineOptions::default())
    }

    pub fn with_options(root: PathBuf, options: EngineOptions) -> Self {
        Self { root, options }
    }

    /// Walk the tree in `mode`, reporting through `reporter`, then print the
    /// mode's summary line.
    ///
    /// Only generate mode can fail; on failure no summary is printed and the
    /// caller is expected to report the abort.
    #[instrument(skip(self, reporter), fields(root = %self.root.display()))]
    pub fn run<O: Write, E: Write>(
        &self,
        mode: Mode,
        reporter: &mut Reporter<O, E>,
    ) -> Result<(), FatalError> {
        info!(%mode, "Starting run");
        let walker = Walker::with_config(self.root.clone(), self.options.walker.clone());

        for listing in walker.directories() {
            let listing = match listing {
                Ok(listing) => listing,
                Err(e) => {
                    reporter.traversal_error(&e);
                    continue;
                }
            };
            if listing.files.is_empty() {
                continue;
            }
            debug!(dir = %listing.path.display(), files = listing.files.len(), "Visiting directory");

            match mode {
                Mode::Verify => self.verify_directory(&listing, reporter),
                Mode::Generate => self.generate_directory(&listing, reporter)?,
                Mode::FindMissing => {
                    if !has_manifest(&listing) {
                        reporter.missing_manifest(&listing.path);
                    }
                }
            }
        }

        summarize(mode, reporter);
        let accounting = reporter.accounting();
        info!(
            checked = accounting.checked,
            errors = accounting.errors,
            manifests_written = accounting.manifests_written,
            "Run finished"
        );
        Ok(())
    }

    /// Reconcile one directory against its manifest
    fn verify_directory<O: Write, E: Write>(
        &self,
        listing: &DirectoryListing,
        reporter: &mut Reporter<O, E>,
    ) {
        if !has_manifest(listing) {
            reporter.missing_manifest(&listing.path);
            return;
        }

        let manifest_path = listing.path.join(MANIFEST_FILE_NAME);
        let text = match manifest::read_manifest(&manifest_path) {
            Ok(text) => text,
            Err(e) => {
                reporter.read_error(&manifest_path, &e);
                return;
            }
        };

        let snapshot: HashSet<&str> = listing
            .files
            .iter()
            .filter_map(|name| name.to_str())
            .filter(|name| *name != MANIFEST_FILE_NAME)
            .collect();
        let mut seen: HashSet<String> = HashSet::new();

        for line in manifest::parse_manifest(&text) {
            match line.parsed {
                ParsedLine::Entry(entry) => {
                    self.verify_entry(&listing.path, &entry, &snapshot, &mut seen, reporter)
                }
                ParsedLine::Malformed(reason) => {
                    reporter.parse_error(&manifest_path, line.line_number, &reason)
                }
                ParsedLine::Comment | ParsedLine::Blank => {}
            }
        }

        for name in &listing.files {
            match name.to_str() {
                Some(name) if snapshot.contains(name) && !seen.contains(name) => {
                    reporter.new_file(&listing.path.join(name))
                }
                Some(_) => {}
                // Cannot appear in a UTF-8 manifest, so it can never be listed.
                None => reporter.non_utf8_name(&listing.path.join(name)),
            }
        }
    }

    fn verify_entry<O: Write, E: Write>(
        &self,
        dir: &Path,
        entry: &ManifestEntry,
        snapshot: &HashSet<&str>,
        seen: &mut HashSet<String>,
        reporter: &mut Reporter<O, E>,
    ) {
        let path = dir.join(&entry.filename);

        // A repeated entry finds its file already accounted for.
        if !snapshot.contains(entry.filename.as_str()) || !seen.insert(entry.filename.clone()) {
            reporter.no_such_file(&path);
            return;
        }

        reporter.file_checked();
        match compute_file_digest(&path, self.options.chunk_size) {
            Ok(digest) if digest == entry.digest => reporter.ok(&path),
            Ok(_) => reporter.failed(&path),
            Err(e) => reporter.read_error(&path, &e),
        }
    }

    /// Hash every file and write a new manifest, unless one already exists.
    fn generate_directory<O: Write, E: Write>(
        &self,
        listing: &DirectoryListing,
        reporter: &mut Reporter<O, E>,
    ) -> Result<(), FatalError> {
        if has_manifest(listing) {
            debug!(dir = %listing.path.display(), "Manifest present, leaving it untouched");
            return Ok(());
        }

        let mut entries = Vec::with_capacity(listing.files.len());
        for name in &listing.files {
            let path = listing.path.join(name);
            let name = name
                .to_str()
                .ok_or_else(|| FatalError::NonUtf8Name(path.clone()))?;
            let digest = compute_file_digest(&path, self.options.chunk_size)
                .map_err(|source| FatalError::Read { path, source })?;
            reporter.file_checked();
            entries.push(ManifestEntry::new(name, digest));
        }

        let manifest_path = listing.path.join(MANIFEST_FILE_NAME);
        manifest::write_manifest(&manifest_path, &manifest::serialize_manifest(&entries))?;
        info!(path = %manifest_path.display(), entries = entries.len(), "Manifest created");
        reporter.manifest_created(&manifest_path);
        Ok(())
    }
}

fn has_manifest(listing: &DirectoryListing) -> bool {
    listing.files.iter().any(|name| name == MANIFEST_FILE_NAME)
}

fn summarize<O: Write, E: Write>(mode: Mode, reporter: &mut Reporter<O, E>) {
    let accounting = reporter.accounting().clone();
    match mode {
        Mode::Verify if accounting.checked == 0 => reporter.info("No files checked."),
        Mode::Verify if accounting.errors == 0 => {
            reporter.info(format_args!("All {} files OK.", accounting.checked))
        }
        Mode::Verify => reporter.warn(format_args!(
            "{} error(s) in {} files checked.",
            accounting.errors, accounting.checked
        )),
        Mode::Generate => reporter.info(format_args!(
            "Created {} manifest(s).",
            accounting.manifests_written
        )),
        Mode::FindMissing if accounting.errors > 0 => {
            reporter.warn(format_args!("{} error(s) found.", accounting.errors))
        }
        Mode::FindMissing => {}
    }
}
