//! Console reporting and run accounting
//!
//! Progress and success lines go to the output stream, problems go to the
//! error stream. When the reporter switches streams it flushes the one it
//! used last so both appear in order on a shared terminal.

use crate::manifest::Malformed;
use std::fmt::Display;
use std::io::{self, Stderr, Stdout, Write};
use std::path::Path;

/// Counters accumulated over one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunAccounting {
    /// Files whose digest was computed (or attempted) against a manifest entry
    pub checked: u64,
    /// Recorded errors
    pub errors: u64,
    pub manifests_written: u64,
    /// Set when the run stopped on a fatal error
    pub aborted: bool,
}

impl RunAccounting {
    /// 0 when nothing went wrong, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.errors > 0 || self.aborted {
            1
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Out,
    Err,
}

/// Writes report lines to two streams and keeps the run's counters.
pub struct Reporter<O: Write, E: Write> {
    out: O,
    err: E,
    last: Option<Stream>,
    accounting: RunAccounting,
}

impl Reporter<Stdout, Stderr> {
    /// Reporter bound to the process's stdout and stderr
    pub fn console() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Reporter<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            out,
            err,
            last: None,
            accounting: RunAccounting::default(),
        }
    }

    pub fn accounting(&self) -> &RunAccounting {
        &self.accounting
    }

    /// Informational line on the output stream
    pub fn info(&mut self, message: impl Display) {
        self.emit(Stream::Out, message);
    }

    /// Line on the error stream that does not count as an error
    pub fn warn(&mut self, message: impl Display) {
        self.emit(Stream::Err, message);
    }

    /// Recorded error: written to the error stream and counted
    pub fn error(&mut self, message: impl Display) {
        self.accounting.errors += 1;
        self.emit(Stream::Err, message);
    }

    pub fn file_checked(&mut self) {
        self.accounting.checked += 1;
    }

    pub fn ok(&mut self, path: &Path) {
        self.info(format_args!("OK: {}", path.display()));
    }

    pub fn failed(&mut self, path: &Path) {
        self.error(format_args!("FAILED: {}", path.display()));
    }

    pub fn no_such_file(&mut self, path: &Path) {
        self.error(format_args!("No such file: {}", path.display()));
    }

    pub fn new_file(&mut self, path: &Path) {
        self.error(format_args!("New file: {}", path.display()));
    }

    pub fn non_utf8_name(&mut self, path: &Path) {
        self.error(format_args!("Non-UTF-8 file name: {}", path.display()));
    }

    pub fn missing_manifest(&mut self, dir: &Path) {
        self.error(format_args!("Missing manifest: {}", dir.display()));
    }

    pub fn read_error(&mut self, path: &Path, err: &io::Error) {
        self.error(format_args!("Read error: {}: {}", path.display(), err));
    }

    pub fn parse_error(&mut self, manifest: &Path, line_number: usize, reason: &Malformed) {
        self.error(format_args!(
            "Parse error: {}:{}: {}",
            manifest.display(),
            line_number,
            reason
        ));
    }

    pub fn traversal_error(&mut self, err: &walkdir::Error) {
        self.error(format_args!("Traversal error: {}", err));
    }

    pub fn manifest_created(&mut self, manifest: &Path) {
        self.accounting.manifests_written += 1;
        self.info(format_args!("Created: {}", manifest.display()));
    }

    /// Report a fatal error and mark the run as aborted
    pub fn abort(&mut self, err: impl Display) {
        self.accounting.aborted = true;
        self.emit(Stream::Err, format_args!("Aborted: {}", err));
    }

    /// Flush both streams and return the final counters
    pub fn finish(mut self) -> RunAccounting {
        let _ = self.out.flush();
        let _ = self.err.flush();
        self.accounting
    }

    /// Flush and hand back the underlying writers with the counters
    pub fn into_parts(mut self) -> (O, E, RunAccounting) {
        let _ = self.out.flush();
        let _ = self.err.flush();
        (self.out, self.err, self.accounting)
    }

    fn emit(&mut self, stream: Stream, message: impl Display) {
        if self.last.is_some_and(|last| last != stream) {
            let _ = match stream {
                Stream::Out => self.err.flush(),
                Stream::Err => self.out.flush(),
            };
        }
        self.last = Some(stream);

        // Console write failures (e.g. closed pipe) must not abort the walk.
        let _ = match stream {
            Stream::Out => writeln!(self.out, "{}", message),
            Stream::Err => writeln!(self.err, "{}", message),
        };
    }
}
