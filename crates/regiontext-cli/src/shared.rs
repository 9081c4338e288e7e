use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Write};
use std::path::Path;

use crate::page_range::parse_page_range;

/// Resolve an optional page range string into 0-indexed page indices.
///
/// If `pages` is `None`, returns all pages (0..page_count).
pub fn resolve_pages(pages: Option<&str>, page_count: usize) -> Result<Vec<usize>, i32> {
    match pages {
        Some(range) => parse_page_range(range, page_count).map_err(|e| {
            eprintln!("Error: {e}");
            1
        }),
        None => Ok((0..page_count).collect()),
    }
}

/// Open the report destination: the given file, or stdout.
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>, i32> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                eprintln!("Error: cannot create {}: {e}", path.display());
                1
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Map an I/O failure while writing the report to an exit code.
pub fn write_failed(err: io::Error) -> i32 {
    eprintln!("Error: failed to write output: {err}");
    1
}

/// Quote a CSV field when it holds a separator, quote or line break.
pub fn csv_escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Transient `<verb> page N/M...` line on stderr.
///
/// Only drawn when stderr is a terminal and there is more than one page.
pub struct ProgressReporter {
    verb: &'static str,
    total: usize,
    enabled: bool,
}

impl ProgressReporter {
    pub fn new(verb: &'static str, total: usize) -> Self {
        Self {
            verb,
            total,
            enabled: total > 1 && io::stderr().is_terminal(),
        }
    }

    /// Show that page `done` of the selection (1-based) is being handled.
    pub fn report(&self, done: usize) {
        if self.enabled {
            let mut err = io::stderr().lock();
            let _ = write!(err, "\r{} page {done}/{}...", self.verb, self.total);
            let _ = err.flush();
        }
    }

    /// Erase the progress line.
    pub fn finish(&self) {
        if self.enabled {
            let mut err = io::stderr().lock();
            let _ = write!(err, "\r\x1b[2K");
            let _ = err.flush();
        }
    }
}
