//! Walk a directory tree and bundle every matched file into one output.
//!
//! The collector is strictly sequential: each traversal entry is filtered,
//! read and written before the walker is advanced again. Nothing about an
//! entry is kept once its block has been written.
//!
//! ## Module Structure
//!
//! - `scanner`: lazy directory walk yielding matched files
//! - `entry`: rendering of a single bundle entry

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::OUTPUT_FILE_NAME;

pub mod entry;
pub mod scanner;

pub use entry::{READ_ERROR_PREFIX, write_entry};
pub use scanner::{MatchedFile, Scanner};

/// Counters produced by a single collection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    /// Entries written to the output, including those recorded as read errors.
    pub files_collected: usize,
    /// Matched files whose content was replaced by a read error.
    pub read_error_count: usize,
    /// Traversal entries the walker could not access.
    pub skipped_count: usize,
}

pub struct Collector {
    root: PathBuf,
    verbose: bool,
}

impl Collector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            verbose: false,
        }
    }

    /// Print warnings for skipped paths and unreadable files to stderr.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Walk the root and write one entry per matched file to `writer`.
    ///
    /// A file that cannot be read is recorded inline and the walk continues.
    /// Only a failure to write to `writer` aborts the run.
    pub fn collect_to<W: Write>(&self, writer: &mut W) -> Result<CollectSummary> {
        let mut summary = CollectSummary::default();
        let mut scanner = Scanner::new(&self.root, self.verbose);

        for file in scanner.by_ref() {
            let display_path = file.display_path();
            let contents = read_contents(&file.path);

            if let Err(e) = &contents {
                summary.read_error_count += 1;
                if self.verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        display_path,
                        e
                    );
                }
            }

            write_entry(writer, &display_path, &contents)
                .with_context(|| format!("Failed to write entry for {}", display_path))?;
            summary.files_collected += 1;
        }

        summary.skipped_count = scanner.skipped_count();
        Ok(summary)
    }

    /// Create (or truncate) `output` and collect into it.
    ///
    /// The file is closed when this returns, on success and on error alike.
    pub fn collect_into_file(&self, output: &Path) -> Result<CollectSummary> {
        let file = File::create(output)
            .with_context(|| format!("Failed to create output file: {}", output.display()))?;
        let mut writer = BufWriter::new(file);

        let summary = self
            .collect_to(&mut writer)
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;

        writer
            .flush()
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;

        Ok(summary)
    }
}

/// Read a matched file as UTF-8 text.
///
/// Anything that does not resolve to a regular file (FIFOs, devices, dangling
/// links) is rejected without being opened, since reading it may never end.
fn read_contents(path: &Path) -> io::Result<String> {
    let meta = fs::metadata(path)?;
    if !meta.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }
    fs::read_to_string(path)
}

/// Collect every matched file under the current directory into [`OUTPUT_FILE_NAME`].
pub fn run(verbose: bool) -> Result<CollectSummary> {
    Collector::new(".")
        .verbose(verbose)
        .collect_into_file(Path::new(OUTPUT_FILE_NAME))
}
