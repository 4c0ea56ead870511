use std::path::{Path, PathBuf};

use colored::Colorize;
use walkdir::WalkDir;

use crate::config::is_matched_name;

/// A traversal entry whose file name carries the matched suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedFile {
    /// Path as produced by the walker, usable for opening the file.
    pub path: PathBuf,
    /// Path relative to the traversal root, used in entry headers.
    pub relative_path: PathBuf,
}

impl MatchedFile {
    pub fn display_path(&self) -> String {
        self.relative_path.to_string_lossy().into_owned()
    }
}

/// Lazy walk over `root` yielding matched files in walker order.
///
/// Directory symlinks are not followed. Entries the walker cannot access are
/// skipped and counted; the walk itself never fails.
pub struct Scanner {
    root: PathBuf,
    walker: walkdir::IntoIter,
    verbose: bool,
    skipped_count: usize,
}

impl Scanner {
    pub fn new(root: &Path, verbose: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            walker: WalkDir::new(root).min_depth(1).into_iter(),
            verbose,
            skipped_count: 0,
        }
    }

    /// Number of traversal entries skipped so far because they could not be accessed.
    pub fn skipped_count(&self) -> usize {
        self.skipped_count
    }

    fn relative_to_root(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

impl Iterator for Scanner {
    type Item = MatchedFile;

    fn next(&mut self) -> Option<MatchedFile> {
        loop {
            let entry = match self.walker.next()? {
                Ok(e) => e,
                Err(e) => {
                    self.skipped_count += 1;
                    if self.verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            if !is_matched_name(&entry.file_name().to_string_lossy()) {
                continue;
            }

            // `path().is_dir()` follows symlinks, so a link to a directory is
            // skipped while a dangling link is still yielded.
            if entry.file_type().is_dir() || entry.path().is_dir() {
                continue;
            }

            let path = entry.into_path();
            let relative_path = self.relative_to_root(&path);
            return Some(MatchedFile {
                path,
                relative_path,
            });
        }
    }
}
