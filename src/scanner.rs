/*!
 * Directory scanning: builds a `DirectoryNode` tree from the file system
 */

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use glob_match::glob_match;
use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanOptions;
use crate::error::Result;
use crate::types::{DirectoryNode, FileNode};
use crate::{ensure, error};

/// Prefix marking hidden entries
const HIDDEN_PREFIX: char = '.';

/// Scanner statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannerStatistics {
    /// Number of directories entered
    pub directories_scanned: usize,
    /// Number of file entries recorded
    pub files_found: usize,
    /// Entries left out because they are hidden or match an ignore pattern
    pub entries_skipped: usize,
    /// Directories whose listing was cut short by a permission error
    pub permission_denied: Vec<PathBuf>,
}

/// Scanner for directory contents
pub struct Scanner {
    /// Scan options
    options: ScanOptions,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Scanner statistics
    statistics: RefCell<ScannerStatistics>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(options: ScanOptions, progress: Arc<ProgressBar>) -> Self {
        Self {
            options,
            progress,
            statistics: RefCell::new(ScannerStatistics::default()),
        }
    }

    /// Get scanner statistics
    pub fn get_statistics(&self) -> ScannerStatistics {
        self.statistics.borrow().clone()
    }

    /// Scan `root` and return its tree
    ///
    /// Fails with `InvalidInputPath` when `root` is not a directory.
    pub fn scan(&self, root: &Path) -> Result<DirectoryNode> {
        ensure!(root.is_dir(), InvalidInputPath, "{}", root.display());

        self.build(root)?
            .ok_or_else(|| error!(InvalidInputPath, "{}", root.display()))
    }

    /// Build the tree rooted at `path`
    ///
    /// Returns `None` only when the depth limit excludes the directory itself,
    /// which cannot happen for the root (depth 0).
    pub fn build(&self, path: &Path) -> Result<Option<DirectoryNode>> {
        self.build_directory(path, 0)
    }

    /// Build one directory at `depth` below the root
    fn build_directory(&self, path: &Path, depth: usize) -> Result<Option<DirectoryNode>> {
        if self.options.max_depth.is_some_and(|max| depth > max) {
            return Ok(None);
        }

        let name = if depth == 0 {
            path.to_string_lossy().into_owned()
        } else {
            base_name(path)
        };
        let mut node = DirectoryNode::new(name);

        log::debug!("Scanning {} (depth {})", path.display(), depth);
        self.progress.set_message(format!("📂 {}", path.display()));
        self.statistics.borrow_mut().directories_scanned += 1;

        // The listing itself is produced by walkdir; `max_depth(1)` keeps it
        // to the immediate entries and leaves the order untouched.
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if is_permission_denied(&e) => {
                    log::warn!("Permission denied, skipping contents of {}", path.display());
                    self.statistics
                        .borrow_mut()
                        .permission_denied
                        .push(path.to_path_buf());
                    break;
                }
                Err(e) => return Err(e.into()),
            };

            let entry_name = entry.file_name().to_string_lossy().into_owned();
            if self.should_skip(&entry_name) {
                log::debug!("Skipping {}", entry.path().display());
                self.statistics.borrow_mut().entries_skipped += 1;
                continue;
            }

            if is_directory(&entry) {
                if let Some(child) = self.build_directory(entry.path(), depth + 1)? {
                    node.subdirectories.push(child);
                }
            } else {
                node.files.push(FileNode::new(entry_name));
                self.statistics.borrow_mut().files_found += 1;
                self.progress.inc(1);
            }
        }

        Ok(Some(node))
    }

    /// Check if an entry should be left out of the tree
    pub fn should_skip(&self, name: &str) -> bool {
        if !self.options.include_hidden && name.starts_with(HIDDEN_PREFIX) {
            return true;
        }

        self.options
            .ignore_patterns
            .iter()
            .any(|pattern| glob_match(pattern, name))
    }
}

/// Base name of a path, falling back to the whole path for `..`-like inputs
fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

fn is_permission_denied(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == io::ErrorKind::PermissionDenied)
}

/// Whether an entry is a directory, following symbolic links
fn is_directory(entry: &DirEntry) -> bool {
    if entry.file_type().is_dir() {
        return true;
    }
    if !entry.path_is_symlink() {
        return false;
    }

    match fs::metadata(entry.path()) {
        Ok(metadata) => metadata.is_dir(),
        Err(e) => {
            log::debug!("Unresolvable link {}: {}", entry.path().display(), e);
            false
        }
    }
}
