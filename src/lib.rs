/*!
 * TreeDump - Print a directory tree and save/restore it as XML
 *
 * The library scans a directory into an owned `DirectoryNode` tree, renders
 * it as an indented listing and converts it to and from a small XML schema.
 */

use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;

pub mod config;
pub mod error;
pub mod printer;
pub mod reader;
pub mod report;
pub mod scanner;
pub mod types;
pub mod writer;


// Re-export main components for easier access
pub use config::{Config, ScanOptions, Source};
pub use error::{Result, TreeDumpError};
pub use printer::TreePrinter;
pub use reader::XmlReader;
pub use report::{ReportFormat, Reporter, ScanReport};
pub use scanner::{Scanner, ScannerStatistics};
pub use types::{DirectoryNode, FileNode};
pub use writer::XmlWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build the tree under `path` without progress reporting
///
/// `None` means the depth limit excluded `path` itself.
pub fn build(
    path: impl AsRef<Path>,
    include_hidden: bool,
    max_depth: Option<usize>,
) -> Result<Option<DirectoryNode>> {
    let options = ScanOptions {
        include_hidden,
        max_depth,
        ..ScanOptions::default()
    };
    Scanner::new(options, Arc::new(ProgressBar::hidden())).build(path.as_ref())
}

/// Render the tree as indented lines
pub fn render(root: &DirectoryNode) -> Vec<String> {
    TreePrinter::new().render(root)
}

/// Save the tree as an XML document at `path`
pub fn save(root: &DirectoryNode, path: impl AsRef<Path>) -> Result<()> {
    XmlWriter::new().save(root, path.as_ref())
}

/// Load a tree from the XML document at `path`
pub fn load(path: impl AsRef<Path>) -> Result<DirectoryNode> {
    XmlReader::new().load(path.as_ref())
}
