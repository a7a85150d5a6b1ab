/*!
 * Core types and data structures for TreeDump
 */

/// Represents a single non-directory entry (regular file, link, device, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNode {
    /// Base name of the entry
    pub name: String,
}

impl FileNode {
    /// Create a new file node
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Represents a directory in the file system
///
/// The scan root carries the path exactly as it was given to the scanner,
/// every nested directory carries only its base name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryNode {
    /// Directory name
    pub name: String,
    /// Files in listing order
    pub files: Vec<FileNode>,
    /// Subdirectories in listing order
    pub subdirectories: Vec<DirectoryNode>,
}

impl DirectoryNode {
    /// Create an empty directory node
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
            subdirectories: Vec::new(),
        }
    }

    /// Builder-style helper appending a file
    pub fn with_file(mut self, name: impl Into<String>) -> Self {
        self.files.push(FileNode::new(name));
        self
    }

    /// Builder-style helper appending a subdirectory
    pub fn with_subdirectory(mut self, dir: DirectoryNode) -> Self {
        self.subdirectories.push(dir);
        self
    }

    /// True when the directory holds neither files nor subdirectories
    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subdirectories.is_empty()
    }

    /// Total number of files in this subtree
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subdirectories
                .iter()
                .map(DirectoryNode::file_count)
                .sum::<usize>()
    }

    /// Total number of directories in this subtree, including `self`
    pub fn directory_count(&self) -> usize {
        1 + self
            .subdirectories
            .iter()
            .map(DirectoryNode::directory_count)
            .sum::<usize>()
    }

    /// Deepest directory level below this node (0 when it has no subdirectories)
    pub fn max_depth(&self) -> usize {
        self.subdirectories
            .iter()
            .map(|d| d.max_depth() + 1)
            .max()
            .unwrap_or(0)
    }
}
