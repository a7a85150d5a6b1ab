/*!
 * Indented text rendering of a directory tree
 */

use std::io::{self, Write};

use crate::types::DirectoryNode;

/// Indentation added per level
const INDENT: &str = "  ";

/// Renders a tree as one name per line, files before subdirectories
#[derive(Debug, Default, Clone, Copy)]
pub struct TreePrinter;

impl TreePrinter {
    /// Create a new printer
    pub fn new() -> Self {
        Self
    }

    /// Render the tree into lines (pre-order, depth first)
    pub fn render(&self, root: &DirectoryNode) -> Vec<String> {
        let mut lines = Vec::new();
        Self::render_directory(root, 0, &mut lines);
        lines
    }

    /// Write the rendered tree to `out`, one line at a time
    pub fn write_to<W: Write>(&self, root: &DirectoryNode, mut out: W) -> io::Result<()> {
        for line in self.render(root) {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    fn render_directory(dir: &DirectoryNode, level: usize, lines: &mut Vec<String>) {
        lines.push(format!("{}{}", INDENT.repeat(level), dir.name));

        let child_indent = INDENT.repeat(level + 1);
        for file in &dir.files {
            lines.push(format!("{}{}", child_indent, file.name));
        }
        for sub in &dir.subdirectories {
            Self::render_directory(sub, level + 1, lines);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_before_subdirectories() {
        let tree = DirectoryNode::new("root")
            .with_subdirectory(
                DirectoryNode::new("sub")
                    .with_file("b.txt")
                    .with_subdirectory(DirectoryNode::new("deep").with_file("c.txt")),
            )
            .with_file("a.txt")
            .with_subdirectory(DirectoryNode::new("other"));

        let lines = TreePrinter::new().render(&tree);
        assert_eq!(
            lines,
            vec![
                "root",
                "  a.txt",
                "  sub",
                "    b.txt",
                "    deep",
                "      c.txt",
                "  other",
            ]
        );
    }

    #[test]
    fn test_write_to() -> io::Result<()> {
        let tree = DirectoryNode::new("/tmp/x").with_file("f");
        let mut buf = Vec::new();
        TreePrinter::new().write_to(&tree, &mut buf)?;
        assert_eq!(String::from_utf8(buf).unwrap(), "/tmp/x\n  f\n");
        Ok(())
    }
}
