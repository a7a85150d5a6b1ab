/*!
 * XML writer implementation for TreeDump
 *
 * Layout:
 *
 * ```xml
 * <?xml version="1.0" encoding="utf-8"?>
 * <directory name="ROOT_PATH">
 *   <file name="a.txt"/>
 *   <directory name="sub">
 *     <file name="b.txt"/>
 *   </directory>
 * </directory>
 * ```
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::error::{Result, TreeDumpError};
use crate::types::{DirectoryNode, FileNode};

/// Element holding a directory
pub const DIRECTORY_TAG: &str = "directory";
/// Element holding a file
pub const FILE_TAG: &str = "file";
/// The only attribute carried by either element
pub const NAME_ATTR: &str = "name";

/// XML writer for directory trees
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlWriter;

impl XmlWriter {
    /// Create a new XML writer
    pub fn new() -> Self {
        Self
    }

    /// Write the directory tree to an XML file, replacing any existing content
    pub fn save(&self, root: &DirectoryNode, path: &Path) -> Result<()> {
        let destination = |source: io::Error| TreeDumpError::Destination {
            path: path.to_path_buf(),
            source,
        };

        // Create (or truncate) the output file
        let file = File::create(path).map_err(destination)?;
        self.write_to(root, BufWriter::new(file))
            .map_err(destination)?;

        log::debug!("Saved tree '{}' to {}", root.name, path.display());
        Ok(())
    }

    /// Serialize the tree into a string
    pub fn to_xml_string(&self, root: &DirectoryNode) -> Result<String> {
        let mut buf = Vec::new();
        self.write_to(root, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Write the complete document to `out`
    pub fn write_to<W: Write>(&self, root: &DirectoryNode, out: W) -> io::Result<()> {
        let mut xml_writer = Writer::new_with_indent(out, b' ', 2);

        // Write XML declaration
        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        // Write directory structure
        self.write_directory(root, &mut xml_writer)?;

        // Terminate the last line and push everything to the sink
        let mut out = xml_writer.into_inner();
        out.write_all(b"\n")?;
        out.flush()
    }

    /// Write a directory node: files first, then subdirectories
    fn write_directory<W: Write>(&self, dir: &DirectoryNode, writer: &mut Writer<W>) -> io::Result<()> {
        let mut start_tag = BytesStart::new(DIRECTORY_TAG);
        start_tag.push_attribute((NAME_ATTR, dir.name.as_str()));

        // Childless directories collapse into a single empty element
        if dir.is_empty() {
            return writer.write_event(Event::Empty(start_tag));
        }

        writer.write_event(Event::Start(start_tag))?;

        // Write contents
        for file in &dir.files {
            self.write_file(file, writer)?;
        }
        for sub in &dir.subdirectories {
            self.write_directory(sub, writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new(DIRECTORY_TAG)))
    }

    /// Write a file node
    fn write_file<W: Write>(&self, file: &FileNode, writer: &mut Writer<W>) -> io::Result<()> {
        let mut tag = BytesStart::new(FILE_TAG);
        tag.push_attribute((NAME_ATTR, file.name.as_str()));
        writer.write_event(Event::Empty(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_layout() -> Result<()> {
        let tree = DirectoryNode::new("root")
            .with_subdirectory(DirectoryNode::new("sub").with_file("b.txt"))
            .with_file("a.txt");

        let xml = XmlWriter::new().to_xml_string(&tree)?;
        let expected = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
                        <directory name=\"root\">\n  \
                        <file name=\"a.txt\"/>\n  \
                        <directory name=\"sub\">\n    \
                        <file name=\"b.txt\"/>\n  \
                        </directory>\n\
                        </directory>\n";
        assert_eq!(xml, expected);
        Ok(())
    }

    #[test]
    fn test_names_are_escaped() -> Result<()> {
        let tree = DirectoryNode::new("a&b").with_file("<q\">");
        let xml = XmlWriter::new().to_xml_string(&tree)?;
        assert!(xml.contains("name=\"a&amp;b\""));
        assert!(xml.contains("name=\"&lt;q&quot;&gt;\""));
        Ok(())
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("out.xml");
        let err = XmlWriter::new()
            .save(&DirectoryNode::new("root"), &target)
            .unwrap_err();
        assert!(matches!(err, TreeDumpError::Destination { .. }));
    }
}
