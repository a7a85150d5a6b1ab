/*!
 * XML reader: restores a `DirectoryNode` tree saved by `XmlWriter`
 *
 * Only `<directory>` and `<file>` elements are interpreted. Any other
 * element, together with everything nested inside it, is skipped so that
 * documents produced by newer writers still load.
 */

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{Result, TreeDumpError};
use crate::types::{DirectoryNode, FileNode};
use crate::writer::{DIRECTORY_TAG, FILE_TAG, NAME_ATTR};
use crate::{ensure, error};

/// XML reader for directory trees
#[derive(Debug, Default, Clone, Copy)]
pub struct XmlReader;

impl XmlReader {
    /// Create a new XML reader
    pub fn new() -> Self {
        Self
    }

    /// Load a tree from an XML file
    pub fn load(&self, path: &Path) -> Result<DirectoryNode> {
        let file = File::open(path)?;
        let root = self.read_from(BufReader::new(file))?;

        log::debug!(
            "Loaded tree '{}' from {} ({} files)",
            root.name,
            path.display(),
            root.file_count()
        );
        Ok(root)
    }

    /// Load a tree from an in-memory document
    pub fn from_str(&self, xml: &str) -> Result<DirectoryNode> {
        self.read_from(xml.as_bytes())
    }

    /// Load a tree from any buffered source
    pub fn read_from<R: BufRead>(&self, input: R) -> Result<DirectoryNode> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);

        let mut builder = TreeAssembler::default();
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(e) => builder.open(&e, false)?,
                Event::Empty(e) => builder.open(&e, true)?,
                Event::End(_) => builder.close(),
                // Content is only allowed inside the root element
                Event::Text(e) => builder.text(&e)?,
                Event::CData(e) => builder.text(&e)?,
                Event::Eof => break,
                // Declarations and comments carry nothing we need
                _ => {}
            }
            buf.clear();
        }

        builder.finish()
    }
}

/// Incrementally assembles the tree from a stream of element events
#[derive(Default)]
struct TreeAssembler {
    /// Directories opened but not yet closed, innermost last
    open: Vec<DirectoryNode>,
    /// Completed root directory
    root: Option<DirectoryNode>,
    /// Nesting level inside an element whose content is ignored
    skip_depth: usize,
}

impl TreeAssembler {
    fn open(&mut self, element: &BytesStart, is_empty: bool) -> Result<()> {
        if self.skip_depth > 0 {
            if !is_empty {
                self.skip_depth += 1;
            }
            return Ok(());
        }

        let tag = element.name();

        let Some(parent) = self.open.last_mut() else {
            ensure!(self.root.is_none(), MalformedDocument, "more than one root element");
            ensure!(
                tag.as_ref() == DIRECTORY_TAG.as_bytes(),
                MalformedDocument,
                "root element is <{}>, expected <{}>",
                tag_name(element),
                DIRECTORY_TAG
            );

            let node = DirectoryNode::new(name_of(element)?);
            if is_empty {
                self.root = Some(node);
            } else {
                self.open.push(node);
            }
            return Ok(());
        };

        match tag.as_ref() {
            t if t == DIRECTORY_TAG.as_bytes() => {
                let node = DirectoryNode::new(name_of(element)?);
                if is_empty {
                    parent.subdirectories.push(node);
                } else {
                    self.open.push(node);
                }
            }
            t if t == FILE_TAG.as_bytes() => {
                parent.files.push(FileNode::new(name_of(element)?));
                if !is_empty {
                    self.skip_depth = 1;
                }
            }
            _ => {
                log::debug!("Ignoring unknown element <{}>", tag_name(element));
                if !is_empty {
                    self.skip_depth = 1;
                }
            }
        }

        Ok(())
    }

    fn text(&self, content: &[u8]) -> Result<()> {
        ensure!(
            !self.open.is_empty() || content.iter().all(u8::is_ascii_whitespace),
            MalformedDocument,
            "text outside the root element"
        );
        Ok(())
    }

    fn close(&mut self) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }

        if let Some(done) = self.open.pop() {
            match self.open.last_mut() {
                Some(parent) => parent.subdirectories.push(done),
                None => self.root = Some(done),
            }
        }
    }

    fn finish(self) -> Result<DirectoryNode> {
        ensure!(
            self.open.is_empty(),
            MalformedDocument,
            "document ends inside <{}>",
            DIRECTORY_TAG
        );

        self.root
            .ok_or_else(|| error!(MalformedDocument, "no root <{}> element", DIRECTORY_TAG))
    }
}

fn tag_name(element: &BytesStart) -> String {
    String::from_utf8_lossy(element.name().as_ref()).into_owned()
}

/// Value of the `name` attribute, unescaped
fn name_of(element: &BytesStart) -> Result<String> {
    match element.try_get_attribute(NAME_ATTR)? {
        Some(attr) => Ok(attr.unescape_value()?.into_owned()),
        None => Err(TreeDumpError::MissingAttribute {
            element: tag_name(element),
            attribute: NAME_ATTR,
        }),
    }
}
