//! Global error handling for treedump
//!
//! This module provides a centralized error type shared by the scanner,
//! the XML reader/writer and the command-line front end.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Global error type for treedump operations
#[derive(Error, Debug)]
pub enum TreeDumpError {
    /// The scan target is not a directory
    #[error("'{0}' is not a directory")]
    InvalidInputPath(String),

    /// Document does not describe a directory tree
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A recognized element lacks a required attribute
    #[error("Element <{element}> is missing required attribute '{attribute}'")]
    MissingAttribute {
        element: String,
        attribute: &'static str,
    },

    /// The save destination cannot be created or written
    #[error("Cannot write to '{}': {source}", path.display())]
    Destination { path: PathBuf, source: io::Error },

    /// XML processing errors
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Directory traversal errors
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<quick_xml::events::attributes::AttrError> for TreeDumpError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Self::Xml(err.into())
    }
}

/// Specialized Result type for treedump operations
pub type Result<T> = std::result::Result<T, TreeDumpError>;

/// Creates a TreeDumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::TreeDumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Allow converting TreeDumpError to io::Error so `main` can return io::Result
impl From<TreeDumpError> for io::Error {
    fn from(err: TreeDumpError) -> Self {
        match err {
            TreeDumpError::Io(e) => e,
            TreeDumpError::Destination { source, .. } => source,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_dir(is_dir: bool) -> Result<()> {
        crate::ensure!(is_dir, InvalidInputPath, "{}", "notes.txt");
        Ok(())
    }

    #[test]
    fn test_ensure_macro() {
        assert!(check_dir(true).is_ok());
        let err = check_dir(false).unwrap_err();
        assert!(matches!(err, TreeDumpError::InvalidInputPath(ref p) if p == "notes.txt"));
        assert_eq!(err.to_string(), "'notes.txt' is not a directory");
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = TreeDumpError::MissingAttribute {
            element: "file".to_string(),
            attribute: "name",
        };
        assert_eq!(
            err.to_string(),
            "Element <file> is missing required attribute 'name'"
        );
    }

    #[test]
    fn test_into_io_error_keeps_kind() {
        let err = TreeDumpError::Destination {
            path: PathBuf::from("/nope/out.xml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::PermissionDenied);
    }
}
