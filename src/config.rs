/*!
 * Configuration handling for TreeDump
 */

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::error::Result;
use crate::ensure;

/// Command-line arguments for TreeDump
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "treedump",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print a directory tree and save/restore it as XML",
    long_about = "Walks a directory, prints its structure as an indented listing and optionally saves it to (or loads it from) an XML file."
)]
pub struct Args {
    /// Directory to display
    #[clap(default_value = ".")]
    pub directory: String,

    /// Show hidden files and directories
    #[clap(short = 'a', long = "all")]
    pub all: bool,

    /// Maximum depth to descend (0 lists only the top directory)
    #[clap(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Save the directory structure to an XML file
    #[clap(short = 's', long, value_name = "FILE")]
    pub save: Option<String>,

    /// Load the directory structure from an XML file instead of scanning
    #[clap(short = 'l', long, value_name = "FILE")]
    pub load: Option<String>,

    /// Comma-separated list of glob patterns to leave out
    #[clap(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Print a summary table after the listing
    #[clap(long)]
    pub stats: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Options controlling a directory scan
#[derive(Clone, Debug, Default)]
pub struct ScanOptions {
    /// Include entries whose name starts with a dot
    pub include_hidden: bool,

    /// Deepest level to descend into (root is level 0)
    pub max_depth: Option<usize>,

    /// Glob patterns matched against entry names
    pub ignore_patterns: Vec<String>,
}

/// Where the tree comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// Scan a directory on disk
    Scan(PathBuf),
    /// Read a previously saved XML document
    Load(PathBuf),
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Tree source
    pub source: Source,

    /// Scan options (unused when loading)
    pub scan: ScanOptions,

    /// Destination of the XML dump, if any
    pub save_to: Option<PathBuf>,

    /// Print the summary table
    pub stats: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    ///
    /// Loading takes precedence over scanning when both are requested.
    pub fn from_args(args: Args) -> Self {
        let source = match args.load {
            Some(path) => Source::Load(PathBuf::from(path)),
            None => Source::Scan(PathBuf::from(args.directory)),
        };

        Self {
            source,
            scan: ScanOptions {
                include_hidden: args.all,
                max_depth: args.max_depth,
                ignore_patterns: args.ignore,
            },
            save_to: args.save.map(PathBuf::from),
            stats: args.stats,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if let Source::Scan(dir) = &self.source {
            ensure!(dir.is_dir(), InvalidInputPath, "{}", dir.display());
        }

        for pattern in &self.scan.ignore_patterns {
            ensure!(!pattern.is_empty(), Config, "empty ignore pattern");
        }

        Ok(())
    }
}
