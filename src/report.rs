/*!
 * Reporting functionality for TreeDump
 *
 * Renders a short summary of a scanned or loaded tree using the tabled
 * library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::scanner::ScannerStatistics;
use crate::types::DirectoryNode;

/// Summary of one run
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Directory scanned or document loaded
    pub source: String,
    /// Time taken to build or load the tree
    pub duration: Duration,
    /// Number of directories in the tree (root included)
    pub directories: usize,
    /// Number of files in the tree
    pub files: usize,
    /// Deepest directory level below the root
    pub depth: usize,
    /// Entries left out as hidden or ignored (scans only)
    pub entries_skipped: usize,
    /// Directories that could not be listed (scans only)
    pub permission_denied: usize,
}

impl ScanReport {
    /// Build a report from a finished tree
    pub fn from_tree(source: impl Into<String>, tree: &DirectoryNode, duration: Duration) -> Self {
        Self {
            source: source.into(),
            duration,
            directories: tree.directory_count(),
            files: tree.file_count(),
            depth: tree.max_depth(),
            ..Self::default()
        }
    }

    /// Attach scanner statistics
    pub fn with_statistics(mut self, stats: &ScannerStatistics) -> Self {
        self.entries_skipped = stats.entries_skipped;
        self.permission_denied = stats.permission_denied.len();
        self
    }
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.create_summary_table(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: &'static str,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Source",
                value: report.source.clone(),
            },
            SummaryRow {
                key: "⏱️ Time",
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "🗂️ Directories",
                value: report.directories.to_string(),
            },
            SummaryRow {
                key: "📄 Files",
                value: report.files.to_string(),
            },
            SummaryRow {
                key: "📏 Depth",
                value: report.depth.to_string(),
            },
        ];

        if report.entries_skipped > 0 {
            rows.push(SummaryRow {
                key: "🙈 Skipped",
                value: report.entries_skipped.to_string(),
            });
        }
        if report.permission_denied > 0 {
            rows.push(SummaryRow {
                key: "🔒 Unreadable",
                value: report.permission_denied.to_string(),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }
}
