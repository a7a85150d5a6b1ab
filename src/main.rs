/*!
 * Command-line interface for TreeDump
 */

use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use treedump::config::{Args, Config, Source};
use treedump::error::Result;
use treedump::printer::TreePrinter;
use treedump::reader::XmlReader;
use treedump::report::{ReportFormat, Reporter, ScanReport};
use treedump::scanner::Scanner;
use treedump::writer::XmlWriter;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command line arguments
    let args = Args::parse();

    if let Some(shell) = args.generate {
        clap_complete::generate(shell, &mut Args::command(), "treedump", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    // Create configuration
    let config = Config::from_args(args);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    // Validate configuration
    config.validate()?;

    // Start timing the scan or load
    let start_time = Instant::now();
    let printer = TreePrinter::new();

    let report = match &config.source {
        Source::Load(path) => {
            let root = XmlReader::new().load(path)?;
            let duration = start_time.elapsed();

            println!("Directory structure from file '{}':", path.display());
            printer.write_to(&root, io::stdout().lock())?;

            ScanReport::from_tree(path.display().to_string(), &root, duration)
        }
        Source::Scan(dir) => {
            // Create progress spinner
            let progress = ProgressBar::new_spinner();
            progress.set_style(
                ProgressStyle::default_spinner()
                    .template("{spinner:.green} {prefix:.bold.cyan} {pos} files {wide_msg:.dim.white}")
                    .unwrap_or_else(|_| ProgressStyle::default_spinner()),
            );
            progress.set_prefix("🔎 Scanning");
            progress.enable_steady_tick(Duration::from_millis(100));

            // Create scanner and build the tree
            let scanner = Scanner::new(config.scan.clone(), Arc::new(progress.clone()));
            let scanned = scanner.scan(dir);
            let duration = start_time.elapsed();
            progress.finish_and_clear();
            let root = scanned?;

            println!("Directory structure of '{}':", dir.display());
            printer.write_to(&root, io::stdout().lock())?;

            // Write XML output
            if let Some(target) = &config.save_to {
                XmlWriter::new().save(&root, target)?;
                println!("Directory structure saved to '{}'", target.display());
            }

            ScanReport::from_tree(dir.display().to_string(), &root, duration)
                .with_statistics(&scanner.get_statistics())
        }
    };

    // Print the summary table
    if config.stats {
        Reporter::new(ReportFormat::ConsoleTable).print_report(&report);
    }

    Ok(())
}
