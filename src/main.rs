/// Program Diagnostic - workspace checks for Solana program sources
///
/// The main entry point for the scanner. It parses command-line arguments,
/// sets up logging and runs the diagnostic. With no arguments every setting
/// takes its compiled-in default.

use anyhow::Result;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::LevelFilter;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use program_diagnostic::app::run_diagnostic;
use program_diagnostic::config::{Config, DEFAULT_LOG_FILE};
use program_diagnostic::utils::output_formatter;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "program_diagnostic",
    version,
    about = "Scans a Solana program workspace for source and dependency problems",
    long_about = "Scans a Solana program workspace and writes a flat text report of:
- Rust sources using ProgramResult
- Rust sources with unbalanced braces, parentheses or brackets
- Cargo.toml dependencies whose version or path differs from the pinned table"
)]
struct Args {
    /// Path to JSON configuration file
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Workspace root directory
    #[arg(long = "root")]
    root: Option<PathBuf>,

    /// Source directory to check, relative to the root
    #[arg(long = "source-dir")]
    source_dir: Option<PathBuf>,

    /// Text report path
    #[arg(long = "report")]
    report: Option<PathBuf>,

    /// Also export results to a JSON file
    #[arg(long = "json")]
    json: Option<PathBuf>,

    /// Suppress the terminal summary
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path, appended to on every run
    #[arg(long = "log-file", default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

/// Main entry point function
fn main() -> Result<()> {
    let start_time = Instant::now();

    let args = Args::parse();

    setup_logging(&args);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{:#}", e);
            process::exit(2);
        }
    };

    let Some(results) = run_diagnostic(&config)? else {
        return Ok(());
    };

    if !args.quiet {
        println!(
            "{}",
            output_formatter::format_summary(&results, start_time.elapsed())
        );
        println!("{} {}", "Report:".green(), config.report_file.display());
    }

    Ok(())
}

/// Load the configuration file (if any) and apply command-line overrides
fn build_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(args.config.as_deref())?;

    if let Some(root) = &args.root {
        config.root = root.clone();
    }
    if let Some(source_dir) = &args.source_dir {
        config.source_dir = source_dir.clone();
    }
    if let Some(report) = &args.report {
        config.report_file = report.clone();
    }
    if args.json.is_some() {
        config.json_report = args.json.clone();
    }

    Ok(config)
}

/// Sends every log line to the log file and to the console (stderr)
struct ConsoleAndFile<C> {
    file: File,
    console: C,
}

impl<C: Write> Write for ConsoleAndFile<C> {
    // Both sinks are always attempted; the file write's error wins.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let to_file = self.file.write_all(buf);
        let to_console = self.console.write_all(buf);
        to_file.and(to_console)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let to_file = self.file.flush();
        let to_console = self.console.flush();
        to_file.and(to_console)
    }
}

/// Set up logging with file and console output
fn setup_logging(args: &Args) {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        writeln!(
            buf,
            "{} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            record.level(),
            record.args()
        )
    });

    // Stay on stderr alone if the log file cannot be opened
    if let Ok(file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.log_file)
    {
        builder.write_style(env_logger::WriteStyle::Never);
        builder.target(env_logger::Target::Pipe(Box::new(ConsoleAndFile {
            file,
            console: io::stderr(),
        })));
    }

    builder.init();
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Console that always fails, like a closed pipe
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_log_line_reaches_file_when_console_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let file = OpenOptions::new().create(true).append(true).open(&path).unwrap();
        let mut sink = ConsoleAndFile {
            file,
            console: ClosedPipe,
        };

        let line = b"2026-01-01 00:00:00,000 - INFO - Starting diagnostic scan...\n";
        let err = sink.write(line).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert!(sink.flush().is_err());

        assert_eq!(std::fs::read(&path).unwrap(), line);
    }
}
