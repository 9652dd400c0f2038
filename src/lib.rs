/// Program Diagnostic - workspace checks for Solana program sources
///
/// This library scans Rust sources for delimiter imbalance and use of
/// `ProgramResult`, and scans `Cargo.toml` manifests for dependencies whose
/// version or path differs from a pinned expectation table.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

// Re-export main types for convenience
pub use crate::config::Config;
pub use crate::core::expectations::{ExpectationEntry, ExpectationTable};
pub use crate::core::scanner::{ScanResult, WorkspaceScanner};
pub use crate::error::DiagnosticError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a workspace with the given configuration and return the results
///
/// This is a convenience function for simple use cases; it writes no report.
pub fn scan_workspace(config: &Config) -> Result<ScanResult, DiagnosticError> {
    Ok(WorkspaceScanner::new(config)?.scan())
}

/// Command-line application functionality
pub mod app {
    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::config::Config;
    use crate::core::scanner::{ScanResult, WorkspaceScanner};
    use crate::utils::output_formatter;

    /// Run a full diagnostic: scan the workspace, then write the reports.
    ///
    /// Returns `Ok(None)` without writing anything when the root directory
    /// does not exist.
    pub fn run_diagnostic(config: &Config) -> Result<Option<ScanResult>> {
        info!("Starting diagnostic scan...");

        if !config.root.exists() {
            error!("Directory {} does not exist", config.root.display());
            return Ok(None);
        }

        let scanner = WorkspaceScanner::new(config).context("Invalid scanner configuration")?;
        let results = scanner.scan();

        output_formatter::write_report(&results, &config.report_file)
            .context("Failed to generate diagnostic report")?;

        if let Some(json_path) = &config.json_report {
            output_formatter::export_results_json(&results, json_path)
                .context("Failed to export JSON results")?;
        }

        Ok(Some(results))
    }
}
