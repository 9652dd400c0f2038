/// Output formatter for scan results
///
/// This module renders the plain text report, the optional JSON export and
/// the colored console summary.

use std::fs;
use std::path::Path;
use std::time::Duration;

use colored::Colorize;
use log::info;
use serde_json::json;

use crate::core::scanner::ScanResult;
use crate::error::{DiagnosticError, Result};

pub const REPORT_HEADER: &str = "Solana Program Diagnostic Summary";
pub const NO_ISSUES_MESSAGE: &str = "No issues found. 🎉";

/// Render the text report.
///
/// The output depends only on `results`, so an unchanged workspace always
/// renders the same bytes.
pub fn format_report(results: &ScanResult) -> String {
    let mut output = String::new();

    output.push_str(REPORT_HEADER);
    output.push('\n');
    output.push_str(&"=".repeat(40));
    output.push_str("\n\n");

    if results.is_empty() {
        output.push_str(NO_ISSUES_MESSAGE);
        output.push('\n');
        return output;
    }

    for file in results.iter() {
        output.push_str(&format!("\nFile: {}\n", file.path));
        for issue in &file.issues {
            output.push_str(&format!("  - {}\n", issue));
        }
    }

    output
}

/// Write the text report, replacing any existing file
pub fn write_report(results: &ScanResult, output_path: &Path) -> Result<()> {
    fs::write(output_path, format_report(results)).map_err(|source| {
        DiagnosticError::ReportWrite {
            path: output_path.to_path_buf(),
            source,
        }
    })?;

    if results.is_empty() {
        info!("{}", NO_ISSUES_MESSAGE);
    }
    info!("Diagnostic report generated at {}", output_path.display());

    Ok(())
}

/// Export results to a JSON file
pub fn export_results_json(results: &ScanResult, output_path: &Path) -> Result<()> {
    let document = json!({
        "files": results,
        "total_issues": results.total_issues(),
    });
    let text = serde_json::to_string_pretty(&document)?;

    fs::write(output_path, text).map_err(|source| DiagnosticError::ReportWrite {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!("JSON results exported to {}", output_path.display());
    Ok(())
}

/// Short colored summary for the terminal
pub fn format_summary(results: &ScanResult, elapsed: Duration) -> String {
    let mut output = format!("\n{}\n", "Scan Complete".bold());
    output.push_str(&format!("{} {}\n", "Files with issues:".green(), results.len()));
    output.push_str(&format!("{} {}\n", "Total issues:".green(), results.total_issues()));
    output.push_str(&format!(
        "{} {:.2} seconds\n",
        "Time elapsed:".green(),
        elapsed.as_secs_f64()
    ));

    for file in results.iter() {
        output.push_str(&format!("  {} ({})\n", file.path.cyan(), file.issues.len()));
    }

    output
}
