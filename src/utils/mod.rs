/// Utility modules for the diagnostic scanner
///
/// File discovery and reading, plus report and summary formatting.

pub mod file_utils;
pub mod output_formatter;
