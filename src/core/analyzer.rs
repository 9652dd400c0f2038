/// Source file analyzer
///
/// Applies the textual checks to a single Rust source file: use of the
/// `ProgramResult` type and raw delimiter balance. The balance check counts
/// characters only, so delimiters inside strings or comments are counted too.

use std::path::Path;

use log::{debug, warn};

use crate::core::Issue;
use crate::utils::file_utils::read_text_file;

/// API symbol whose presence is reported
pub const PROGRAM_RESULT_SYMBOL: &str = "ProgramResult";

/// Reported when the source mentions `ProgramResult`.
///
/// The version is fixed text and does not follow the expectation table.
pub const PROGRAM_RESULT_WARNING: &str =
    "ProgramResult used, may be incompatible with solana-program v2.1.0";

/// (open, close, issue) for each delimiter pair, in report order
const DELIMITER_PAIRS: [(char, char, &str); 3] = [
    ('{', '}', "Unbalanced braces"),
    ('(', ')', "Unbalanced parentheses"),
    ('[', ']', "Unbalanced brackets"),
];

/// Analyze a source file on disk.
///
/// A read failure is returned as the only issue; this function never fails.
pub fn analyze_source_file(file_path: &Path) -> Vec<Issue> {
    debug!("Analyzing source file: {}", file_path.display());

    match read_text_file(file_path) {
        Ok(content) => analyze_source(&content),
        Err(e) => {
            warn!("Could not read {}: {}", file_path.display(), e);
            vec![format!("Error reading file: {}", e)]
        }
    }
}

/// Analyze source text that is already in memory
pub fn analyze_source(content: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    if content.contains(PROGRAM_RESULT_SYMBOL) {
        issues.push(PROGRAM_RESULT_WARNING.to_string());
    }

    let mut counts = [[0usize; 2]; 3];
    for c in content.chars() {
        for (idx, (open, close, _)) in DELIMITER_PAIRS.iter().enumerate() {
            if c == *open {
                counts[idx][0] += 1;
            } else if c == *close {
                counts[idx][1] += 1;
            }
        }
    }

    for ((_, _, issue), [opened, closed]) in DELIMITER_PAIRS.iter().zip(counts) {
        if opened != closed {
            issues.push(issue.to_string());
        }
    }

    issues
}
