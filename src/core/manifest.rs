/// Cargo.toml dependency checks
///
/// Compares the dependencies declared in a manifest against the
/// expectation table and reports every version or path that deviates.

use std::fmt;
use std::path::Path;

use log::{debug, warn};
use toml::Value;

use crate::core::expectations::{ExpectationEntry, ExpectationTable};
use crate::core::Issue;
use crate::utils::file_utils::read_text_file;

/// Dependency sections inspected, in order. Dotted names are nested tables.
pub const DEPENDENCY_SECTIONS: [&str; 4] = [
    "dependencies",
    "dev-dependencies",
    "build-dependencies",
    "workspace.dependencies",
];

/// Why a manifest could not be loaded
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{message} (line {line})")]
    Parse { message: String, line: usize },
}

/// Analyze a manifest on disk.
///
/// A read or parse failure is returned as the only issue; this function never
/// fails.
pub fn analyze_manifest_file(file_path: &Path, expectations: &ExpectationTable) -> Vec<Issue> {
    debug!("Analyzing manifest: {}", file_path.display());

    match load_manifest(file_path) {
        Ok(document) => check_manifest(&document, &file_path.display().to_string(), expectations),
        Err(e) => {
            warn!("Could not load {}: {}", file_path.display(), e);
            vec![format!("Error reading Cargo.toml: {}", e)]
        }
    }
}

/// Read and parse a TOML document
pub fn load_manifest(file_path: &Path) -> Result<Value, ManifestError> {
    let text = read_text_file(file_path)?;
    toml::from_str(&text).map_err(|e| {
        let line = e
            .span()
            .and_then(|span| text.get(..span.start))
            .map_or(1, |prefix| prefix.matches('\n').count() + 1);
        ManifestError::Parse {
            message: e.message().to_string(),
            line,
        }
    })
}

/// Check an already parsed manifest. `label` names the file in issue text.
pub fn check_manifest(document: &Value, label: &str, expectations: &ExpectationTable) -> Vec<Issue> {
    let mut issues = Vec::new();

    for section_name in DEPENDENCY_SECTIONS {
        let Some(section) = lookup_section(document, section_name) else {
            continue;
        };

        for expected in expectations.iter() {
            if let Some(declared) = section.get(&expected.dependency_name) {
                check_dependency(declared, expected, label, &mut issues);
            }
        }
    }

    issues
}

/// Resolve a dotted section name to a table, if the document has one there
fn lookup_section<'a>(document: &'a Value, dotted: &str) -> Option<&'a toml::Table> {
    dotted
        .split('.')
        .try_fold(document, |value, key| value.get(key))?
        .as_table()
}

fn check_dependency(
    declared: &Value,
    expected: &ExpectationEntry,
    label: &str,
    issues: &mut Vec<Issue>,
) {
    let dep = &expected.dependency_name;

    match declared {
        Value::String(version) => {
            if *version != expected.required_version {
                issues.push(format!(
                    "{} in {}: version {}, expected {}",
                    dep, label, version, expected.required_version
                ));
            }
        }
        Value::Table(fields) => {
            let version = fields.get("version");
            let path = fields.get("path");

            if !matches_str(version, &expected.required_version) {
                issues.push(format!(
                    "{} in {}: version {}, expected {}",
                    dep,
                    label,
                    FieldDisplay(version),
                    expected.required_version
                ));
            }
            if !matches_str(path, &expected.required_path) {
                issues.push(format!(
                    "{} in {}: path {}, expected {}",
                    dep,
                    label,
                    FieldDisplay(path),
                    expected.required_path
                ));
            }
        }
        // Booleans, arrays and the like are not dependency specs.
        _ => {}
    }
}

fn matches_str(value: Option<&Value>, expected: &str) -> bool {
    value.and_then(Value::as_str) == Some(expected)
}

/// Renders a table sub-field for issue text; absent fields print as `None`
struct FieldDisplay<'a>(Option<&'a Value>);

impl fmt::Display for FieldDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            None => f.write_str("None"),
            Some(Value::String(s)) => f.write_str(s),
            Some(other) => write!(f, "{}", other),
        }
    }
}
