/// Workspace scanner
///
/// Walks the workspace, runs the source checks over the source directory and
/// the manifest checks over every manifest under the root, and collects the
/// files that produced issues.

use std::path::Path;

use log::info;
use serde::Serialize;

use crate::config::Config;
use crate::core::analyzer::analyze_source_file;
use crate::core::expectations::ExpectationTable;
use crate::core::manifest::analyze_manifest_file;
use crate::core::Issue;
use crate::error::Result;
use crate::utils::file_utils::{find_files, FileNamePattern};

/// Issues found in one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileIssues {
    pub path: String,
    pub issues: Vec<Issue>,
}

/// Files with at least one issue, in the order they were scanned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ScanResult {
    files: Vec<FileIssues>,
}

impl ScanResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the issues for a file. Files without issues are not kept.
    pub fn record(&mut self, path: impl Into<String>, issues: Vec<Issue>) -> bool {
        if issues.is_empty() {
            return false;
        }
        self.files.push(FileIssues {
            path: path.into(),
            issues,
        });
        true
    }

    pub fn get(&self, path: &str) -> Option<&[Issue]> {
        self.files
            .iter()
            .find(|file| file.path == path)
            .map(|file| file.issues.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileIssues> {
        self.files.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files with issues
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn total_issues(&self) -> usize {
        self.files.iter().map(|file| file.issues.len()).sum()
    }
}

/// Runs both checking passes over a workspace
pub struct WorkspaceScanner<'a> {
    config: &'a Config,
    source_pattern: FileNamePattern,
    manifest_pattern: FileNamePattern,
}

impl<'a> WorkspaceScanner<'a> {
    pub fn new(config: &'a Config) -> Result<Self> {
        Ok(Self {
            config,
            source_pattern: FileNamePattern::new(&config.source_pattern)?,
            manifest_pattern: FileNamePattern::new(&config.manifest_name)?,
        })
    }

    pub fn expectations(&self) -> &ExpectationTable {
        &self.config.expectations
    }

    /// Scan the configured workspace
    pub fn scan(&self) -> ScanResult {
        let mut result = ScanResult::new();

        let source_root = self.config.source_root();
        self.scan_sources(&source_root, &mut result);
        self.scan_manifests(&self.config.root, &mut result);

        info!(
            "Scan finished: {} file(s) with {} issue(s)",
            result.len(),
            result.total_issues()
        );
        result
    }

    fn scan_sources(&self, source_root: &Path, result: &mut ScanResult) {
        let files = find_files(source_root, &self.source_pattern);
        info!("Checking {} source file(s) under {}", files.len(), source_root.display());

        for file in files {
            let issues = analyze_source_file(&file);
            result.record(file.display().to_string(), issues);
        }
    }

    fn scan_manifests(&self, root: &Path, result: &mut ScanResult) {
        let files = find_files(root, &self.manifest_pattern);
        info!("Checking {} manifest(s) under {}", files.len(), root.display());

        for file in files {
            let issues = analyze_manifest_file(&file, self.expectations());
            result.record(file.display().to_string(), issues);
        }
    }
}
