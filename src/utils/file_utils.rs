/// File handling utilities
///
/// This module provides file discovery over a directory tree and plain text
/// reads for the checkers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use regex::Regex;
use walkdir::WalkDir;

use crate::error::{DiagnosticError, Result};

/// Glob-style pattern matched against a file name (not the full path).
///
/// `*` matches any run of characters and `?` a single character; everything
/// else is literal.
#[derive(Debug, Clone)]
pub struct FileNamePattern {
    glob: String,
    regex: Regex,
}

impl FileNamePattern {
    pub fn new(glob: &str) -> Result<Self> {
        let mut translated = String::from("^");
        for c in glob.chars() {
            match c {
                '*' => translated.push_str(".*"),
                '?' => translated.push('.'),
                other => translated.push_str(&regex::escape(&other.to_string())),
            }
        }
        translated.push('$');

        let regex = Regex::new(&translated).map_err(|source| DiagnosticError::InvalidPattern {
            pattern: glob.to_string(),
            source,
        })?;

        Ok(Self {
            glob: glob.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.glob
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.regex.is_match(file_name)
    }
}

/// Recursively collect files under `root` whose name matches `pattern`.
///
/// Symlinks are not followed into directories, but a matching symlink is
/// returned as-is, dangling or not; reading it is the checker's job. Entries
/// are visited in file name order so repeated runs see the same sequence.
/// Unreadable entries are logged and skipped. A missing `root` yields an
/// empty list.
pub fn find_files(root: &Path, pattern: &FileNamePattern) -> Vec<PathBuf> {
    if !root.is_dir() {
        warn!("Search directory not found: {}", root.display());
        return Vec::new();
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            continue;
        }

        if pattern.matches(&entry.file_name().to_string_lossy()) {
            found.push(entry.into_path());
        }
    }

    debug!(
        "Found {} file(s) matching {} under {}",
        found.len(),
        pattern.as_str(),
        root.display()
    );
    found
}

/// Read a whole file as UTF-8 text
pub fn read_text_file(file_path: &Path) -> io::Result<String> {
    fs::read_to_string(file_path)
}
