/// Core checks for the diagnostic scanner
///
/// This module contains the source and manifest checkers, the dependency
/// expectation table, and the workspace scanner that drives them.

pub mod analyzer;
pub mod expectations;
pub mod manifest;
pub mod scanner;

/// One human-readable diagnostic line
pub type Issue = String;
