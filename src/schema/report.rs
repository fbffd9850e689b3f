//! Validation report types
//!
//! Issues are data, never errors: a report is always produced, and `ok`
//! only says whether any issue reached the `error` level.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueLevel {
    /// Schema violation; the dataset is inconsistent for rendering
    Error,
    /// Soft data quality concern
    Warning,
}

impl IssueLevel {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueLevel::Error => "error",
            IssueLevel::Warning => "warning",
        }
    }
}

impl fmt::Display for IssueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub level: IssueLevel,
    /// Structural locator, e.g. `$.110000.metrics.gdp.value`
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Error,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn warning(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level: IssueLevel::Warning,
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == IssueLevel::Error
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.path, self.message)
    }
}

/// Counts over a validation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSummary {
    /// Number of top-level entries, malformed ones included
    pub provinces: usize,
    pub errors: usize,
    pub warnings: usize,
}

/// Result of validating the province dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True iff there are no error-level issues
    pub ok: bool,
    pub summary: ValidationSummary,
    /// Findings in input order
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Builds a report, deriving counts and `ok` from the issues.
    pub fn from_issues(provinces: usize, issues: Vec<ValidationIssue>) -> Self {
        let errors = issues.iter().filter(|i| i.is_error()).count();
        let warnings = issues.len() - errors;
        Self {
            ok: errors == 0,
            summary: ValidationSummary {
                provinces,
                errors,
                warnings,
            },
            issues,
        }
    }

    /// Error-level issues in order
    pub fn errors(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| i.is_error())
    }

    /// Warning-level issues in order
    pub fn warnings(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.issues.iter().filter(|i| !i.is_error())
    }

    /// Issues reported at exactly `path`
    pub fn issues_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |i| i.path == path)
    }
}
