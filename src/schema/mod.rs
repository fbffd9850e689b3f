//! Schema validation for the province dataset
//!
//! Produces a [`ValidationReport`] of errors and warnings rather than
//! rejecting data.
//!
//! # Design Principles
//!
//! - Never fails: the report is always produced
//! - No coercion: booleans are not numbers, numbers are not strings
//! - Deterministic: issue order follows input key order
//! - Malformed entries short-circuit their own deeper checks

mod report;
mod validator;

pub use report::{IssueLevel, ValidationIssue, ValidationReport, ValidationSummary};
pub use validator::{validate, REQUIRED_FIELDS};
