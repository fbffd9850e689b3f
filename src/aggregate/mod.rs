//! Company dataset aggregation
//!
//! Counts and revenue sums over the semiconductor and AI company lists.
//! Inputs are read, never mutated.

mod summary;

pub use summary::{summarize, CompanySummary, Revenue};
