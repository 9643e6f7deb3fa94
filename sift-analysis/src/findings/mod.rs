//! Findings and text edits.
//!
//! A finding is the unit of rule output: where, what, how bad, and an
//! optional autofix. Edits are plain byte-span replacements applied against
//! the text the finding was computed from.

pub mod edits;
pub mod types;

pub use edits::{apply_edits, Edit};
pub use types::{Finding, Severity};
