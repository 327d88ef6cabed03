//! Batch preconditions for a planning run.
//!
//! Sessions are indivisible 2-hour blocks, so a curriculum in which any
//! requirement asks for an odd number of hours is structurally broken —
//! the whole batch is rejected before a single block is placed. This is
//! deliberately a batch gate, not a per-row skip: a half-block demand
//! means the input tables are wrong, and partial output would hide that.

use crate::models::{Requirement, BLOCK_HOURS};
use std::fmt;

/// A fatal input error. No assignments are produced when one is raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
    /// The offending rows, one entry per bad requirement.
    pub details: Vec<String>,
}

/// Categories of fatal input errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A requirement's hours are not a multiple of 2.
    OddHours,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for detail in &self.details {
            write!(f, "\n  {detail}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Checks that every requirement's hours decompose into whole 2-hour blocks.
///
/// Zero hours are allowed (the row contributes no blocks). Any odd value
/// fails the entire batch with a single error listing every offender.
pub fn validate_requirements(requirements: &[Requirement]) -> Result<(), ValidationError> {
    let offenders: Vec<String> = requirements
        .iter()
        .filter(|r| r.hours % BLOCK_HOURS != 0)
        .map(|r| format!("{} / {} ({}): {}h", r.class, r.subject, r.teacher, r.hours))
        .collect();

    if offenders.is_empty() {
        Ok(())
    } else {
        Err(ValidationError {
            kind: ValidationErrorKind::OddHours,
            message: "all Hours values must be multiples of 2".to_string(),
            details: offenders,
        })
    }
}
