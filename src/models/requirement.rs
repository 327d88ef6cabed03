//! Curriculum requirement model.
//!
//! A requirement is a demand for teaching time: this class needs this many
//! hours of this subject with this teacher. The planner decomposes each
//! requirement into indivisible 2-hour blocks, so hours must be even —
//! enforced up front by [`crate::validation::validate_requirements`].

use serde::{Deserialize, Serialize};

/// Length of one teaching block, in hours. Sessions are always this long.
pub const BLOCK_HOURS: u32 = 2;

/// A (class, subject, teacher, hours) teaching demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Class (cohort) label, e.g. "PAES - Classe 1".
    pub class: String,
    /// Subject taught.
    pub subject: String,
    /// Teacher name; need not appear in the roster.
    pub teacher: String,
    /// Total hours demanded. Must be an even number; zero means the row
    /// contributes nothing.
    pub hours: u32,
}

impl Requirement {
    /// Creates a requirement.
    pub fn new(
        class: impl Into<String>,
        subject: impl Into<String>,
        teacher: impl Into<String>,
        hours: u32,
    ) -> Self {
        Self {
            class: class.into(),
            subject: subject.into(),
            teacher: teacher.into(),
            hours,
        }
    }

    /// Number of 2-hour blocks this requirement expands into.
    pub fn block_count(&self) -> u32 {
        self.hours / BLOCK_HOURS
    }
}
