//! Teacher model.
//!
//! A teacher is identified by name and carries the set of weekdays they
//! cannot teach on. Teachers referenced by a curriculum requirement but
//! absent from the roster are treated as fully available.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A teacher and their weekly unavailability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    /// Teacher name, the roster key.
    pub name: String,
    /// Weekdays this teacher cannot be scheduled on.
    pub unavailable: Vec<Weekday>,
}

impl Teacher {
    /// Creates a teacher with no unavailability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            unavailable: Vec::new(),
        }
    }

    /// Marks a weekday as unavailable.
    pub fn with_unavailable(mut self, day: Weekday) -> Self {
        if !self.unavailable.contains(&day) {
            self.unavailable.push(day);
        }
        self
    }

    /// Whether this teacher cannot teach on `day`.
    pub fn is_unavailable_on(&self, day: Weekday) -> bool {
        self.unavailable.contains(&day)
    }

    /// Number of weekdays this teacher is unavailable.
    ///
    /// Used by the planner to place more-constrained teachers first.
    pub fn unavailable_count(&self) -> usize {
        self.unavailable.len()
    }
}

/// Parses a free-form unavailability list into weekdays.
///
/// Accepts comma- or semicolon-separated day names ("Thursday, Sunday"),
/// full or abbreviated, case-insensitive. Tokens that are not a weekday,
/// and Saturday (never schedulable), are silently dropped.
pub fn parse_unavailable_days(value: &str) -> Vec<Weekday> {
    let mut days = Vec::new();
    for token in value.replace(';', ",").split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Ok(day) = Weekday::from_str(token) {
            if day != Weekday::Sat && !days.contains(&day) {
                days.push(day);
            }
        }
    }
    days
}
