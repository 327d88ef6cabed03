//! Timetable (solution) model.
//!
//! A timetable is the output of a planning run: the committed 2-hour
//! assignments plus a record of every block that could not be placed.
//! Unplaced blocks are warnings, not errors — a run always returns
//! whatever it managed to schedule.

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// A committed 2-hour teaching session.
///
/// Immutable once created: the planner never reshuffles placed blocks
/// within a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    /// Weekday of the session. Never Saturday.
    pub day: Weekday,
    /// Absolute start timestamp within the target week.
    pub start: NaiveDateTime,
    /// Absolute end timestamp, always `start + 2h`.
    pub end: NaiveDateTime,
    /// Class (cohort) label.
    pub class: String,
    /// Subject taught.
    pub subject: String,
    /// Teacher name.
    pub teacher: String,
    /// Room location (site).
    pub location: String,
    /// Room name within the location.
    pub room: String,
    /// Session length in hours. Always 2.0.
    pub duration_hours: f64,
}

/// A block that fit nowhere under the current constraints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnplacedBlock {
    /// Class the block was meant for.
    pub class: String,
    /// Subject of the block.
    pub subject: String,
    /// Teacher of the block.
    pub teacher: String,
}

/// The result of a planning run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timetable {
    /// Committed sessions, in placement order.
    pub assignments: Vec<Assignment>,
    /// Blocks that could not be placed, in attempt order.
    pub unplaced: Vec<UnplacedBlock>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed session.
    pub fn add_assignment(&mut self, assignment: Assignment) {
        self.assignments.push(assignment);
    }

    /// Records a block that could not be placed.
    pub fn add_unplaced(&mut self, block: UnplacedBlock) {
        self.unplaced.push(block);
    }

    /// Whether every requested block was placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }

    /// Number of committed sessions.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// All sessions for a given class.
    pub fn assignments_for_class(&self, class: &str) -> Vec<&Assignment> {
        self.assignments.iter().filter(|a| a.class == class).collect()
    }

    /// All sessions for a given teacher.
    pub fn assignments_for_teacher(&self, teacher: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.teacher == teacher)
            .collect()
    }

    /// All sessions in a given room.
    pub fn assignments_for_room(&self, location: &str, room: &str) -> Vec<&Assignment> {
        self.assignments
            .iter()
            .filter(|a| a.location == location && a.room == room)
            .collect()
    }

    /// Total hours scheduled for a class on a given weekday.
    pub fn class_hours_on(&self, class: &str, day: Weekday) -> f64 {
        self.assignments
            .iter()
            .filter(|a| a.class == class && a.day == day)
            .map(|a| a.duration_hours)
            .sum()
    }

    /// Sessions sorted for display: by start time, then location, then room.
    ///
    /// Presentation order only — consumers rendering or exporting the
    /// timetable want it; the planner itself makes no ordering promise
    /// beyond placement order.
    pub fn sorted_for_display(&self) -> Vec<Assignment> {
        let mut sorted = self.assignments.clone();
        sorted.sort_by(|a, b| {
            a.start
                .cmp(&b.start)
                .then_with(|| a.location.cmp(&b.location))
                .then_with(|| a.room.cmp(&b.room))
        });
        sorted
    }
}
