//! Greedy block allocation.
//!
//! The planner turns curriculum requirements into committed 2-hour
//! sessions. It is a first-fit greedy heuristic, not an exact solver:
//! blocks are ordered once (biggest demands and most-constrained teachers
//! first), then each block takes the first room window that is
//! simultaneously free for the room, the class, and the teacher on the
//! most lightly loaded eligible day.
//!
//! All knobs live in [`PlannerConfig`]; there is no ambient state, so two
//! runs over the same inputs produce identical timetables.

mod greedy;
mod preference;

pub use greedy::GreedyPlanner;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default slot granularity, in minutes.
pub const DEFAULT_SLOT_MINUTES: u32 = 60;

/// Immutable configuration for one planning run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Monday of the target week; all timestamps are derived from it.
    pub week_monday: NaiveDate,
    /// Whether Sunday is an active teaching day.
    pub include_sunday: bool,
    /// Slot granularity in minutes (typically 60 or 30).
    pub slot_minutes: u32,
    /// Day-load thresholds steering the day-preference heuristic.
    pub load_bands: LoadBands,
}

impl PlannerConfig {
    /// Creates a configuration with the default knobs: Sunday active,
    /// 60-minute slots, standard load bands.
    pub fn new(week_monday: NaiveDate) -> Self {
        Self {
            week_monday,
            include_sunday: true,
            slot_minutes: DEFAULT_SLOT_MINUTES,
            load_bands: LoadBands::default(),
        }
    }

    /// Enables or disables Sunday as a teaching day.
    pub fn with_sunday(mut self, include_sunday: bool) -> Self {
        self.include_sunday = include_sunday;
        self
    }

    /// Sets the slot granularity in minutes (clamped to at least 1).
    pub fn with_slot_minutes(mut self, slot_minutes: u32) -> Self {
        self.slot_minutes = slot_minutes.max(1);
        self
    }

    /// Sets the day-load thresholds.
    pub fn with_load_bands(mut self, load_bands: LoadBands) -> Self {
        self.load_bands = load_bands;
        self
    }
}

/// Thresholds classifying how loaded a class's day already is.
///
/// The values are heuristic, tuned so that classes settle around 4–6
/// taught hours per active day. They are soft preferences: a day past
/// `heavy_from` is deprioritized, never forbidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadBands {
    /// Below this many hours a day counts as lightly loaded.
    pub light_below: f64,
    /// At or above this many hours a day counts as heavily loaded.
    pub heavy_from: f64,
}

impl Default for LoadBands {
    fn default() -> Self {
        Self {
            light_below: 3.5,
            heavy_from: 6.0,
        }
    }
}

impl LoadBands {
    /// Classifies a day's current taught hours.
    pub fn band(&self, hours: f64) -> LoadBand {
        if hours < self.light_below {
            LoadBand::Light
        } else if hours < self.heavy_from {
            LoadBand::Medium
        } else {
            LoadBand::Heavy
        }
    }
}

/// How loaded a class's day already is. Ordered: lighter sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LoadBand {
    /// Room for more sessions.
    Light,
    /// Approaching a full day.
    Medium,
    /// Already at or past a comfortable daily load.
    Heavy,
}
