//! Timetabling domain models.
//!
//! Core data types for stating a weekly scheduling problem and holding its
//! solution. Weekdays are `chrono::Weekday` throughout; absolute timestamps
//! appear only on committed [`Assignment`]s.
//!
//! # Vocabulary
//!
//! | Type | Role |
//! |------|------|
//! | `Room` | Bookable space, identified by (location, name) |
//! | `Teacher` | Roster entry with weekly unavailability |
//! | `Requirement` | Demand: class × subject × teacher × hours |
//! | `Assignment` | A committed 2-hour session with real timestamps |
//! | `Timetable` | All assignments plus unplaced-block warnings |

mod requirement;
mod room;
mod teacher;
mod timetable;

pub use requirement::{Requirement, BLOCK_HOURS};
pub use room::Room;
pub use teacher::{parse_unavailable_days, Teacher};
pub use timetable::{Assignment, Timetable, UnplacedBlock};
