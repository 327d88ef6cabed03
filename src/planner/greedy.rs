//! Greedy first-fit block placement.
//!
//! # Algorithm
//!
//! 1. Validate the batch (hours must decompose into 2-hour blocks).
//! 2. Expand requirements into a block queue, ordered once up front.
//! 3. For each block, walk the class's preferred days; on each day, walk
//!    rooms in list order and slot starts from 09:00; commit the first
//!    window free for room, class, and teacher at once.
//! 4. A block with no window anywhere is recorded as unplaced and the run
//!    continues — partial timetables are always returned.
//!
//! # Complexity
//! O(b * d * r * s) where b=blocks, d=active days, r=rooms, s=slots/day.

use chrono::{Duration, NaiveDateTime, NaiveTime, Weekday};
use log::{debug, info, warn};
use std::collections::{HashMap, HashSet};

use super::{preference, PlannerConfig};
use crate::grid;
use crate::models::{Assignment, Requirement, Room, Teacher, Timetable, UnplacedBlock};
use crate::occupancy::OccupancyGrid;
use crate::validation::{validate_requirements, ValidationError};

/// Greedy first-fit timetable planner.
///
/// Holds only its configuration; all run state is local to [`plan`], so a
/// planner can be reused and two runs over the same inputs produce
/// bit-identical timetables.
///
/// [`plan`]: GreedyPlanner::plan
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timetabler::models::{Requirement, Room, Teacher};
/// use timetabler::planner::{GreedyPlanner, PlannerConfig};
///
/// let monday = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
/// let planner = GreedyPlanner::new(PlannerConfig::new(monday));
///
/// let rooms = vec![Room::new("Main site", "Room 1")];
/// let roster = vec![Teacher::new("Dr Martin")];
/// let requirements = vec![Requirement::new("C1", "Cell biology", "Dr Martin", 4)];
///
/// let timetable = planner.plan(&rooms, &roster, &requirements).unwrap();
/// assert_eq!(timetable.assignment_count(), 2);
/// assert!(timetable.is_complete());
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner {
    config: PlannerConfig,
}

impl GreedyPlanner {
    /// Creates a planner for the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// The planner's configuration.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans the week: places every demanded 2-hour block it can.
    ///
    /// Fails only on the batch precondition (odd hours); placement
    /// failures are soft and end up in [`Timetable::unplaced`].
    pub fn plan(
        &self,
        rooms: &[Room],
        roster: &[Teacher],
        requirements: &[Requirement],
    ) -> Result<Timetable, ValidationError> {
        validate_requirements(requirements)?;

        let cfg = &self.config;
        let days = grid::active_days(cfg.include_sunday);
        let day_lengths: Vec<(Weekday, usize)> = days
            .iter()
            .map(|&day| (day, grid::day_slots(day, cfg.include_sunday, cfg.slot_minutes).len()))
            .collect();
        let day_slot_counts: HashMap<Weekday, usize> = day_lengths.iter().copied().collect();
        let block_len = grid::block_slots(cfg.slot_minutes);
        let block_hours = f64::from(block_len as u32 * cfg.slot_minutes) / 60.0;

        let unavailability: HashMap<String, HashSet<Weekday>> = roster
            .iter()
            .map(|t| (t.name.clone(), t.unavailable.iter().copied().collect()))
            .collect();
        let no_days = HashSet::new();

        let mut room_busy: OccupancyGrid<usize> = OccupancyGrid::new(day_lengths.clone());
        let mut teacher_busy: OccupancyGrid<String> = OccupancyGrid::new(day_lengths.clone());
        let mut class_busy: OccupancyGrid<String> = OccupancyGrid::new(day_lengths);
        let mut class_day_hours: HashMap<String, HashMap<Weekday, f64>> = HashMap::new();

        let queue = preference::block_queue(requirements, &unavailability);
        info!(
            "planning {} blocks across {} rooms and {} active days",
            queue.len(),
            rooms.len(),
            days.len()
        );

        let mut timetable = Timetable::new();
        for &req_idx in &queue {
            let req = &requirements[req_idx];
            let unavailable = unavailability.get(&req.teacher).unwrap_or(&no_days);
            let day_hours = class_day_hours.entry(req.class.clone()).or_default();
            let order = preference::day_preference(
                &days,
                &day_slot_counts,
                unavailable,
                day_hours,
                &cfg.load_bands,
            );

            let mut placed = false;
            for day in order {
                let found = find_window(
                    rooms.len(),
                    day,
                    block_len,
                    &day_slot_counts,
                    &room_busy,
                    &class_busy,
                    &teacher_busy,
                    &req.class,
                    &req.teacher,
                );
                let Some((room_idx, start)) = found else {
                    continue;
                };

                // All three marks happen together: freedom was just
                // confirmed across every grid, so no partial commit is
                // observable.
                room_busy.mark_window(room_idx, day, start, block_len);
                class_busy.mark_window(req.class.clone(), day, start, block_len);
                teacher_busy.mark_window(req.teacher.clone(), day, start, block_len);
                *day_hours.entry(day).or_insert(0.0) += block_hours;

                let (start_dt, end_dt) = self.block_times(day, start, block_len);
                debug!(
                    "placed {} / {} ({}) in {} {} starting {}",
                    req.class, req.subject, req.teacher, rooms[room_idx].location,
                    rooms[room_idx].name, start_dt
                );
                timetable.add_assignment(Assignment {
                    day,
                    start: start_dt,
                    end: end_dt,
                    class: req.class.clone(),
                    subject: req.subject.clone(),
                    teacher: req.teacher.clone(),
                    location: rooms[room_idx].location.clone(),
                    room: rooms[room_idx].name.clone(),
                    duration_hours: block_hours,
                });
                placed = true;
                break;
            }

            if !placed {
                warn!(
                    "could not place a 2h block for {} - {} (teacher {})",
                    req.class, req.subject, req.teacher
                );
                timetable.add_unplaced(UnplacedBlock {
                    class: req.class.clone(),
                    subject: req.subject.clone(),
                    teacher: req.teacher.clone(),
                });
            }
        }

        info!(
            "placed {} of {} blocks ({} unplaced)",
            timetable.assignment_count(),
            queue.len(),
            timetable.unplaced.len()
        );
        Ok(timetable)
    }

    /// Absolute start and end timestamps for a block on the target week.
    fn block_times(&self, day: Weekday, start_idx: usize, block_len: usize) -> (NaiveDateTime, NaiveDateTime) {
        let cfg = &self.config;
        let start_min = grid::DAY_START_MIN + start_idx as u32 * cfg.slot_minutes;
        let midnight = cfg.week_monday.and_time(NaiveTime::MIN);
        let start = midnight
            + Duration::days(i64::from(day.num_days_from_monday()))
            + Duration::minutes(i64::from(start_min));
        let end = start + Duration::minutes(i64::from(block_len as u32 * cfg.slot_minutes));
        (start, end)
    }
}

/// First window on `day` free for room, class, and teacher at once.
///
/// Rooms are tried in list order, start indices from 0: first-fit, not
/// best-fit. Returns the room index and slot start index.
#[allow(clippy::too_many_arguments)]
fn find_window(
    room_count: usize,
    day: Weekday,
    block_len: usize,
    day_slot_counts: &HashMap<Weekday, usize>,
    room_busy: &OccupancyGrid<usize>,
    class_busy: &OccupancyGrid<String>,
    teacher_busy: &OccupancyGrid<String>,
    class: &str,
    teacher: &str,
) -> Option<(usize, usize)> {
    let slots = *day_slot_counts.get(&day)?;
    if slots < block_len {
        return None;
    }
    for room_idx in 0..room_count {
        for start in 0..=slots - block_len {
            if room_busy.is_window_free(&room_idx, day, start, block_len)
                && class_busy.is_window_free(class, day, start, block_len)
                && teacher_busy.is_window_free(teacher, day, start, block_len)
            {
                return Some((room_idx, start));
            }
        }
    }
    None
}
