//! Block ordering and day preference.
//!
//! Two heuristics shape the greedy search:
//!
//! 1. **Block order** — every requirement expands into `hours / 2` block
//!    tasks; the whole queue is sorted once, before any placement. Bigger
//!    total demands go first, then teachers with more unavailable days.
//!    The sort is stable, so ties keep curriculum row order and a
//!    requirement's own blocks stay adjacent.
//! 2. **Day order** — for each block, eligible days are ranked by how much
//!    the class already has on them: lightly loaded days first, within a
//!    band the exact hour count decides. A soft preference only; a heavy
//!    day is still searched if nothing lighter fits.

use chrono::Weekday;
use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use super::LoadBands;
use crate::models::Requirement;

/// Expands requirements into a queue of block tasks, in placement order.
///
/// Each element is an index into `requirements`; a requirement appears
/// once per 2-hour block it demands. Sort key: total hours descending,
/// then the teacher's unavailable-day count descending, stable.
pub(crate) fn block_queue(
    requirements: &[Requirement],
    unavailability: &HashMap<String, HashSet<Weekday>>,
) -> Vec<usize> {
    let mut queue: Vec<usize> = requirements
        .iter()
        .enumerate()
        .flat_map(|(idx, req)| std::iter::repeat(idx).take(req.block_count() as usize))
        .collect();

    queue.sort_by_key(|&idx| {
        let req = &requirements[idx];
        let constrained = unavailability.get(&req.teacher).map_or(0, HashSet::len);
        (Reverse(req.hours), Reverse(constrained))
    });
    queue
}

/// Ranks the days a block may go on, most preferred first.
///
/// Candidates are the active days where the teacher is available and the
/// day has at least one slot. Ranking is ascending by (load band, exact
/// hours), so the class's emptiest days come first; week order breaks
/// ties.
pub(crate) fn day_preference(
    active_days: &[Weekday],
    day_slot_counts: &HashMap<Weekday, usize>,
    unavailable: &HashSet<Weekday>,
    class_day_hours: &HashMap<Weekday, f64>,
    bands: &LoadBands,
) -> Vec<Weekday> {
    let mut candidates: Vec<Weekday> = active_days
        .iter()
        .copied()
        .filter(|day| {
            !unavailable.contains(day) && day_slot_counts.get(day).copied().unwrap_or(0) > 0
        })
        .collect();

    candidates.sort_by(|a, b| {
        let ha = class_day_hours.get(a).copied().unwrap_or(0.0);
        let hb = class_day_hours.get(b).copied().unwrap_or(0.0);
        bands
            .band(ha)
            .cmp(&bands.band(hb))
            .then(ha.total_cmp(&hb))
    });
    candidates
}
