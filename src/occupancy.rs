//! Per-entity, per-day slot occupancy tracking.
//!
//! Each scheduling entity (a room, a teacher, a class) owns one boolean
//! track per active day, one flag per slot, all free at the start of a
//! run. Tracks are created lazily through a get-or-create accessor, and
//! flags are only ever set — a run never un-books a slot.
//!
//! One grid tracks one entity kind. The planner holds three (rooms,
//! teachers, classes) and is responsible for checking all of them before
//! marking any: the grid itself knows nothing about cross-entity
//! atomicity.

use chrono::Weekday;
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Busy/free tracks for one entity, keyed by weekday.
pub type DayTracks = HashMap<Weekday, Vec<bool>>;

/// Occupancy grid for one kind of entity.
///
/// Generic over the entity key: rooms are keyed by their index in the
/// supplied room list, teachers and classes by name.
#[derive(Debug, Clone, Default)]
pub struct OccupancyGrid<K> {
    /// Slot count per active day. Days absent here are not schedulable.
    day_len: HashMap<Weekday, usize>,
    tracks: HashMap<K, DayTracks>,
}

impl<K: Eq + Hash + Clone> OccupancyGrid<K> {
    /// Creates a grid for the given active days and their slot counts.
    pub fn new(day_lengths: impl IntoIterator<Item = (Weekday, usize)>) -> Self {
        Self {
            day_len: day_lengths.into_iter().collect(),
            tracks: HashMap::new(),
        }
    }

    /// Returns the entity's day tracks, creating them all-free on first
    /// access.
    pub fn ensure(&mut self, key: K) -> &mut DayTracks {
        let day_len = &self.day_len;
        self.tracks.entry(key).or_insert_with(|| {
            day_len
                .iter()
                .map(|(&day, &len)| (day, vec![false; len]))
                .collect()
        })
    }

    /// Whether `[start, start + len)` is entirely free for the entity on
    /// the given day.
    ///
    /// An entity never seen before is entirely free. A window that does
    /// not fit inside the day, or a day outside the active set, is never
    /// free.
    pub fn is_window_free<Q>(&self, key: &Q, day: Weekday, start: usize, len: usize) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&day_len) = self.day_len.get(&day) else {
            return false;
        };
        if start + len > day_len {
            return false;
        }
        match self.tracks.get(key).and_then(|tracks| tracks.get(&day)) {
            Some(track) => track[start..start + len].iter().all(|&busy| !busy),
            None => true,
        }
    }

    /// Marks `[start, start + len)` busy for the entity on the given day.
    ///
    /// The caller must have confirmed freedom first; slots already busy
    /// stay busy. Out-of-range portions of the window are ignored.
    pub fn mark_window(&mut self, key: K, day: Weekday, start: usize, len: usize) {
        if let Some(track) = self.ensure(key).get_mut(&day) {
            for slot in track.iter_mut().skip(start).take(len) {
                *slot = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> OccupancyGrid<String> {
        OccupancyGrid::new([(Weekday::Mon, 9), (Weekday::Tue, 9)])
    }

    #[test]
    fn test_unseen_entity_is_free() {
        let g = grid();
        assert!(g.is_window_free("C1", Weekday::Mon, 0, 2));
        assert!(g.is_window_free("C1", Weekday::Mon, 7, 2));
    }

    #[test]
    fn test_window_must_fit_day() {
        let g = grid();
        assert!(!g.is_window_free("C1", Weekday::Mon, 8, 2));
        assert!(!g.is_window_free("C1", Weekday::Wed, 0, 2)); // inactive day
    }

    #[test]
    fn test_mark_then_check() {
        let mut g = grid();
        g.mark_window("C1".into(), Weekday::Mon, 2, 2);

        assert!(!g.is_window_free("C1", Weekday::Mon, 2, 2));
        assert!(!g.is_window_free("C1", Weekday::Mon, 1, 2)); // overlaps slot 2
        assert!(!g.is_window_free("C1", Weekday::Mon, 3, 2)); // overlaps slot 3
        assert!(g.is_window_free("C1", Weekday::Mon, 0, 2));
        assert!(g.is_window_free("C1", Weekday::Mon, 4, 2));
        // Other day and other entity untouched
        assert!(g.is_window_free("C1", Weekday::Tue, 2, 2));
        assert!(g.is_window_free("C2", Weekday::Mon, 2, 2));
    }

    #[test]
    fn test_ensure_is_idempotent() {
        let mut g = grid();
        g.mark_window("C1".into(), Weekday::Mon, 0, 2);
        // A later ensure must not reset existing bookings
        let tracks = g.ensure("C1".into());
        assert!(tracks[&Weekday::Mon][0]);
        assert!(!g.is_window_free("C1", Weekday::Mon, 0, 2));
    }

    #[test]
    fn test_marks_accumulate() {
        let mut g = grid();
        g.mark_window("C1".into(), Weekday::Mon, 0, 2);
        g.mark_window("C1".into(), Weekday::Mon, 2, 2);
        assert!(!g.is_window_free("C1", Weekday::Mon, 0, 4));
        assert!(g.is_window_free("C1", Weekday::Mon, 4, 2));
    }

    #[test]
    fn test_index_keys() {
        let mut g: OccupancyGrid<usize> = OccupancyGrid::new([(Weekday::Mon, 9)]);
        g.mark_window(0, Weekday::Mon, 0, 2);
        assert!(!g.is_window_free(&0, Weekday::Mon, 0, 2));
        assert!(g.is_window_free(&1, Weekday::Mon, 0, 2));
    }
}
