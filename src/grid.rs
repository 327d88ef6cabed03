//! Slot grid construction.
//!
//! Every active day carries the same fixed teaching window, 09:00–18:00,
//! divided into consecutive slots of the configured granularity. Saturday
//! is never active; Sunday only when enabled. Slot times are plain minutes
//! from midnight — absolute timestamps only exist once a block is
//! committed and stamped against the target week.

use chrono::Weekday;

/// Teaching day start, minutes from midnight (09:00).
pub const DAY_START_MIN: u32 = 9 * 60;
/// Teaching day end, minutes from midnight (18:00). Exclusive.
pub const DAY_END_MIN: u32 = 18 * 60;
/// Length of one teaching block, in minutes.
pub const BLOCK_MINUTES: u32 = 120;

/// The weekdays a run may schedule on, in week order.
///
/// Monday through Friday, plus Sunday when enabled. Saturday never.
pub fn active_days(include_sunday: bool) -> Vec<Weekday> {
    let mut days = vec![
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];
    if include_sunday {
        days.push(Weekday::Sun);
    }
    days
}

/// Whether a weekday can carry sessions at all.
pub fn is_schedulable(day: Weekday, include_sunday: bool) -> bool {
    match day {
        Weekday::Sat => false,
        Weekday::Sun => include_sunday,
        _ => true,
    }
}

/// Ordered slot start times for a day, in minutes from midnight.
///
/// Empty for Saturday, and for Sunday when not enabled. Otherwise starts
/// at 09:00 and advances by `slot_minutes` while the start stays strictly
/// below 18:00; a granularity that does not divide the window evenly just
/// stops early, leaving no partial trailing slot.
pub fn day_slots(day: Weekday, include_sunday: bool, slot_minutes: u32) -> Vec<u32> {
    if !is_schedulable(day, include_sunday) {
        return Vec::new();
    }
    (DAY_START_MIN..DAY_END_MIN)
        .step_by(slot_minutes.max(1) as usize)
        .collect()
}

/// Number of slots in one active day.
pub fn slots_per_day(slot_minutes: u32) -> usize {
    ((DAY_END_MIN - DAY_START_MIN) / slot_minutes.max(1)) as usize
}

/// Number of consecutive slots one 2-hour block occupies.
///
/// Rounded to the nearest slot count when the granularity does not divide
/// 120 minutes evenly.
pub fn block_slots(slot_minutes: u32) -> usize {
    let slot_minutes = slot_minutes.max(1);
    ((BLOCK_MINUTES + slot_minutes / 2) / slot_minutes) as usize
}
