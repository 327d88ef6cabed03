//! Weekly timetable planner for teaching organizations.
//!
//! Assigns required teaching sessions (class × subject × teacher, expressed
//! in hours) to strict 2-hour blocks on a fixed weekly grid: Monday–Friday
//! plus an optional Sunday, 09:00–18:00, Saturday always excluded. Placement
//! is a greedy first-fit search over three independent occupancy grids
//! (room, teacher, class) with a day-preference heuristic that spreads each
//! class's load toward 4–6 hours per active day.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Room`, `Teacher`, `Requirement`,
//!   `Assignment`, `Timetable`, `UnplacedBlock`
//! - **`grid`**: Slot grid construction (day → ordered slot start times)
//! - **`occupancy`**: Per-entity, per-day busy/free slot tracking
//! - **`planner`**: Configuration and the greedy block allocator
//! - **`validation`**: Batch preconditions (hours must come in 2-hour blocks)
//!
//! # Guarantees
//!
//! A planning run is a pure function of its inputs: no global state, no
//! randomness. It never double-books a room, teacher, or class, and always
//! returns the blocks it managed to place — blocks that fit nowhere are
//! reported individually, not turned into a run-level failure.

pub mod grid;
pub mod models;
pub mod occupancy;
pub mod planner;
pub mod validation;
