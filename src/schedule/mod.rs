//! Multi-day scheduling under a per-day travel budget.
//!
//! - [`schedule_days`] — Nearest-neighbor walk cut into day tours

mod capacity;

pub use capacity::schedule_days;
