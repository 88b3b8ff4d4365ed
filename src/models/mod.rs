//! Domain model types for depot-based delivery routing.
//!
//! Provides delivery points and their validated ingestion, depot-bounded
//! tours, per-vehicle point assignments, and day-indexed schedules.

mod assignment;
mod point;
mod schedule;
mod tour;

pub use assignment::VehicleAssignment;
pub(crate) use point::check_routable;
pub use point::{Point, PointSet};
pub use schedule::{DaySchedule, DayTour};
pub use tour::Tour;
