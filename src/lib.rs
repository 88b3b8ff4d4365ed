//! # u-courier
//!
//! Depot-based delivery routing: construct and improve tours that start and
//! end at a fixed depot, split deliveries across a fleet, and cut a
//! vehicle's work into budget-limited days.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, PointSet, Tour, VehicleAssignment, DaySchedule)
//! - [`distance`] — Euclidean and Manhattan metrics, path length
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`local_search`] — 2-opt improvement and inter-vehicle swap rebalancing
//! - [`partition`] — Category-balanced and random fleet splits
//! - [`schedule`] — Day-budget scheduling
//! - [`planner`] — End-to-end pipeline for a fleet
//! - [`generate`] — Seeded random delivery points
//! - [`config`] — Routing configuration
//! - [`error`] — Error types

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod generate;
pub mod local_search;
pub mod models;
pub mod partition;
pub mod planner;
pub mod schedule;

pub use error::{Result, RoutingError};
