//! Distance metrics and path length.
//!
//! Provides the [`Metric`] seam, the configurable [`DistanceMetric`]
//! implementations, and [`path_length`] for any point sequence.

mod metric;

pub use metric::{path_length, DistanceMetric, Metric};
