//! Fleet partitioning policies.
//!
//! - [`category_balanced_split`] — Priority-first contiguous chunks, O(n)
//! - [`random_split`] — Random draws dealt round-robin, O(n²)
//!
//! Both produce disjoint subsets whose union is exactly the input.

mod category;
mod random;

pub use category::category_balanced_split;
pub use random::random_split;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Point, VehicleAssignment};

/// How delivery points are divided between vehicles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionPolicy {
    /// [`category_balanced_split`].
    #[default]
    Category,
    /// [`random_split`].
    Random,
}

/// Splits `points` across `vehicle_count` vehicles using `policy`.
///
/// The random source is only drawn from by [`PartitionPolicy::Random`].
pub fn partition<R: Rng + ?Sized>(
    points: &[Point],
    vehicle_count: usize,
    policy: PartitionPolicy,
    rng: &mut R,
) -> Result<VehicleAssignment> {
    let assignment = match policy {
        PartitionPolicy::Category => category_balanced_split(points, vehicle_count)?,
        PartitionPolicy::Random => random_split(points, vehicle_count, rng)?,
    };
    log::debug!(
        "{policy:?} partition of {} point(s) into {vehicle_count} vehicle(s)",
        points.len()
    );
    Ok(assignment)
}
