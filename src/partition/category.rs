//! Category-balanced fleet split.
//!
//! # Algorithm
//!
//! Stable-partition the points into priority and standard groups, place the
//! priority group first, and cut the concatenation into contiguous chunks of
//! near-equal size. Each vehicle therefore receives priority points in
//! proportion to availability rather than a category-pure subset.
//!
//! # Complexity
//!
//! O(n).

use crate::error::{Result, RoutingError};
use crate::models::{Point, VehicleAssignment};

/// Splits `points` across `vehicle_count` vehicles, priority points first.
///
/// Chunk sizes differ by at most one; when the count does not divide evenly
/// the earlier vehicles get the smaller chunks, so for two vehicles the cut
/// falls at `len / 2`.
///
/// # Examples
///
/// ```
/// use u_courier::models::Point;
/// use u_courier::partition::category_balanced_split;
///
/// let points = [
///     Point::new(1.0, 0.0),
///     Point::priority(2.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::priority(4.0, 0.0),
/// ];
/// let split = category_balanced_split(&points, 2).unwrap();
/// assert_eq!(split.vehicle(0).unwrap(), &[points[1], points[3]]);
/// assert_eq!(split.vehicle(1).unwrap(), &[points[0], points[2]]);
/// ```
pub fn category_balanced_split(
    points: &[Point],
    vehicle_count: usize,
) -> Result<VehicleAssignment> {
    if vehicle_count == 0 {
        return Err(RoutingError::InvalidVehicleCount {
            count: vehicle_count,
        });
    }

    let (priority, standard): (Vec<Point>, Vec<Point>) =
        points.iter().copied().partition(Point::is_priority);
    let ordered: Vec<Point> = priority.into_iter().chain(standard).collect();

    let base = ordered.len() / vehicle_count;
    let larger = ordered.len() % vehicle_count;
    let mut vehicles = Vec::with_capacity(vehicle_count);
    let mut rest = ordered.as_slice();
    for v in 0..vehicle_count {
        let size = if v < vehicle_count - larger {
            base
        } else {
            base + 1
        };
        let (chunk, tail) = rest.split_at(size);
        vehicles.push(chunk.to_vec());
        rest = tail;
    }

    Ok(VehicleAssignment::new(vehicles))
}
