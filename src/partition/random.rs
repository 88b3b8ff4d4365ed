//! Random fleet split.

use rand::Rng;

use crate::error::{Result, RoutingError};
use crate::models::{Point, VehicleAssignment};

/// Deals `points` to vehicles in random order.
///
/// Repeatedly draws a uniformly random remaining point and hands it to the
/// next vehicle in round-robin order until no points remain. Sizes are
/// therefore forced to balance: vehicle sizes always differ by at most one,
/// and only which points land where is random. This is not an independent
/// per-point coin flip, which would let sizes drift apart. The random source
/// is supplied by the caller; a seeded generator makes the split
/// reproducible.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_courier::models::Point;
/// use u_courier::partition::random_split;
///
/// let points: Vec<Point> = (0..5).map(|i| Point::new(i as f64, 1.0)).collect();
/// let mut rng = StdRng::seed_from_u64(42);
/// let split = random_split(&points, 2, &mut rng).unwrap();
/// assert_eq!(split.vehicle(0).unwrap().len(), 3);
/// assert_eq!(split.vehicle(1).unwrap().len(), 2);
/// ```
pub fn random_split<R: Rng + ?Sized>(
    points: &[Point],
    vehicle_count: usize,
    rng: &mut R,
) -> Result<VehicleAssignment> {
    if vehicle_count == 0 {
        return Err(RoutingError::InvalidVehicleCount {
            count: vehicle_count,
        });
    }

    let mut remaining = points.to_vec();
    let mut vehicles = vec![Vec::new(); vehicle_count];
    let mut turn = 0;
    while !remaining.is_empty() {
        let idx = rng.random_range(0..remaining.len() as u64) as usize;
        vehicles[turn % vehicle_count].push(remaining.remove(idx));
        turn += 1;
    }

    Ok(VehicleAssignment::new(vehicles))
}
