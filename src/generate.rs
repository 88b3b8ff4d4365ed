//! Random delivery point generation.

use rand::Rng;

use crate::models::Point;

/// Generates `count` points on an integer grid.
///
/// Coordinates are whole numbers in `[0, extent)` and each point is a
/// priority delivery with probability one half. An `extent` of 0 is treated
/// as 1, so every point is generated at the origin. Duplicates are possible;
/// run the result through
/// [`PointSet::ingest`](crate::models::PointSet::ingest) before routing.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_courier::generate::random_points;
///
/// let mut rng = StdRng::seed_from_u64(42);
/// let points = random_points(&mut rng, 20, 100);
/// assert_eq!(points.len(), 20);
/// assert!(points.iter().all(|p| p.x() >= 0.0 && p.x() < 100.0));
/// ```
pub fn random_points<R: Rng + ?Sized>(rng: &mut R, count: usize, extent: u32) -> Vec<Point> {
    let extent = extent.max(1);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..extent);
            let y = rng.random_range(0..extent);
            Point::new(f64::from(x), f64::from(y)).with_priority(rng.random_bool(0.5))
        })
        .collect()
}
