//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from the depot, always travel to the
//! nearest unvisited point, then return to the depot.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for TSP. While solution
//! quality is typically 15-25% above optimal, it provides a fast baseline.

use crate::distance::Metric;
use crate::error::Result;
use crate::models::{check_routable, Point, Tour};

/// Finds the unvisited point nearest to `from`.
///
/// Scans `points` in order and keeps the first strict minimum, so ties go to
/// the point that appears earliest. Returns the index and its distance, or
/// `None` if every point is visited.
///
/// # Panics
///
/// Panics if `visited` and `points` differ in length.
pub fn nearest_unvisited<M: Metric + ?Sized>(
    points: &[Point],
    visited: &[bool],
    from: &Point,
    metric: &M,
) -> Option<(usize, f64)> {
    assert_eq!(
        points.len(),
        visited.len(),
        "visited mask must cover every point"
    );
    let mut best: Option<(usize, f64)> = None;
    for (i, (p, &seen)) in points.iter().zip(visited).enumerate() {
        if seen {
            continue;
        }
        let d = metric.distance(from, p);
        if best.is_none_or(|(_, bd)| d < bd) {
            best = Some((i, d));
        }
    }
    best
}

/// Constructs a tour over `points` using the nearest-neighbor heuristic.
///
/// The input is only read; visited points are tracked in a separate mask.
/// An empty input yields the trivial `[depot, depot]` tour.
///
/// # Errors
///
/// `points` must be finite, duplicate-free, and exclude the depot. Raw input
/// can be cleaned with [`PointSet::ingest`](crate::models::PointSet::ingest)
/// first. Otherwise the first offending point is reported as
/// [`RoutingError::InvalidCoordinate`](crate::RoutingError::InvalidCoordinate),
/// [`RoutingError::DepotPoint`](crate::RoutingError::DepotPoint) or
/// [`RoutingError::DuplicatePoint`](crate::RoutingError::DuplicatePoint).
///
/// # Examples
///
/// ```
/// use u_courier::models::Point;
/// use u_courier::distance::DistanceMetric;
/// use u_courier::constructive::nearest_neighbor;
///
/// let depot = Point::new(0.0, 0.0);
/// let points = [Point::new(10.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
///
/// let tour = nearest_neighbor(&points, depot, &DistanceMetric::Euclidean).unwrap();
/// assert_eq!(tour.stops(), &[points[1], points[2], points[0]]);
/// assert!((tour.length(&DistanceMetric::Euclidean) - 20.0).abs() < 1e-10);
/// ```
pub fn nearest_neighbor<M: Metric + ?Sized>(
    points: &[Point],
    depot: Point,
    metric: &M,
) -> Result<Tour> {
    check_routable(points, depot)?;
    Ok(construct(points, depot, metric))
}

/// Nearest-neighbor construction over points already known to be routable.
pub(crate) fn construct<M: Metric + ?Sized>(points: &[Point], depot: Point, metric: &M) -> Tour {
    let mut visited = vec![false; points.len()];
    let mut stops = Vec::with_capacity(points.len());
    let mut current = depot;

    while let Some((next, _)) = nearest_unvisited(points, &visited, &current, metric) {
        visited[next] = true;
        current = points[next];
        stops.push(current);
    }

    let tour = Tour::enclose(depot, stops);
    log::debug!(
        "nearest-neighbor tour: {} stops, length {:.3}",
        tour.num_stops(),
        tour.length(metric)
    );
    tour
}
