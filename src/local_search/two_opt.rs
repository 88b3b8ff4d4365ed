//! Intra-tour 2-opt improvement.
//!
//! # Algorithm
//!
//! For each pair of positions `1 <= i < k <= n-2` in a depot-bounded tour
//! `t` of `n` points, compare the two edges entering and leaving the segment
//! `t[i..=k]` against the edges obtained by reversing it:
//!
//! ```text
//! old = d(t[i-1], t[i]) + d(t[k], t[k+1])
//! new = d(t[i-1], t[k]) + d(t[i], t[k+1])
//! ```
//!
//! If `new < old`, reverse the segment and restart the scan
//! (first-improvement strategy). Stop when a full scan finds nothing, or
//! when the iteration cap is reached. The depot endpoints are never inside
//! a reversed segment.
//!
//! # Complexity
//!
//! O(n²) per pass, O(n³) worst case for convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::Metric;
use crate::models::Tour;

/// Default number of improving passes before the search gives up.
pub const DEFAULT_ITERATION_CAP: usize = 10_000;

/// Minimum decrease for a reversal to count as an improvement.
const EPSILON: f64 = 1e-10;

/// Applies 2-opt improvement to a tour, returning the improved copy.
///
/// At most `iteration_cap` segment reversals are applied; each one restarts
/// the scan. Tours with fewer than four points are returned unchanged.
/// The result is never longer than `tour` and visits the same points.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Point, Tour};
/// use u_courier::distance::DistanceMetric;
/// use u_courier::local_search::{two_opt_improve, DEFAULT_ITERATION_CAP};
///
/// let depot = Point::new(0.0, 0.0);
/// // 0,0 → 0,1 → 1,0 → 1,1 → 0,0 crosses itself.
/// let crossed = Tour::from_stops(
///     depot,
///     vec![Point::new(0.0, 1.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)],
/// )
/// .unwrap();
///
/// let m = DistanceMetric::Euclidean;
/// let improved = two_opt_improve(&crossed, &m, DEFAULT_ITERATION_CAP);
/// assert!((improved.length(&m) - 4.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve<M: Metric + ?Sized>(tour: &Tour, metric: &M, iteration_cap: usize) -> Tour {
    let n = tour.points().len();
    if n < 4 {
        return tour.clone();
    }

    let mut current = tour.points().to_vec();
    let mut swaps = 0;

    'scan: loop {
        if swaps >= iteration_cap {
            log::warn!("2-opt stopped at iteration cap ({iteration_cap}) before converging");
            break;
        }
        for i in 1..n - 2 {
            for k in i + 1..n - 1 {
                let old_cost = metric.distance(&current[i - 1], &current[i])
                    + metric.distance(&current[k], &current[k + 1]);
                let new_cost = metric.distance(&current[i - 1], &current[k])
                    + metric.distance(&current[i], &current[k + 1]);
                if new_cost < old_cost - EPSILON {
                    current[i..=k].reverse();
                    swaps += 1;
                    continue 'scan;
                }
            }
        }
        break;
    }

    let improved = Tour::from_bounded(current);
    log::debug!(
        "2-opt applied {swaps} reversal(s): length {:.3} -> {:.3}",
        tour.length(metric),
        improved.length(metric)
    );
    improved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;
    use crate::distance::DistanceMetric;
    use crate::models::Point;

    const DEPOT: Point = Point::new(0.0, 0.0);
    const M: DistanceMetric = DistanceMetric::Euclidean;

    fn tour(stops: &[(f64, f64)]) -> Tour {
        let stops = stops.iter().map(|&(x, y)| Point::new(x, y)).collect();
        Tour::from_stops(DEPOT, stops).expect("valid tour")
    }

    #[test]
    fn test_2opt_already_optimal() {
        let t = tour(&[(1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let improved = two_opt_improve(&t, &M, DEFAULT_ITERATION_CAP);
        assert_eq!(improved, t);
        assert!((improved.length(&M) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_2opt_uncrosses_square() {
        let crossed = tour(&[(0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
        let before = crossed.length(&M);
        let improved = two_opt_improve(&crossed, &M, DEFAULT_ITERATION_CAP);
        assert!(improved.length(&M) < before - 0.5);
        assert!((improved.length(&M) - 4.0).abs() < 1e-10);
        assert_eq!(improved.depot(), DEPOT);
        assert_eq!(improved.points().last(), Some(&DEPOT));
    }

    #[test]
    fn test_2opt_improves_nearest_neighbor_crossing() {
        // NN visits (3,2), (4,0), (1,4): the depot edge and the (4,0)-(1,4)
        // edge cross.
        let points = [Point::new(3.0, 2.0), Point::new(4.0, 0.0), Point::new(1.0, 4.0)];
        let nn = nearest_neighbor(&points, DEPOT, &M).expect("valid");
        assert_eq!(nn.stops(), &points);

        let improved = two_opt_improve(&nn, &M, DEFAULT_ITERATION_CAP);
        assert!(improved.length(&M) < nn.length(&M) - 1.0);
        assert_eq!(
            improved.stops(),
            &[Point::new(4.0, 0.0), Point::new(3.0, 2.0), Point::new(1.0, 4.0)]
        );
    }

    #[test]
    fn test_2opt_trivial_and_short_tours_unchanged() {
        let t = Tour::trivial(DEPOT);
        assert_eq!(two_opt_improve(&t, &M, DEFAULT_ITERATION_CAP), t);

        let t = tour(&[(5.0, 5.0)]);
        assert_eq!(two_opt_improve(&t, &M, DEFAULT_ITERATION_CAP), t);
    }

    #[test]
    fn test_2opt_two_stops_unchanged() {
        let t = tour(&[(5.0, 0.0), (0.0, 5.0)]);
        assert_eq!(two_opt_improve(&t, &M, DEFAULT_ITERATION_CAP), t);
    }

    #[test]
    fn test_2opt_does_not_worsen() {
        let depot = Point::new(5.0, 5.0);
        let stops = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 10.0),
        ];
        let initial = Tour::from_stops(depot, stops).expect("valid");
        let improved = two_opt_improve(&initial, &M, DEFAULT_ITERATION_CAP);
        assert!(improved.length(&M) <= initial.length(&M) + 1e-10);
        assert_eq!(improved.depot(), depot);
        assert_eq!(improved.num_stops(), 4);
    }

    #[test]
    fn test_2opt_idempotent() {
        let t = tour(&[(0.0, 1.0), (1.0, 0.0), (1.0, 1.0), (2.0, 3.0), (-1.0, 2.0)]);
        let once = two_opt_improve(&t, &M, DEFAULT_ITERATION_CAP);
        let twice = two_opt_improve(&once, &M, DEFAULT_ITERATION_CAP);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_2opt_iteration_cap_limits_swaps() {
        let crossed = tour(&[(0.0, 1.0), (1.0, 0.0), (1.0, 1.0)]);
        let capped = two_opt_improve(&crossed, &M, 0);
        assert_eq!(capped, crossed);
    }

    #[test]
    fn test_2opt_manhattan() {
        let m = DistanceMetric::Manhattan;
        let t = tour(&[(0.0, 2.0), (2.0, 0.0), (2.0, 2.0)]);
        let improved = two_opt_improve(&t, &m, DEFAULT_ITERATION_CAP);
        assert!(improved.length(&m) <= t.length(&m) + 1e-10);
        assert!((improved.length(&m) - 8.0).abs() < 1e-10);
    }
}
