//! Inter-vehicle point swap rebalancing.
//!
//! # Algorithm
//!
//! For each pair of vehicles (a, b), try exchanging one standard
//! (non-priority) point of `a` with one standard point of `b`. Both
//! vehicles' tours are rebuilt with nearest-neighbor construction followed
//! by 2-opt, and the exchange is kept only if the sum of the two improved
//! tour lengths strictly decreases. Accepting a swap restarts the search
//! (first-improvement strategy). Priority points never change vehicle.
//!
//! # Complexity
//!
//! O(n² × V²) candidate swaps per pass, each costing two tour rebuilds.

use crate::constructive::construct;
use crate::distance::Metric;
use crate::models::{Point, VehicleAssignment};

use super::two_opt_improve;

const EPSILON: f64 = 1e-10;

/// Length of the nearest-neighbor + 2-opt tour over `points`.
fn improved_length<M: Metric + ?Sized>(
    points: &[Point],
    depot: Point,
    metric: &M,
    iteration_cap: usize,
) -> f64 {
    let tour = construct(points, depot, metric);
    two_opt_improve(&tour, metric, iteration_cap).length(metric)
}

/// Applies swap rebalancing between vehicles, returning the new assignment.
///
/// At most `iteration_cap` swaps are accepted; the same cap bounds each
/// 2-opt run used to evaluate a candidate. Every vehicle keeps the same
/// number of points, and the union of all vehicles is unchanged.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Point, VehicleAssignment};
/// use u_courier::distance::DistanceMetric;
/// use u_courier::local_search::{rebalance_swap, DEFAULT_ITERATION_CAP};
///
/// let depot = Point::new(0.0, 0.0);
/// let mixed = VehicleAssignment::new(vec![
///     vec![Point::new(10.0, 0.0), Point::new(-10.0, 1.0)],
///     vec![Point::new(-10.0, 0.0), Point::new(10.0, 1.0)],
/// ]);
///
/// let balanced = rebalance_swap(&mixed, depot, &DistanceMetric::Euclidean, DEFAULT_ITERATION_CAP);
/// let v0 = balanced.vehicle(0).unwrap();
/// assert!(v0.iter().all(|p| p.x() > 0.0) || v0.iter().all(|p| p.x() < 0.0));
/// ```
pub fn rebalance_swap<M: Metric + ?Sized>(
    assignment: &VehicleAssignment,
    depot: Point,
    metric: &M,
    iteration_cap: usize,
) -> VehicleAssignment {
    let mut vehicles = assignment.clone().into_vehicles();
    if vehicles.len() < 2 {
        return assignment.clone();
    }

    let mut costs: Vec<f64> = vehicles
        .iter()
        .map(|pts| improved_length(pts, depot, metric, iteration_cap))
        .collect();
    let mut accepted = 0;

    'search: loop {
        if accepted >= iteration_cap {
            log::warn!("rebalancing stopped at iteration cap ({iteration_cap})");
            break;
        }
        for a in 0..vehicles.len() {
            for b in a + 1..vehicles.len() {
                for pa in 0..vehicles[a].len() {
                    if vehicles[a][pa].is_priority() {
                        continue;
                    }
                    for pb in 0..vehicles[b].len() {
                        if vehicles[b][pb].is_priority() {
                            continue;
                        }
                        swap_points(&mut vehicles, (a, pa), (b, pb));
                        let cost_a = improved_length(&vehicles[a], depot, metric, iteration_cap);
                        let cost_b = improved_length(&vehicles[b], depot, metric, iteration_cap);
                        if cost_a + cost_b < costs[a] + costs[b] - EPSILON {
                            log::debug!(
                                "rebalance: swapped {} (vehicle {a}) with {} (vehicle {b}), \
                                 saving {:.3}",
                                vehicles[b][pb],
                                vehicles[a][pa],
                                costs[a] + costs[b] - cost_a - cost_b
                            );
                            costs[a] = cost_a;
                            costs[b] = cost_b;
                            accepted += 1;
                            continue 'search;
                        }
                        swap_points(&mut vehicles, (a, pa), (b, pb));
                    }
                }
            }
        }
        break;
    }

    VehicleAssignment::new(vehicles)
}

/// Exchanges two points held by different vehicles.
fn swap_points(vehicles: &mut [Vec<Point>], (a, pa): (usize, usize), (b, pb): (usize, usize)) {
    let tmp = vehicles[a][pa];
    vehicles[a][pa] = vehicles[b][pb];
    vehicles[b][pb] = tmp;
}
