//! End-to-end fleet route planning.
//!
//! Runs the full pipeline for one depot: ingestion, partitioning, optional
//! rebalancing, and per-vehicle nearest-neighbor construction, 2-opt
//! improvement, and day scheduling.

use rand::Rng;

use crate::config::RoutingConfig;
use crate::constructive::construct;
use crate::error::Result;
use crate::local_search::{rebalance_swap, two_opt_improve};
use crate::models::{DaySchedule, Point, PointSet, Tour};
use crate::partition::partition;
use crate::schedule::schedule_days;

/// The routes planned for one vehicle.
#[derive(Debug, Clone)]
pub struct VehiclePlan {
    /// Vehicle identifier (index in the assignment).
    pub vehicle_id: usize,
    /// Points assigned to this vehicle, in assignment order.
    pub points: Vec<Point>,
    /// Nearest-neighbor tour before improvement.
    pub initial_tour: Tour,
    /// Tour after 2-opt improvement.
    pub tour: Tour,
    /// Day tours, when a day budget is configured.
    pub schedule: Option<DaySchedule>,
}

/// Planned routes for a whole fleet.
#[derive(Debug, Clone)]
pub struct RoutePlan {
    config: RoutingConfig,
    depot: Point,
    vehicles: Vec<VehiclePlan>,
}

impl RoutePlan {
    /// Configuration the plan was built with.
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Shared depot.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Per-vehicle plans, ordered by vehicle id.
    pub fn vehicles(&self) -> &[VehiclePlan] {
        &self.vehicles
    }

    /// Sum of the improved tour lengths across vehicles.
    pub fn total_length(&self) -> f64 {
        let metric = self.config.metric();
        self.vehicles.iter().map(|v| v.tour.length(&metric)).sum()
    }

    /// Sum of the nearest-neighbor tour lengths across vehicles.
    pub fn initial_length(&self) -> f64 {
        let metric = self.config.metric();
        self.vehicles
            .iter()
            .map(|v| v.initial_tour.length(&metric))
            .sum()
    }
}

/// Plans depot-bounded routes for every vehicle.
///
/// The configuration is validated and the points ingested before any work
/// starts; on error nothing is returned. `rng` is only drawn from by the
/// random partition policy.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_courier::config::RoutingConfig;
/// use u_courier::models::Point;
/// use u_courier::planner::plan_routes;
///
/// let depot = Point::new(0.0, 0.0);
/// let points = [
///     Point::priority(3.0, 4.0),
///     Point::new(6.0, 8.0),
///     Point::new(-3.0, 4.0),
///     Point::new(3.0, 4.0),
/// ];
/// let config = RoutingConfig::new().with_day_budget(20.0);
///
/// let plan = plan_routes(&points, depot, &config, &mut StdRng::seed_from_u64(1)).unwrap();
/// assert_eq!(plan.vehicles().len(), 2);
/// assert!(plan.total_length() <= plan.initial_length() + 1e-10);
/// assert!(plan.vehicles().iter().all(|v| v.schedule.is_some()));
/// ```
pub fn plan_routes<R: Rng + ?Sized>(
    points: &[Point],
    depot: Point,
    config: &RoutingConfig,
    rng: &mut R,
) -> Result<RoutePlan> {
    config.validate()?;
    let set = PointSet::ingest(points, depot)?;
    let metric = config.metric();
    let cap = config.two_opt_iteration_cap();

    let mut assignment = partition(
        set.points(),
        config.vehicle_count(),
        config.partition_policy(),
        rng,
    )?;
    if config.rebalance() {
        assignment = rebalance_swap(&assignment, depot, &metric, cap);
    }

    let mut vehicles = Vec::with_capacity(assignment.num_vehicles());
    for (vehicle_id, assigned) in assignment.iter() {
        let initial_tour = construct(assigned, depot, &metric);
        let tour = two_opt_improve(&initial_tour, &metric, cap);
        let schedule = config
            .day_budget()
            .map(|budget| schedule_days(assigned, depot, &metric, budget))
            .transpose()?;
        log::debug!(
            "vehicle {vehicle_id}: {} stop(s), length {:.3} -> {:.3}",
            assigned.len(),
            initial_tour.length(&metric),
            tour.length(&metric)
        );
        vehicles.push(VehiclePlan {
            vehicle_id,
            points: assigned.to_vec(),
            initial_tour,
            tour,
            schedule,
        });
    }

    Ok(RoutePlan {
        config: config.clone(),
        depot,
        vehicles,
    })
}
