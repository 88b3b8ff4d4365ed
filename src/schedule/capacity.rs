//! Day-budget scheduler.
//!
//! # Algorithm
//!
//! Walk the vehicle's points in nearest-neighbor order, charging each hop
//! against a running day budget. When the next hop would push the day over
//! budget, the vehicle returns to the depot and the walk resumes from the
//! depot on a new day. A day whose charged travel reaches the budget is
//! closed immediately. The return leg to the depot is not charged.
//!
//! A point whose hop from the depot alone exceeds the budget is still
//! served, on a day of its own.
//!
//! # Complexity
//!
//! O(n²) where n = number of points.

use crate::constructive::nearest_unvisited;
use crate::distance::Metric;
use crate::error::{Result, RoutingError};
use crate::models::{check_routable, DaySchedule, Point, Tour};

/// Cuts a nearest-neighbor walk over `points` into day tours.
///
/// Every point is visited exactly once across all days, in visiting order.
/// An empty input yields an empty schedule (no days).
///
/// # Errors
///
/// Returns [`RoutingError::DegenerateBudget`] if `day_budget` is not a
/// positive finite number, and the same point errors as
/// [`nearest_neighbor`](crate::constructive::nearest_neighbor) for a
/// non-finite, repeated, or depot point. Validation happens before any
/// scheduling.
///
/// # Examples
///
/// ```
/// use u_courier::models::Point;
/// use u_courier::distance::DistanceMetric;
/// use u_courier::schedule::schedule_days;
///
/// let depot = Point::new(0.0, 0.0);
/// let points: Vec<Point> = (1..=6).map(|x| Point::new(x as f64, 0.0)).collect();
///
/// let schedule = schedule_days(&points, depot, &DistanceMetric::Euclidean, 4.0).unwrap();
/// assert_eq!(schedule.num_days(), 3);
/// assert_eq!(schedule.days()[0].tour.num_stops(), 4);
/// assert_eq!(schedule.visited_points(), points);
/// ```
pub fn schedule_days<M: Metric + ?Sized>(
    points: &[Point],
    depot: Point,
    metric: &M,
    day_budget: f64,
) -> Result<DaySchedule> {
    if !day_budget.is_finite() || day_budget <= 0.0 {
        return Err(RoutingError::DegenerateBudget { budget: day_budget });
    }
    check_routable(points, depot)?;

    let mut schedule = DaySchedule::new();
    let mut visited = vec![false; points.len()];
    let mut day = DayState::new(depot);

    while let Some((next, hop)) = nearest_unvisited(points, &visited, &day.position, metric) {
        if day.elapsed + hop > day_budget && !day.stops.is_empty() {
            day.close(&mut schedule);
            continue;
        }

        visited[next] = true;
        day.visit(points[next], hop);

        if day.elapsed >= day_budget {
            day.close(&mut schedule);
        }
    }

    if !day.stops.is_empty() {
        day.close(&mut schedule);
    }

    log::debug!(
        "scheduled {} point(s) over {} day(s) with budget {day_budget}",
        points.len(),
        schedule.num_days()
    );
    Ok(schedule)
}

/// The day currently being filled.
struct DayState {
    depot: Point,
    position: Point,
    stops: Vec<Point>,
    elapsed: f64,
}

impl DayState {
    fn new(depot: Point) -> Self {
        Self {
            depot,
            position: depot,
            stops: Vec::new(),
            elapsed: 0.0,
        }
    }

    fn visit(&mut self, point: Point, hop: f64) {
        self.stops.push(point);
        self.elapsed += hop;
        self.position = point;
    }

    /// Returns to the depot, records the day, and starts a fresh one.
    fn close(&mut self, schedule: &mut DaySchedule) {
        let stops = std::mem::take(&mut self.stops);
        log::debug!(
            "day {} closed: {} stop(s), {:.3} charged",
            schedule.num_days() + 1,
            stops.len(),
            self.elapsed
        );
        schedule.push_day(Tour::enclose(self.depot, stops), self.elapsed);
        self.elapsed = 0.0;
        self.position = self.depot;
    }
}
