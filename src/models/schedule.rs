//! Day-indexed schedule types.

use super::{Point, Tour};
use crate::distance::Metric;

/// One day's tour within a [`DaySchedule`].
#[derive(Debug, Clone, PartialEq)]
pub struct DayTour {
    /// Day index, starting at 1.
    pub day: usize,
    /// Depot-bounded tour driven on this day.
    pub tour: Tour,
    /// Travel charged against the day budget (excludes the return to depot).
    pub elapsed: f64,
}

/// A single vehicle's deliveries cut into budget-limited days.
///
/// Days are appended in construction order and numbered contiguously from 1.
///
/// # Examples
///
/// ```
/// use u_courier::models::{DaySchedule, Point, Tour};
///
/// let depot = Point::new(0.0, 0.0);
/// let mut schedule = DaySchedule::new();
/// schedule.push_day(Tour::from_stops(depot, vec![Point::new(1.0, 0.0)]).unwrap(), 1.0);
/// assert_eq!(schedule.num_days(), 1);
/// assert_eq!(schedule.days()[0].day, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DaySchedule {
    days: Vec<DayTour>,
}

impl DaySchedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self { days: Vec::new() }
    }

    /// Appends a tour as the next day.
    pub fn push_day(&mut self, tour: Tour, elapsed: f64) {
        let day = self.days.len() + 1;
        self.days.push(DayTour { day, tour, elapsed });
    }

    /// Days in order.
    pub fn days(&self) -> &[DayTour] {
        &self.days
    }

    /// The tour for a 1-based day index.
    pub fn day(&self, day: usize) -> Option<&Tour> {
        day.checked_sub(1)
            .and_then(|i| self.days.get(i))
            .map(|d| &d.tour)
    }

    /// Number of days.
    pub fn num_days(&self) -> usize {
        self.days.len()
    }

    /// Returns `true` if no days were scheduled.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Delivery stops of every day concatenated in visiting order.
    pub fn visited_points(&self) -> Vec<Point> {
        self.days
            .iter()
            .flat_map(|d| d.tour.stops().iter().copied())
            .collect()
    }

    /// Sum of every day's full tour length, depot returns included.
    pub fn total_length<M: Metric + ?Sized>(&self, metric: &M) -> f64 {
        self.days.iter().map(|d| d.tour.length(metric)).sum()
    }
}
