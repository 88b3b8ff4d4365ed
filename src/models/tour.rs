//! Depot-bounded tour type.

use std::collections::HashSet;
use std::fmt;

use super::Point;
use crate::distance::{path_length, Metric};

/// An ordered visiting sequence that starts and ends at the depot.
///
/// Unlike a bare point list, a `Tour` always holds at least two points, its
/// first and last points are the depot, and no delivery point appears twice.
/// Tours are values: each construction or improvement yields a fresh tour.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Point, Tour};
/// use u_courier::distance::DistanceMetric;
///
/// let depot = Point::new(0.0, 0.0);
/// let tour = Tour::from_stops(depot, vec![Point::new(3.0, 4.0)]).unwrap();
/// assert_eq!(tour.points().len(), 3);
/// assert_eq!(tour.num_stops(), 1);
/// assert!((tour.length(&DistanceMetric::Euclidean) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    points: Vec<Point>,
}

impl Tour {
    /// The depot-to-depot tour with no deliveries.
    pub fn trivial(depot: Point) -> Self {
        Self {
            points: vec![depot, depot],
        }
    }

    /// Builds a tour visiting `stops` in the given order.
    ///
    /// Returns `None` if a stop coincides with the depot or appears twice.
    pub fn from_stops(depot: Point, stops: Vec<Point>) -> Option<Self> {
        let mut seen = HashSet::with_capacity(stops.len());
        for s in &stops {
            if *s == depot || !seen.insert(s.coordinate_key()) {
                return None;
            }
        }
        Some(Self::enclose(depot, stops))
    }

    /// Wraps stops already known to be distinct and depot-free.
    pub(crate) fn enclose(depot: Point, stops: Vec<Point>) -> Self {
        let mut points = Vec::with_capacity(stops.len() + 2);
        points.push(depot);
        points.extend(stops);
        points.push(depot);
        Self { points }
    }

    /// Wraps a full sequence whose first and last elements are the depot.
    pub(crate) fn from_bounded(points: Vec<Point>) -> Self {
        debug_assert!(points.len() >= 2 && points.first() == points.last());
        Self { points }
    }

    /// The full sequence including both depot endpoints.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The depot this tour starts and ends at.
    pub fn depot(&self) -> Point {
        self.points[0]
    }

    /// Delivery stops in visiting order, depot endpoints excluded.
    pub fn stops(&self) -> &[Point] {
        &self.points[1..self.points.len() - 1]
    }

    /// Number of delivery stops.
    pub fn num_stops(&self) -> usize {
        self.points.len() - 2
    }

    /// Returns `true` if the tour makes no deliveries.
    pub fn is_trivial(&self) -> bool {
        self.num_stops() == 0
    }

    /// Total travel length under `metric`, including the return to depot.
    pub fn length<M: Metric + ?Sized>(&self, metric: &M) -> f64 {
        path_length(&self.points, metric)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{p}")?;
        }
        Ok(())
    }
}
