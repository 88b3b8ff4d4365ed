//! Delivery point and ingestion types.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};

/// A location on the plane, optionally flagged as a priority delivery.
///
/// Equality compares coordinates only; the priority flag is ignored, so two
/// points at the same coordinates are duplicates regardless of category.
///
/// # Examples
///
/// ```
/// use u_courier::models::Point;
///
/// let a = Point::new(3.0, 4.0);
/// let b = Point::priority(3.0, 4.0);
/// assert_eq!(a, b);
/// assert!(b.is_priority());
/// assert_eq!(b.to_string(), "[3, 4]");
/// assert_eq!(a.to_string(), "(3, 4)");
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    #[serde(default)]
    priority: bool,
}

impl Point {
    /// Creates a standard (non-priority) point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            priority: false,
        }
    }

    /// Creates a priority point.
    pub const fn priority(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            priority: true,
        }
    }

    /// Sets the priority flag.
    pub const fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` for priority deliveries.
    pub fn is_priority(&self) -> bool {
        self.priority
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Hashable identity of the coordinates. `-0.0` and `0.0` share a key.
    pub(crate) fn coordinate_key(&self) -> (u64, u64) {
        ((self.x + 0.0).to_bits(), (self.y + 0.0).to_bits())
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.priority {
            write!(f, "[{}, {}]", self.x, self.y)
        } else {
            write!(f, "({}, {})", self.x, self.y)
        }
    }
}

/// Checks that `points` can be routed from `depot` as given.
///
/// Rejects a non-finite depot or point, a point on the depot, and a repeated
/// point, reporting the first offender in input order.
pub(crate) fn check_routable(points: &[Point], depot: Point) -> Result<()> {
    check_depot(depot)?;
    let mut first_seen = HashMap::with_capacity(points.len());
    for (index, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(RoutingError::InvalidCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }
        if *p == depot {
            return Err(RoutingError::DepotPoint { index });
        }
        if let Some(&first) = first_seen.get(&p.coordinate_key()) {
            return Err(RoutingError::DuplicatePoint {
                index,
                first,
                x: p.x,
                y: p.y,
            });
        }
        first_seen.insert(p.coordinate_key(), index);
    }
    Ok(())
}

fn check_depot(depot: Point) -> Result<()> {
    if depot.is_finite() {
        Ok(())
    } else {
        Err(RoutingError::InvalidDepot {
            x: depot.x,
            y: depot.y,
        })
    }
}

/// A validated, duplicate-free set of delivery points for one depot.
///
/// Ingestion rejects non-finite coordinates, keeps only the first occurrence
/// of each coordinate pair, and drops points sitting on the depot. Input
/// order is otherwise preserved, which keeps downstream tie-breaking
/// reproducible.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Point, PointSet};
///
/// let depot = Point::new(0.0, 0.0);
/// let raw = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(3.0, 4.0)];
/// let set = PointSet::ingest(&raw, depot).unwrap();
/// assert_eq!(set.points(), &[Point::new(3.0, 4.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct PointSet {
    depot: Point,
    points: Vec<Point>,
}

impl PointSet {
    /// Validates and deduplicates `raw` against `depot`.
    pub fn ingest(raw: &[Point], depot: Point) -> Result<Self> {
        check_depot(depot)?;
        if let Some((index, p)) = raw.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(RoutingError::InvalidCoordinate {
                index,
                x: p.x,
                y: p.y,
            });
        }

        let mut seen = HashSet::with_capacity(raw.len() + 1);
        seen.insert(depot.coordinate_key());
        let points: Vec<Point> = raw
            .iter()
            .copied()
            .filter(|p| seen.insert(p.coordinate_key()))
            .collect();

        let dropped = raw.len() - points.len();
        if dropped > 0 {
            log::debug!("ingestion dropped {dropped} duplicate or depot point(s)");
        }

        Ok(Self { depot, points })
    }

    /// The depot every tour starts and ends at.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Delivery points in input order, depot excluded.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of delivery points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if there is nothing to deliver.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the set, returning the delivery points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_equality_ignores_priority() {
        assert_eq!(Point::new(1.0, 2.0), Point::priority(1.0, 2.0));
        assert_ne!(Point::new(1.0, 2.0), Point::new(2.0, 1.0));
        assert_eq!(Point::new(-0.0, 0.0), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(1.5, -2.0).to_string(), "(1.5, -2)");
        assert_eq!(Point::priority(7.0, 8.0).to_string(), "[7, 8]");
    }

    #[test]
    fn test_with_priority() {
        let p = Point::new(1.0, 1.0).with_priority(true);
        assert!(p.is_priority());
        assert!(!p.with_priority(false).is_priority());
    }

    #[test]
    fn test_ingest_deduplicates_keeping_first() {
        let raw = [
            Point::priority(3.0, 4.0),
            Point::new(1.0, 1.0),
            Point::new(3.0, 4.0),
        ];
        let set = PointSet::ingest(&raw, Point::new(0.0, 0.0)).expect("valid");
        assert_eq!(set.len(), 2);
        assert!(set.points()[0].is_priority());
        assert_eq!(set.points()[1], Point::new(1.0, 1.0));
    }

    #[test]
    fn test_ingest_drops_depot() {
        let raw = [Point::new(0.0, 0.0), Point::new(-0.0, 0.0), Point::new(5.0, 5.0)];
        let set = PointSet::ingest(&raw, Point::new(0.0, 0.0)).expect("valid");
        assert_eq!(set.points(), &[Point::new(5.0, 5.0)]);
        assert_eq!(set.depot(), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_ingest_allows_negative_coordinates() {
        let raw = [Point::new(-3.0, -4.0)];
        let set = PointSet::ingest(&raw, Point::new(0.0, 0.0)).expect("valid");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_ingest_rejects_non_finite() {
        let raw = [Point::new(1.0, 1.0), Point::new(f64::NAN, 2.0)];
        let err = PointSet::ingest(&raw, Point::new(0.0, 0.0)).expect_err("nan");
        assert!(matches!(err, RoutingError::InvalidCoordinate { index: 1, .. }));

        let raw = [Point::new(f64::INFINITY, 2.0)];
        assert!(PointSet::ingest(&raw, Point::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_ingest_rejects_bad_depot() {
        let err = PointSet::ingest(&[], Point::new(0.0, f64::NEG_INFINITY)).expect_err("depot");
        assert!(matches!(err, RoutingError::InvalidDepot { .. }));
    }

    #[test]
    fn test_check_routable() {
        let depot = Point::new(0.0, 0.0);
        let ok = [Point::new(1.0, 0.0), Point::priority(2.0, 0.0)];
        assert!(check_routable(&ok, depot).is_ok());
        assert!(check_routable(&[], depot).is_ok());

        let dup = [Point::new(1.0, 0.0), Point::new(2.0, 0.0), Point::priority(1.0, 0.0)];
        assert!(matches!(
            check_routable(&dup, depot),
            Err(RoutingError::DuplicatePoint { index: 2, first: 0, .. })
        ));
        let on_depot = [Point::new(1.0, 0.0), Point::new(-0.0, 0.0)];
        assert!(matches!(
            check_routable(&on_depot, depot),
            Err(RoutingError::DepotPoint { index: 1 })
        ));
        let nan = [Point::new(f64::NAN, 0.0)];
        assert!(matches!(
            check_routable(&nan, depot),
            Err(RoutingError::InvalidCoordinate { index: 0, .. })
        ));
        assert!(matches!(
            check_routable(&ok, Point::new(f64::INFINITY, 0.0)),
            Err(RoutingError::InvalidDepot { .. })
        ));
    }

    #[test]
    fn test_point_serde() {
        let p: Point = serde_json::from_str(r#"{"x": 3.0, "y": -4.5, "priority": true}"#)
            .expect("valid");
        assert_eq!(p, Point::new(3.0, -4.5));
        assert!(p.is_priority());

        let standard: Point = serde_json::from_str(r#"{"x": 1, "y": 2}"#).expect("valid");
        assert!(!standard.is_priority());

        let json = serde_json::to_value(Point::priority(7.0, 8.0)).expect("valid");
        assert_eq!(json, serde_json::json!({"x": 7.0, "y": 8.0, "priority": true}));
    }

    #[test]
    fn test_ingest_empty() {
        let set = PointSet::ingest(&[], Point::new(0.0, 0.0)).expect("valid");
        assert!(set.is_empty());
        assert!(set.into_points().is_empty());
    }
}
