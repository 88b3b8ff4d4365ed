//! Planar distance metrics.

use serde::{Deserialize, Serialize};

use crate::models::Point;

/// A travel-cost function between two points.
///
/// Implementations must be symmetric and non-negative, and return zero for
/// points with equal coordinates.
pub trait Metric: Send + Sync {
    /// Travel cost from `a` to `b`.
    fn distance(&self, a: &Point, b: &Point) -> f64;
}

/// The metrics selectable through configuration.
///
/// # Examples
///
/// ```
/// use u_courier::distance::{DistanceMetric, Metric};
/// use u_courier::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((DistanceMetric::Euclidean.distance(&a, &b) - 5.0).abs() < 1e-10);
/// assert!((DistanceMetric::Manhattan.distance(&a, &b) - 7.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Straight-line distance.
    #[default]
    Euclidean,
    /// Sum of absolute coordinate differences.
    Manhattan,
}

impl Metric for DistanceMetric {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        let dx = a.x() - b.x();
        let dy = a.y() - b.y();
        match self {
            DistanceMetric::Euclidean => (dx * dx + dy * dy).sqrt(),
            DistanceMetric::Manhattan => dx.abs() + dy.abs(),
        }
    }
}

impl<M: Metric + ?Sized> Metric for &M {
    fn distance(&self, a: &Point, b: &Point) -> f64 {
        (**self).distance(a, b)
    }
}

/// Sum of `metric` over each consecutive pair of `points`.
///
/// Returns `0.0` for zero or one point.
///
/// # Examples
///
/// ```
/// use u_courier::distance::{path_length, DistanceMetric};
/// use u_courier::models::Point;
///
/// let path = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(0.0, 0.0)];
/// assert!((path_length(&path, &DistanceMetric::Euclidean) - 10.0).abs() < 1e-10);
/// assert_eq!(path_length(&path[..1], &DistanceMetric::Euclidean), 0.0);
/// ```
pub fn path_length<M: Metric + ?Sized>(points: &[Point], metric: &M) -> f64 {
    points
        .windows(2)
        .map(|w| metric.distance(&w[0], &w[1]))
        .sum()
}
