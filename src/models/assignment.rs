//! Vehicle-to-points assignment.

use super::Point;

/// Disjoint delivery point subsets, one per vehicle.
///
/// Vehicle identifiers are the indices `0..num_vehicles()`.
///
/// # Examples
///
/// ```
/// use u_courier::models::{Point, VehicleAssignment};
///
/// let a = VehicleAssignment::new(vec![
///     vec![Point::new(1.0, 0.0)],
///     vec![Point::new(2.0, 0.0), Point::new(3.0, 0.0)],
/// ]);
/// assert_eq!(a.num_vehicles(), 2);
/// assert_eq!(a.num_points(), 3);
/// assert_eq!(a.vehicle(1).map(|p| p.len()), Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VehicleAssignment {
    vehicles: Vec<Vec<Point>>,
}

impl VehicleAssignment {
    /// Creates an assignment from per-vehicle point lists.
    pub fn new(vehicles: Vec<Vec<Point>>) -> Self {
        Self { vehicles }
    }

    /// Number of vehicles, including those with nothing assigned.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }

    /// Points assigned to vehicle `id`, if it exists.
    pub fn vehicle(&self, id: usize) -> Option<&[Point]> {
        self.vehicles.get(id).map(Vec::as_slice)
    }

    /// Iterates `(vehicle_id, points)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Point])> {
        self.vehicles
            .iter()
            .enumerate()
            .map(|(id, pts)| (id, pts.as_slice()))
    }

    /// Total number of assigned points across all vehicles.
    pub fn num_points(&self) -> usize {
        self.vehicles.iter().map(Vec::len).sum()
    }

    /// Consumes the assignment, returning the per-vehicle lists.
    pub fn into_vehicles(self) -> Vec<Vec<Point>> {
        self.vehicles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VehicleAssignment {
        VehicleAssignment::new(vec![
            vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)],
            vec![Point::new(3.0, 0.0)],
        ])
    }

    #[test]
    fn test_accessors() {
        let a = sample();
        assert_eq!(a.num_vehicles(), 2);
        assert_eq!(a.num_points(), 3);
        assert!(a.vehicle(2).is_none());
        let ids: Vec<usize> = a.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn test_default_is_empty() {
        let a = VehicleAssignment::default();
        assert_eq!(a.num_vehicles(), 0);
        assert!(a.into_vehicles().is_empty());
    }
}
