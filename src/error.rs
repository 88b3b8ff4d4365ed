//! Error types raised at the boundary of routing operations.

use thiserror::Error;

/// Errors raised while validating routing inputs or configuration.
///
/// Empty inputs are not errors: they yield trivial tours or empty schedules.
/// Duplicates are dropped by [`PointSet::ingest`](crate::models::PointSet::ingest)
/// but rejected by algorithms that take a raw point slice.
#[derive(Debug, Error)]
pub enum RoutingError {
    /// A delivery point has a NaN or infinite coordinate.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    InvalidCoordinate {
        /// Position of the point in the caller's input.
        index: usize,
        /// X-coordinate as supplied.
        x: f64,
        /// Y-coordinate as supplied.
        y: f64,
    },
    /// A delivery point repeats an earlier point's coordinates.
    #[error("point {index} at ({x}, {y}) duplicates point {first}")]
    DuplicatePoint {
        /// Position of the repeated point in the caller's input.
        index: usize,
        /// Position of its first occurrence.
        first: usize,
        /// X-coordinate as supplied.
        x: f64,
        /// Y-coordinate as supplied.
        y: f64,
    },
    /// A delivery point sits on the depot.
    #[error("point {index} coincides with the depot")]
    DepotPoint {
        /// Position of the point in the caller's input.
        index: usize,
    },
    /// The depot has a NaN or infinite coordinate.
    #[error("depot has a non-finite coordinate ({x}, {y})")]
    InvalidDepot {
        /// X-coordinate as supplied.
        x: f64,
        /// Y-coordinate as supplied.
        y: f64,
    },
    /// The per-day travel budget is zero, negative, or non-finite.
    #[error("day budget must be a positive finite number, got {budget}")]
    DegenerateBudget {
        /// Budget as supplied.
        budget: f64,
    },
    /// The fleet has no vehicles.
    #[error("vehicle count must be at least 1, got {count}")]
    InvalidVehicleCount {
        /// Count as supplied.
        count: usize,
    },
    /// The 2-opt iteration cap is zero.
    #[error("2-opt iteration cap must be at least 1")]
    InvalidIterationCap,
    /// A JSON configuration document could not be parsed.
    #[error("failed to parse routing configuration")]
    Config(#[from] serde_json::Error),
}

/// Result alias for routing operations.
pub type Result<T> = std::result::Result<T, RoutingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let e = RoutingError::DegenerateBudget { budget: -1.0 };
        assert_eq!(
            e.to_string(),
            "day budget must be a positive finite number, got -1"
        );

        let e = RoutingError::InvalidVehicleCount { count: 0 };
        assert_eq!(e.to_string(), "vehicle count must be at least 1, got 0");

        let e = RoutingError::DuplicatePoint {
            index: 2,
            first: 0,
            x: 3.0,
            y: 4.0,
        };
        assert_eq!(e.to_string(), "point 2 at (3, 4) duplicates point 0");
    }

    #[test]
    fn test_config_source() {
        let parse_err = serde_json::from_str::<u32>("not json").expect_err("invalid");
        let e = RoutingError::from(parse_err);
        assert!(std::error::Error::source(&e).is_some());
    }
}
