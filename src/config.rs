//! Routing configuration.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::error::{Result, RoutingError};
use crate::local_search::DEFAULT_ITERATION_CAP;
use crate::partition::PartitionPolicy;

/// Settings recognized by the routing pipeline.
///
/// Serialized keys are camelCase; missing keys take their defaults.
///
/// # Examples
///
/// ```
/// use u_courier::config::RoutingConfig;
/// use u_courier::distance::DistanceMetric;
/// use u_courier::partition::PartitionPolicy;
///
/// let json = r#"{
///     "metric": "manhattan",
///     "vehicleCount": 3,
///     "partitionPolicy": "random",
///     "dayBudget": 480
/// }"#;
/// let config = RoutingConfig::from_json(json).unwrap();
/// assert_eq!(config.metric(), DistanceMetric::Manhattan);
/// assert_eq!(config.vehicle_count(), 3);
/// assert_eq!(config.partition_policy(), PartitionPolicy::Random);
/// assert_eq!(config.day_budget(), Some(480.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct RoutingConfig {
    metric: DistanceMetric,
    vehicle_count: usize,
    partition_policy: PartitionPolicy,
    day_budget: Option<f64>,
    two_opt_iteration_cap: usize,
    rebalance: bool,
}

impl RoutingConfig {
    /// Creates the default configuration.
    ///
    /// Default: Euclidean metric, two vehicles, category-balanced split,
    /// no day budget, 2-opt cap of [`DEFAULT_ITERATION_CAP`], no rebalancing.
    pub fn new() -> Self {
        Self {
            metric: DistanceMetric::Euclidean,
            vehicle_count: 2,
            partition_policy: PartitionPolicy::Category,
            day_budget: None,
            two_opt_iteration_cap: DEFAULT_ITERATION_CAP,
            rebalance: false,
        }
    }

    /// Parses a JSON document and validates it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the distance metric.
    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Sets the number of vehicles.
    pub fn with_vehicle_count(mut self, count: usize) -> Self {
        self.vehicle_count = count;
        self
    }

    /// Sets the partition policy.
    pub fn with_partition_policy(mut self, policy: PartitionPolicy) -> Self {
        self.partition_policy = policy;
        self
    }

    /// Enables day scheduling with the given per-day budget.
    pub fn with_day_budget(mut self, budget: f64) -> Self {
        self.day_budget = Some(budget);
        self
    }

    /// Sets the 2-opt iteration cap.
    pub fn with_two_opt_iteration_cap(mut self, cap: usize) -> Self {
        self.two_opt_iteration_cap = cap;
        self
    }

    /// Enables or disables inter-vehicle swap rebalancing.
    pub fn with_rebalance(mut self, rebalance: bool) -> Self {
        self.rebalance = rebalance;
        self
    }

    /// Distance metric.
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Number of vehicles.
    pub fn vehicle_count(&self) -> usize {
        self.vehicle_count
    }

    /// Partition policy.
    pub fn partition_policy(&self) -> PartitionPolicy {
        self.partition_policy
    }

    /// Per-day travel budget, if day scheduling is enabled.
    pub fn day_budget(&self) -> Option<f64> {
        self.day_budget
    }

    /// Maximum number of 2-opt reversals (and rebalance swaps) per run.
    pub fn two_opt_iteration_cap(&self) -> usize {
        self.two_opt_iteration_cap
    }

    /// Whether swap rebalancing runs after partitioning.
    pub fn rebalance(&self) -> bool {
        self.rebalance
    }

    /// Checks every setting, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.vehicle_count == 0 {
            return Err(RoutingError::InvalidVehicleCount {
                count: self.vehicle_count,
            });
        }
        if let Some(budget) = self.day_budget {
            if !budget.is_finite() || budget <= 0.0 {
                return Err(RoutingError::DegenerateBudget { budget });
            }
        }
        if self.two_opt_iteration_cap == 0 {
            return Err(RoutingError::InvalidIterationCap);
        }
        Ok(())
    }
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let c = RoutingConfig::default();
        assert_eq!(c.metric(), DistanceMetric::Euclidean);
        assert_eq!(c.vehicle_count(), 2);
        assert_eq!(c.partition_policy(), PartitionPolicy::Category);
        assert!(c.day_budget().is_none());
        assert_eq!(c.two_opt_iteration_cap(), DEFAULT_ITERATION_CAP);
        assert!(!c.rebalance());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = RoutingConfig::new()
            .with_metric(DistanceMetric::Manhattan)
            .with_vehicle_count(4)
            .with_partition_policy(PartitionPolicy::Random)
            .with_day_budget(120.0)
            .with_two_opt_iteration_cap(20)
            .with_rebalance(true);
        assert_eq!(c.metric(), DistanceMetric::Manhattan);
        assert_eq!(c.vehicle_count(), 4);
        assert_eq!(c.partition_policy(), PartitionPolicy::Random);
        assert_eq!(c.day_budget(), Some(120.0));
        assert_eq!(c.two_opt_iteration_cap(), 20);
        assert!(c.rebalance());
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        assert!(matches!(
            RoutingConfig::new().with_vehicle_count(0).validate(),
            Err(RoutingError::InvalidVehicleCount { count: 0 })
        ));
        assert!(matches!(
            RoutingConfig::new().with_day_budget(0.0).validate(),
            Err(RoutingError::DegenerateBudget { .. })
        ));
        assert!(matches!(
            RoutingConfig::new().with_day_budget(-1.0).validate(),
            Err(RoutingError::DegenerateBudget { .. })
        ));
        assert!(matches!(
            RoutingConfig::new().with_two_opt_iteration_cap(0).validate(),
            Err(RoutingError::InvalidIterationCap)
        ));
    }

    #[test]
    fn test_from_json_defaults_missing_keys() {
        let c = RoutingConfig::from_json("{}").expect("valid");
        assert_eq!(c, RoutingConfig::default());

        let c = RoutingConfig::from_json(r#"{"twoOptIterationCap": 20, "rebalance": true}"#)
            .expect("valid");
        assert_eq!(c.two_opt_iteration_cap(), 20);
        assert!(c.rebalance());
    }

    #[test]
    fn test_from_json_errors() {
        assert!(matches!(
            RoutingConfig::from_json(r#"{"metric": "chebyshev"}"#),
            Err(RoutingError::Config(_))
        ));
        assert!(matches!(
            RoutingConfig::from_json(r#"{"vehicles": 2}"#),
            Err(RoutingError::Config(_))
        ));
        assert!(matches!(
            RoutingConfig::from_json(r#"{"dayBudget": -3}"#),
            Err(RoutingError::DegenerateBudget { .. })
        ));
    }

    #[test]
    fn test_json_round_trip_keys() {
        let json = serde_json::to_value(RoutingConfig::new().with_day_budget(50.0)).expect("valid");
        assert_eq!(json["vehicleCount"], 2);
        assert_eq!(json["partitionPolicy"], "category");
        assert_eq!(json["dayBudget"], 50.0);
    }
}
