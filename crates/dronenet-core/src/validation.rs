//! Route feasibility checks against drone range and battery.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::battery::ConsumptionTable;
use crate::models::RoutePoint;
use crate::route::route_distance;

/// A reason a route cannot be flown as planned.
///
/// The `Display` text is the message shown to operators.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteIssue {
    #[error("Route distance ({distance_km:.1} km) exceeds drone's maximum range of {max_range_km} km")]
    ExceedsRange { distance_km: f64, max_range_km: f64 },
    #[error("Estimated battery usage ({usage_pct:.1}%) exceeds current battery level ({battery_pct}%)")]
    ExceedsBattery { usage_pct: f64, battery_pct: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub issues: Vec<String>,
    /// Set when the range check failed
    #[serde(default)]
    pub range_exceeded: bool,
}

impl ValidationResult {
    fn from_issues(issues: &[RouteIssue]) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues: issues.iter().map(ToString::to_string).collect(),
            range_exceeded: issues
                .iter()
                .any(|issue| matches!(issue, RouteIssue::ExceedsRange { .. })),
        }
    }

    /// True when the range check is among the failures.
    pub fn exceeds_range(&self) -> bool {
        self.range_exceeded
    }
}

/// Collect every issue with a route; both checks always run.
pub fn route_issues(
    points: &[RoutePoint],
    max_range_km: f64,
    battery_pct: f64,
    model: &str,
    table: &ConsumptionTable,
) -> Vec<RouteIssue> {
    let total_distance = route_distance(points);
    let estimated_usage = table.estimate_battery_usage(total_distance, model);
    let mut issues = Vec::new();

    if total_distance > max_range_km {
        issues.push(RouteIssue::ExceedsRange {
            distance_km: total_distance,
            max_range_km,
        });
    }

    if estimated_usage > battery_pct {
        issues.push(RouteIssue::ExceedsBattery {
            usage_pct: estimated_usage,
            battery_pct,
        });
    }

    issues
}

/// Validate a route against a drone's range and current battery.
pub fn validate_route(
    points: &[RoutePoint],
    max_range_km: f64,
    battery_pct: f64,
    model: &str,
    table: &ConsumptionTable,
) -> ValidationResult {
    ValidationResult::from_issues(&route_issues(
        points,
        max_range_km,
        battery_pct,
        model,
        table,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ten_km_route() -> Vec<RoutePoint> {
        vec![RoutePoint::start(0.0, 0.0), RoutePoint::end(0.0, 0.0899)]
    }

    #[test]
    fn short_route_is_valid() {
        let table = ConsumptionTable::default();
        // 10 km at 6%/km is 60%, under a full battery
        let result = validate_route(&ten_km_route(), 35.0, 100.0, "DJI Mini 3", &table);
        assert!(result.is_valid);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn range_issue_reports_distance_and_limit() {
        let table = ConsumptionTable::default();
        let result = validate_route(&ten_km_route(), 5.0, 100.0, "DJI Mini 3", &table);
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec!["Route distance (10.0 km) exceeds drone's maximum range of 5 km".to_string()]
        );
        assert!(result.exceeds_range());
    }

    #[test]
    fn battery_issue_reports_capped_usage() {
        let table = ConsumptionTable::default();
        let result = validate_route(&ten_km_route(), 35.0, 50.0, "Skydio 2+", &table);
        assert!(!result.is_valid);
        assert_eq!(
            result.issues,
            vec!["Estimated battery usage (100.0%) exceeds current battery level (50%)".to_string()]
        );
        assert!(!result.exceeds_range());
    }

    #[test]
    fn both_checks_are_reported_together() {
        let table = ConsumptionTable::default();
        let result = validate_route(&ten_km_route(), 5.0, 40.0, "DJI Mavic Pro", &table);
        assert_eq!(result.issues.len(), 2);
        assert!(result.issues[0].contains("maximum range"));
        assert!(result.issues[1].contains("battery"));
    }

    #[test]
    fn range_flag_comes_from_the_issue_kind() {
        let table = ConsumptionTable::default();
        let result = validate_route(&ten_km_route(), 5.0, 100.0, "DJI Mini 3", &table);
        assert!(result.range_exceeded);

        // Reworded messages must not change the flag.
        let reworded = ValidationResult {
            issues: vec!["Route too long".to_string()],
            ..result.clone()
        };
        assert!(reworded.exceeds_range());

        let text_only = ValidationResult {
            is_valid: false,
            issues: vec!["mentions maximum range but is a battery issue".to_string()],
            range_exceeded: false,
        };
        assert!(!text_only.exceeds_range());
    }

    #[test]
    fn trivial_routes_are_always_valid() {
        let table = ConsumptionTable::default();
        assert!(validate_route(&[], 0.0, 0.0, "Skydio 2+", &table).is_valid);
        let single = [RoutePoint::start(10.0, 10.0)];
        assert!(validate_route(&single, 0.0, 0.0, "Skydio 2+", &table).is_valid);
    }

    #[test]
    fn zero_range_flags_any_positive_distance() {
        let table = ConsumptionTable::default();
        let issues = route_issues(&ten_km_route(), 0.0, 100.0, "DJI Mini 3", &table);
        assert!(matches!(issues[0], RouteIssue::ExceedsRange { max_range_km, .. } if max_range_km == 0.0));
        assert_eq!(
            issues[0].to_string(),
            "Route distance (10.0 km) exceeds drone's maximum range of 0 km"
        );
    }

    #[test]
    fn fractional_limits_print_as_given() {
        let issue = RouteIssue::ExceedsRange {
            distance_km: 42.31,
            max_range_km: 35.5,
        };
        assert_eq!(
            issue.to_string(),
            "Route distance (42.3 km) exceeds drone's maximum range of 35.5 km"
        );
    }
}
