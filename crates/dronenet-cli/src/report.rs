//! Plain-text rendering of planner results.

use dronenet_core::{Reachability, RoutePlan, ValidationResult};

pub fn format_validation(result: &ValidationResult) -> String {
    if result.is_valid {
        return "Route is valid".to_string();
    }
    let mut out = String::from("Route has issues:");
    for issue in &result.issues {
        out.push_str(&format!("\n  - {issue}"));
    }
    out
}

pub fn format_plan(plan: &RoutePlan) -> String {
    let mut lines: Vec<String> = plan
        .leg_distances_km
        .iter()
        .enumerate()
        .map(|(i, leg)| format!("Leg {}: {leg:.1} km", i + 1))
        .collect();
    lines.push(format!("Total distance: {:.1} km", plan.total_distance_km));
    lines.push(format!(
        "Estimated battery usage: {:.1}%",
        plan.estimated_battery_usage_pct
    ));
    lines.push(format_validation(&plan.validation));

    if !plan.charging.stops.is_empty() {
        lines.push("Suggested charging stops:".to_string());
        lines.extend(plan.charging.stops.iter().map(|stop| {
            format!(
                "  - {} (from point {}, {:.1} km away)",
                stop.station_id, stop.point_index, stop.detour_km
            )
        }));
    }
    lines.join("\n")
}

pub fn format_reachability(reach: &Reachability) -> String {
    if reach.exceeds_range {
        format!(
            "Station is {:.1} km away and exceeds the drone's range",
            reach.distance_km
        )
    } else {
        format!("Station is {:.1} km away and within range", reach.distance_km)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronenet_core::{ChargingStation, Coordinate, DroneProfile, DroneStatus, RoutePlanner, RoutePoint};

    #[test]
    fn valid_result_is_one_line() {
        let result = ValidationResult {
            is_valid: true,
            ..ValidationResult::default()
        };
        assert_eq!(format_validation(&result), "Route is valid");
    }

    #[test]
    fn issues_are_listed() {
        let result = ValidationResult {
            is_valid: false,
            issues: vec!["first".to_string(), "second".to_string()],
            range_exceeded: false,
        };
        assert_eq!(
            format_validation(&result),
            "Route has issues:\n  - first\n  - second"
        );
    }

    #[test]
    fn plan_lists_legs_and_stops() {
        let drone = DroneProfile {
            id: "drone_1".to_string(),
            name: String::new(),
            model: "DJI Mini 3".to_string(),
            max_range_km: 5.0,
            battery_pct: 100.0,
            status: DroneStatus::Active,
            position: Coordinate::new(0.0, 0.0),
            owner_id: None,
        };
        let route = vec![RoutePoint::start(0.0, 0.0), RoutePoint::end(0.0, 0.0899)];
        let stations = vec![ChargingStation::new("stop_1", Coordinate::new(0.0, 0.0), true)];
        let plan = RoutePlanner::default().plan(&drone, &route, &stations);

        let text = format_plan(&plan);
        assert!(text.contains("Leg 1: 10.0 km"));
        assert!(text.contains("Total distance: 10.0 km"));
        assert!(text.contains("maximum range of 5 km"));
        assert!(text.contains("stop_1 (from point 0, 0.0 km away)"));
        assert_eq!(text.lines().next(), Some("Leg 1: 10.0 km"));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn reachability_wording() {
        let far = Reachability {
            distance_km: 60.0,
            exceeds_range: true,
        };
        assert!(format_reachability(&far).contains("exceeds"));
        let near = Reachability {
            distance_km: 2.0,
            exceeds_range: false,
        };
        assert!(format_reachability(&near).contains("within range"));
    }
}
