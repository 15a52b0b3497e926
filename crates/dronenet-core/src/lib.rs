//! DroneNet route planning - distance, battery and charging-stop logic.
//!
//! Pure functions over drone, station and route records supplied by the
//! caller. Nothing here performs I/O or keeps state between calls.

pub mod battery;
pub mod charging;
pub mod error;
pub mod mock;
pub mod models;
pub mod planner;
pub mod reachability;
pub mod route;
pub mod spatial;
pub mod validation;

pub use battery::{ConsumptionTable, DEFAULT_RATE_PCT_PER_KM};
pub use charging::{
    find_optimal_charging_stations, plan_charging_stops, ChargingPlan, ChargingStop, MissPolicy,
    RANGE_SAFETY_FRACTION,
};
pub use error::ConfigError;
pub use mock::{generate_mock_fleet, MockFleet};
pub use models::{
    ChargingStation, DroneProfile, DroneStatus, PlannedRoute, PointKind, RoutePoint, RouteStatus,
};
pub use planner::{PlannerConfig, RoutePlan, RoutePlanner};
pub use reachability::{check_reachability, Reachability};
pub use route::{route_distance, segment_distances};
pub use spatial::{distance, Coordinate, EARTH_RADIUS_KM};
pub use validation::{route_issues, validate_route, RouteIssue, ValidationResult};

/// Projected battery use with the default consumption table, capped at 100%.
pub fn estimate_battery_usage(distance_km: f64, model: &str) -> f64 {
    ConsumptionTable::default().estimate_battery_usage(distance_km, model)
}
