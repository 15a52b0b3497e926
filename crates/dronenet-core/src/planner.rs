//! Route planning façade combining distance, battery, validation and stop selection.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::battery::ConsumptionTable;
use crate::charging::{plan_charging_stops, ChargingPlan, MissPolicy};
use crate::error::ConfigError;
use crate::models::{ChargingStation, DroneProfile, PlannedRoute, RoutePoint, RouteStatus};
use crate::route::{route_distance, segment_distances};
use crate::validation::{validate_route, ValidationResult};

/// Tunables for the planner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub consumption: ConsumptionTable,
    pub miss_policy: MissPolicy,
}

impl PlannerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.consumption.validate()
    }
}

/// Everything computed for one route against one drone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    pub waypoints: Vec<RoutePoint>,
    pub leg_distances_km: Vec<f64>,
    pub total_distance_km: f64,
    pub estimated_battery_usage_pct: f64,
    /// Same estimate without the 100% cap
    pub raw_battery_usage_pct: f64,
    pub validation: ValidationResult,
    pub charging: ChargingPlan,
}

impl RoutePlan {
    pub fn suggested_stops(&self) -> Vec<String> {
        self.charging.station_ids()
    }

    /// Turn the plan into a saved route record.
    pub fn into_planned_route(self, id: impl Into<String>, drone_id: impl Into<String>) -> PlannedRoute {
        let charging_stops = self.charging.station_ids();
        PlannedRoute {
            id: id.into(),
            drone_id: drone_id.into(),
            waypoints: self.waypoints,
            total_distance_km: self.total_distance_km,
            estimated_battery_usage_pct: self.estimated_battery_usage_pct,
            charging_stops,
            created_at: Utc::now(),
            status: RouteStatus::Planned,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
}

impl RoutePlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    /// Build a planner after checking its configuration.
    pub fn try_new(config: PlannerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn route_distance(&self, points: &[RoutePoint]) -> f64 {
        route_distance(points)
    }

    pub fn estimate_battery_usage(&self, distance_km: f64, model: &str) -> f64 {
        self.config.consumption.estimate_battery_usage(distance_km, model)
    }

    pub fn validate(&self, drone: &DroneProfile, points: &[RoutePoint]) -> ValidationResult {
        validate_route(
            points,
            drone.max_range_km,
            drone.battery_pct,
            &drone.model,
            &self.config.consumption,
        )
    }

    pub fn charging_stops(
        &self,
        points: &[RoutePoint],
        stations: &[ChargingStation],
        max_range_km: f64,
    ) -> ChargingPlan {
        plan_charging_stops(points, stations, max_range_km, self.config.miss_policy)
    }

    /// Validate a route and, when it is out of range, suggest charging stops.
    pub fn plan(
        &self,
        drone: &DroneProfile,
        points: &[RoutePoint],
        stations: &[ChargingStation],
    ) -> RoutePlan {
        let total_distance_km = route_distance(points);
        let table = &self.config.consumption;
        let validation = self.validate(drone, points);

        let charging = if points.len() >= 2 && validation.exceeds_range() {
            self.charging_stops(points, stations, drone.max_range_km)
        } else {
            ChargingPlan::default()
        };

        tracing::debug!(
            drone_id = %drone.id,
            total_distance_km,
            valid = validation.is_valid,
            stops = charging.stops.len(),
            "route planned"
        );

        RoutePlan {
            waypoints: points.to_vec(),
            leg_distances_km: segment_distances(points),
            total_distance_km,
            estimated_battery_usage_pct: table.estimate_battery_usage(total_distance_km, &drone.model),
            raw_battery_usage_pct: table
                .estimate_battery_usage_uncapped(total_distance_km, &drone.model),
            validation,
            charging,
        }
    }
}
