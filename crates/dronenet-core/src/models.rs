//! Core data models for route planning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::spatial::Coordinate;

/// Role a point plays within a route plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointKind {
    Start,
    #[default]
    Waypoint,
    ChargingStation,
    End,
}

/// A coordinate tagged with its role on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutePoint {
    #[serde(flatten)]
    pub position: Coordinate,
    #[serde(default, rename = "type")]
    pub kind: PointKind,
    /// Set when the point is a known charging station
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl RoutePoint {
    pub fn new(lat: f64, lon: f64, kind: PointKind) -> Self {
        Self {
            position: Coordinate::new(lat, lon),
            kind,
            id: None,
        }
    }

    pub fn start(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, PointKind::Start)
    }

    pub fn waypoint(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, PointKind::Waypoint)
    }

    pub fn end(lat: f64, lon: f64) -> Self {
        Self::new(lat, lon, PointKind::End)
    }

    /// A route point sitting on a known charging station.
    pub fn station(station: &ChargingStation) -> Self {
        Self {
            position: station.position,
            kind: PointKind::ChargingStation,
            id: Some(station.id.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DroneStatus {
    #[default]
    Active,
    LowBattery,
    Charging,
    Offline,
}

/// Drone characteristics consumed by the planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DroneProfile {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Lookup key into the consumption table
    pub model: String,
    /// Maximum flight range in kilometers
    #[serde(alias = "maxRange")]
    pub max_range_km: f64,
    /// Current battery level, 0-100
    #[serde(alias = "batteryLevel")]
    pub battery_pct: f64,
    #[serde(default)]
    pub status: DroneStatus,
    pub position: Coordinate,
    #[serde(default, alias = "ownerId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
}

/// A charging station that may be suggested as a stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStation {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub position: Coordinate,
    #[serde(default, alias = "hostId", skip_serializing_if = "Option::is_none")]
    pub host_id: Option<String>,
    #[serde(default, alias = "hostName", skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    pub available: bool,
    #[serde(default)]
    pub credits: u32,
    #[serde(default)]
    pub rating: f64,
}

impl ChargingStation {
    pub fn new(id: impl Into<String>, position: Coordinate, available: bool) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            position,
            host_id: None,
            host_name: None,
            available,
            credits: 0,
            rating: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    #[default]
    Planned,
    Active,
    Completed,
}

/// A route saved for a drone, with its computed figures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub id: String,
    pub drone_id: String,
    pub waypoints: Vec<RoutePoint>,
    pub total_distance_km: f64,
    pub estimated_battery_usage_pct: f64,
    /// IDs of charging stations along the route
    pub charging_stops: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub status: RouteStatus,
}
