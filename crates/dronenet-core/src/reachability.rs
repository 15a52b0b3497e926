//! Direct-flight feasibility between a drone and a charging station.

use serde::{Deserialize, Serialize};

use crate::models::{ChargingStation, DroneProfile};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reachability {
    pub distance_km: f64,
    /// Recharge requests must be blocked when set
    pub exceeds_range: bool,
}

/// Check whether a drone can fly straight to a station on its rated range.
pub fn check_reachability(drone: &DroneProfile, station: &ChargingStation) -> Reachability {
    let distance_km = drone.position.distance_to(&station.position);
    Reachability {
        distance_km,
        exceeds_range: distance_km > drone.max_range_km,
    }
}
