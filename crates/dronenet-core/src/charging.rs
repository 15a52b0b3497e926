//! Greedy charging-stop suggestions along a route.
//!
//! Walks the legs in order, accumulating distance. Once the running total
//! reaches [`RANGE_SAFETY_FRACTION`] of the drone's range, the available
//! station nearest to the start of the current leg is suggested and the
//! running total starts over.
//!
//! This is a heuristic. It only looks at leg endpoints, never at stations
//! part-way along a leg, and it cannot keep the drone within range when no
//! station is available at all. Callers should re-validate the final route.

use serde::{Deserialize, Serialize};

use crate::models::{ChargingStation, RoutePoint};
use crate::spatial::{distance, Coordinate};

/// Share of max range flown before a stop is searched for.
pub const RANGE_SAFETY_FRACTION: f64 = 0.8;

/// What happens to the running distance when a threshold crossing finds no station.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissPolicy {
    /// Keep accumulating; every later leg searches again.
    #[default]
    KeepAccumulating,
    /// Start a fresh leg as if the drone had charged.
    ResetLeg,
}

/// A suggested stop and where it was picked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStop {
    pub station_id: String,
    /// Index of the route point the search was made from
    pub point_index: usize,
    /// Straight-line distance from that point to the station
    pub detour_km: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChargingPlan {
    pub stops: Vec<ChargingStop>,
    /// Point indices where the threshold was crossed but no station was available
    pub missed_searches: Vec<usize>,
}

impl ChargingPlan {
    pub fn station_ids(&self) -> Vec<String> {
        self.stops.iter().map(|stop| stop.station_id.clone()).collect()
    }
}

/// Suggest charging stations for a route, returning station IDs in order.
///
/// The same station may appear more than once if the route passes it on
/// several legs.
pub fn find_optimal_charging_stations(
    points: &[RoutePoint],
    stations: &[ChargingStation],
    max_range_km: f64,
) -> Vec<String> {
    plan_charging_stops(points, stations, max_range_km, MissPolicy::default()).station_ids()
}

/// Full stop selection with an explicit miss policy.
pub fn plan_charging_stops(
    points: &[RoutePoint],
    stations: &[ChargingStation],
    max_range_km: f64,
    policy: MissPolicy,
) -> ChargingPlan {
    let available: Vec<&ChargingStation> = stations.iter().filter(|s| s.available).collect();
    let threshold_km = max_range_km * RANGE_SAFETY_FRACTION;
    let mut plan = ChargingPlan::default();
    let mut accumulated_km = 0.0;

    for (i, leg) in points.windows(2).enumerate() {
        accumulated_km += distance(leg[0].position, leg[1].position);
        // NaN on either side never triggers a search.
        if accumulated_km >= threshold_km {
            match nearest_station(&available, leg[0].position) {
                Some((station, detour_km)) => {
                    tracing::debug!(
                        station_id = %station.id,
                        point_index = i,
                        accumulated_km,
                        "charging stop selected"
                    );
                    plan.stops.push(ChargingStop {
                        station_id: station.id.clone(),
                        point_index: i,
                        detour_km,
                    });
                    accumulated_km = 0.0;
                }
                None => {
                    tracing::debug!(point_index = i, accumulated_km, ?policy, "no available charging station");
                    plan.missed_searches.push(i);
                    if policy == MissPolicy::ResetLeg {
                        accumulated_km = 0.0;
                    }
                }
            }
        }
    }

    plan
}

/// Nearest station to `from`; ties keep the first one seen.
fn nearest_station<'a>(
    stations: &[&'a ChargingStation],
    from: Coordinate,
) -> Option<(&'a ChargingStation, f64)> {
    let mut best: Option<(&ChargingStation, f64)> = None;
    for &station in stations {
        let d = distance(from, station.position);
        let best_d = best.map_or(f64::INFINITY, |(_, bd)| bd);
        if d < best_d {
            best = Some((station, d));
        }
    }
    best
}
