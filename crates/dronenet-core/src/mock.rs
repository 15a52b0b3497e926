//! Demo fleet and station data for simulations.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{ChargingStation, DroneProfile, DroneStatus};
use crate::spatial::Coordinate;

/// Models with known consumption rates.
pub const DRONE_MODELS: [&str; 6] = [
    "DJI Mavic Pro",
    "DJI Air 2S",
    "DJI Mini 3",
    "Autel EVO Lite+",
    "Skydio 2+",
    "Parrot Anafi",
];

const CITIES: [(&str, f64, f64); 8] = [
    ("San Francisco", 37.7749, -122.4194),
    ("New York", 40.7128, -74.0060),
    ("London", 51.5074, -0.1278),
    ("Tokyo", 35.6762, 139.6503),
    ("Sydney", -33.8688, 151.2093),
    ("Paris", 48.8566, 2.3522),
    ("Berlin", 52.5200, 13.4050),
    ("Athens", 37.9838, 23.7275),
];

const HOST_NAMES: [&str; 8] = [
    "Alex Chen",
    "Maria Rodriguez",
    "John Smith",
    "Sarah Johnson",
    "David Kim",
    "Emma Wilson",
    "Michael Brown",
    "Lisa Zhang",
];

const DRONE_COUNT: usize = 3;
const DRONE_JITTER_DEG: f64 = 0.01;
const STATION_JITTER_DEG: f64 = 0.005;
const STATION_AVAILABILITY: f64 = 0.7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MockFleet {
    pub drones: Vec<DroneProfile>,
    pub stations: Vec<ChargingStation>,
}

/// Generate a small fleet parked in the first few cities and one station per city.
pub fn generate_mock_fleet<R: Rng + ?Sized>(rng: &mut R) -> MockFleet {
    let drones = CITIES
        .iter()
        .take(DRONE_COUNT)
        .enumerate()
        .map(|(i, &(_, lat, lon))| DroneProfile {
            id: format!("drone_{}", i + 1),
            name: format!("Falcon {}", i + 1),
            model: DRONE_MODELS[i % DRONE_MODELS.len()].to_string(),
            max_range_km: f64::from(rng.random_range(15u32..50)),
            battery_pct: f64::from(rng.random_range(20u32..100)),
            status: match rng.random_range(0..3) {
                0 => DroneStatus::Active,
                1 => DroneStatus::LowBattery,
                _ => DroneStatus::Charging,
            },
            position: jitter(&mut *rng, lat, lon, DRONE_JITTER_DEG),
            owner_id: Some("user_1".to_string()),
        })
        .collect();

    let stations = CITIES
        .iter()
        .enumerate()
        .map(|(i, &(city, lat, lon))| ChargingStation {
            id: format!("stop_{}", i + 1),
            name: format!("{city} Charging Hub"),
            position: jitter(&mut *rng, lat, lon, STATION_JITTER_DEG),
            host_id: Some(format!("host_{}", i + 1)),
            host_name: Some(HOST_NAMES[i % HOST_NAMES.len()].to_string()),
            available: rng.random_bool(STATION_AVAILABILITY),
            credits: rng.random_range(5..15),
            rating: rng.random_range(4.0..5.0),
        })
        .collect();

    MockFleet { drones, stations }
}

fn jitter<R: Rng + ?Sized>(rng: &mut R, lat: f64, lon: f64, span_deg: f64) -> Coordinate {
    let half = span_deg / 2.0;
    Coordinate::new(
        lat + rng.random_range(-half..half),
        lon + rng.random_range(-half..half),
    )
}
