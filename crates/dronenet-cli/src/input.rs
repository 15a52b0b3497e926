//! Reading route, drone and station records from JSON files.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use dronenet_core::{ChargingStation, Coordinate, DroneProfile, RoutePoint};
use serde::de::DeserializeOwned;

/// Parse a `LAT,LON` pair such as `37.7749,-122.4194`.
pub fn parse_coordinate(raw: &str) -> Result<Coordinate> {
    let Some((lat, lon)) = raw.split_once(',') else {
        bail!("expected LAT,LON but got '{raw}'");
    };
    let lat: f64 = lat
        .trim()
        .parse()
        .with_context(|| format!("invalid latitude in '{raw}'"))?;
    let lon: f64 = lon
        .trim()
        .parse()
        .with_context(|| format!("invalid longitude in '{raw}'"))?;
    Ok(Coordinate::new(lat, lon))
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

pub fn read_route(path: &Path) -> Result<Vec<RoutePoint>> {
    let points: Vec<RoutePoint> = read_json(path)?;
    tracing::debug!(path = %path.display(), points = points.len(), "loaded route");
    Ok(points)
}

pub fn read_drone(path: &Path) -> Result<DroneProfile> {
    read_json(path)
}

/// A station file holds either one station or a list of them.
pub fn read_stations(path: &Path) -> Result<Vec<ChargingStation>> {
    let value: serde_json::Value = read_json(path)?;
    let stations = if value.is_array() {
        serde_json::from_value::<Vec<ChargingStation>>(value)
    } else {
        serde_json::from_value::<ChargingStation>(value).map(|station| vec![station])
    }
    .with_context(|| format!("parsing stations in {}", path.display()))?;
    Ok(stations)
}

pub fn read_station(path: &Path) -> Result<ChargingStation> {
    read_json(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pairs() {
        assert_eq!(
            parse_coordinate("37.7749, -122.4194").unwrap(),
            Coordinate::new(37.7749, -122.4194)
        );
        assert_eq!(parse_coordinate("0,0").unwrap(), Coordinate::new(0.0, 0.0));
    }

    #[test]
    fn rejects_malformed_coordinates() {
        assert!(parse_coordinate("37.7749").is_err());
        assert!(parse_coordinate("north,-122").is_err());
        assert!(parse_coordinate("1,east").is_err());
    }

    #[test]
    fn reads_single_station_or_list() {
        let dir = std::env::temp_dir();
        let single = dir.join(format!("dronenet-station-{}.json", std::process::id()));
        fs::write(
            &single,
            r#"{"id": "stop_1", "position": {"lat": 1.0, "lng": 2.0}, "available": true}"#,
        )
        .unwrap();
        let stations = read_stations(&single).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "stop_1");

        let list = dir.join(format!("dronenet-stations-{}.json", std::process::id()));
        fs::write(
            &list,
            r#"[{"id": "a", "position": {"lat": 0, "lon": 0}, "available": false},
                {"id": "b", "position": {"lat": 1, "lon": 1}, "available": true}]"#,
        )
        .unwrap();
        let stations = read_stations(&list).unwrap();
        assert_eq!(stations.len(), 2);
        assert!(!stations[0].available);

        fs::remove_file(single).ok();
        fs::remove_file(list).ok();
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_route(Path::new("/nonexistent/dronenet/route.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/dronenet/route.json"));
    }
}
