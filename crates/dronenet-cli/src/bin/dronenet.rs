//! DroneNet route planning CLI.
//!
//! Usage:
//!   dronenet distance --from 37.7749,-122.4194 --to 37.8044,-122.2712
//!   dronenet plan --route route.json --drone drone.json --stations stations.json

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dronenet_cli::input::{
    parse_coordinate, read_drone, read_route, read_station, read_stations,
};
use dronenet_cli::{load_planner_config, report};
use dronenet_core::{check_reachability, distance, generate_mock_fleet, RoutePlanner};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "dronenet", author, version, about = "DroneNet route and range planning")]
struct Cli {
    /// Planner config file (TOML); falls back to $DRONENET_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Great-circle distance between two coordinates
    Distance {
        /// Start as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        from: String,
        /// End as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        to: String,
    },
    /// Check a route against a drone's range and battery
    Validate {
        #[arg(long)]
        route: PathBuf,
        #[arg(long)]
        drone: PathBuf,
    },
    /// Suggest charging stops for a route
    Stations {
        #[arg(long)]
        route: PathBuf,
        #[arg(long)]
        stations: PathBuf,
        /// Drone maximum range in kilometers
        #[arg(long)]
        max_range: f64,
    },
    /// Validate a route and suggest stops when it is out of range
    Plan {
        #[arg(long)]
        route: PathBuf,
        #[arg(long)]
        drone: PathBuf,
        #[arg(long)]
        stations: PathBuf,
    },
    /// Check whether a drone can reach a station directly
    Reach {
        #[arg(long)]
        drone: PathBuf,
        #[arg(long)]
        station: PathBuf,
    },
    /// Print a generated demo fleet
    Demo {
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("dronenet=info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = load_planner_config(cli.config.as_deref())?;
    let planner = RoutePlanner::try_new(config)?;

    match cli.cmd {
        Command::Distance { from, to } => {
            let km = distance(parse_coordinate(&from)?, parse_coordinate(&to)?);
            if cli.json {
                print_json(&serde_json::json!({ "distance_km": km }))?;
            } else {
                println!("{km:.1} km");
            }
        }
        Command::Validate { route, drone } => {
            let points = read_route(&route)?;
            let drone = read_drone(&drone)?;
            let result = planner.validate(&drone, &points);
            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", report::format_validation(&result));
            }
        }
        Command::Stations {
            route,
            stations,
            max_range,
        } => {
            let points = read_route(&route)?;
            let stations = read_stations(&stations)?;
            let plan = planner.charging_stops(&points, &stations, max_range);
            if cli.json {
                print_json(&plan)?;
            } else if plan.stops.is_empty() {
                println!("No charging stops suggested");
            } else {
                for id in plan.station_ids() {
                    println!("{id}");
                }
            }
        }
        Command::Plan {
            route,
            drone,
            stations,
        } => {
            let points = read_route(&route)?;
            let drone = read_drone(&drone)?;
            let stations = read_stations(&stations)?;
            let plan = planner.plan(&drone, &points, &stations);
            if cli.json {
                print_json(&plan)?;
            } else {
                println!("{}", report::format_plan(&plan));
            }
        }
        Command::Reach { drone, station } => {
            let drone = read_drone(&drone)?;
            let station = read_station(&station)?;
            let reach = check_reachability(&drone, &station);
            if cli.json {
                print_json(&reach)?;
            } else {
                println!("{}", report::format_reachability(&reach));
            }
        }
        Command::Demo { seed } => {
            let fleet = match seed {
                Some(seed) => generate_mock_fleet(&mut StdRng::seed_from_u64(seed)),
                None => generate_mock_fleet(&mut rand::rng()),
            };
            tracing::info!(
                drones = fleet.drones.len(),
                stations = fleet.stations.len(),
                "generated demo fleet"
            );
            print_json(&fleet)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
