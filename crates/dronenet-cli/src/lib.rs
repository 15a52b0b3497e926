//! DroneNet CLI - command line tools for route planning.
//!
//! This crate backs the `dronenet` binary:
//! - config: planner configuration from TOML
//! - input: route, drone and station files
//! - report: human-readable output

pub mod config;
pub mod input;
pub mod report;

pub use config::load_planner_config;
