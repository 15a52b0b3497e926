//! Battery usage estimates from distance and drone model.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Rate applied to models missing from the table, in percent per kilometer.
pub const DEFAULT_RATE_PCT_PER_KM: f64 = 8.0;

/// Per-model battery consumption rates in percent per kilometer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsumptionTable {
    pub rates: BTreeMap<String, f64>,
    pub default_rate: f64,
}

impl Default for ConsumptionTable {
    fn default() -> Self {
        let rates = [
            ("DJI Mavic Pro", 8.0),
            ("DJI Air 2S", 7.0),
            ("DJI Mini 3", 6.0),
            ("Autel EVO Lite+", 9.0),
            ("Skydio 2+", 10.0),
            ("Parrot Anafi", 8.0),
        ]
        .into_iter()
        .map(|(model, rate)| (model.to_string(), rate))
        .collect();

        Self {
            rates,
            default_rate: DEFAULT_RATE_PCT_PER_KM,
        }
    }
}

impl ConsumptionTable {
    /// A table with no known models; every lookup falls back to `default_rate`.
    pub fn empty(default_rate: f64) -> Self {
        Self {
            rates: BTreeMap::new(),
            default_rate,
        }
    }

    /// Add or replace the rate for a model.
    pub fn with_rate(mut self, model: impl Into<String>, rate: f64) -> Self {
        self.rates.insert(model.into(), rate);
        self
    }

    pub fn rate_for(&self, model: &str) -> f64 {
        self.rates.get(model).copied().unwrap_or(self.default_rate)
    }

    /// Projected battery use for a distance, capped at 100%.
    ///
    /// The cap hides how far past empty a route would go; use
    /// [`Self::estimate_battery_usage_uncapped`] when that matters.
    pub fn estimate_battery_usage(&self, distance_km: f64, model: &str) -> f64 {
        self.estimate_battery_usage_uncapped(distance_km, model).min(100.0)
    }

    pub fn estimate_battery_usage_uncapped(&self, distance_km: f64, model: &str) -> f64 {
        distance_km * self.rate_for(model)
    }

    /// Reject rates that would make estimates meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_rate(self.default_rate) {
            return Err(ConfigError::InvalidDefaultRate(self.default_rate));
        }
        for (model, &rate) in &self.rates {
            if !is_valid_rate(rate) {
                return Err(ConfigError::InvalidRate {
                    model: model.clone(),
                    rate,
                });
            }
        }
        Ok(())
    }
}

fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate >= 0.0
}
