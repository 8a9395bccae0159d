use crate::aircraft::Roster;
use crate::airport::{AirportId, RotationPeriod, RotationSchedule};
use crate::error::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub club: ClubConfig,
    pub aircraft: Roster,
    #[serde(default)]
    pub rotation: Option<RotationConfig>,
    #[serde(default)]
    pub availability: Option<AvailabilityConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ClubConfig {
    pub url: String,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RotationConfig {
    pub airports: Vec<AirportId>,
    #[serde(default)]
    pub period: RotationPeriod,
}

/// Airports the fleet is split across for the availability report.
#[derive(Debug, Deserialize)]
pub struct AvailabilityConfig {
    pub airports: Vec<AirportId>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let data = std::fs::read_to_string(path)?;
        let config = Config::from_toml(&data)?;
        log::info!("Loaded {} aircraft from {}", config.aircraft.len(), path.display());
        Ok(config)
    }

    pub fn from_toml(data: &str) -> Result<Config> {
        Ok(toml::from_str(data)?)
    }

    /// Rotation schedule, or an unconfigured one when the `rotation` table is absent.
    pub fn rotation_schedule(&self) -> Result<RotationSchedule> {
        match &self.rotation {
            Some(rotation) => RotationSchedule::configure(rotation.airports.clone(), &rotation.period),
            None => Ok(RotationSchedule::default()),
        }
    }

    /// Explicit availability airports, falling back to the rotation airports.
    pub fn availability_airports(&self) -> Vec<AirportId> {
        self.availability
            .as_ref()
            .map(|a| a.airports.clone())
            .or_else(|| self.rotation.as_ref().map(|r| r.airports.clone()))
            .unwrap_or_default()
    }
}
