use crate::aircraft::Aircraft;
use crate::error::{Result, StatsError};
use crate::time::months_between;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type AirportId = Arc<str>;

const REFERENCE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rotation period as written in the config file. Fields stay loose here so
/// that [`RotationSchedule::configure`] can report what is wrong with them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationPeriod {
    pub months: Option<i64>,
    pub reference_date: Option<String>,
}

/// Cyclic monthly rotation of the fleet through a list of home airports.
///
/// Every `months` months each aircraft moves to the next airport in the list,
/// starting from the airport it was based at on the reference date.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RotationSchedule {
    airports: Vec<AirportId>,
    months: i64,
    reference: Option<NaiveDate>,
}

impl RotationSchedule {
    pub fn configure(airports: Vec<AirportId>, period: &RotationPeriod) -> Result<RotationSchedule> {
        if airports.is_empty() {
            return Err(StatsError::config("rotation has no airports"));
        }

        let months = match period.months {
            Some(months) if months > 0 => months,
            Some(months) => {
                return Err(StatsError::config(format!(
                    "rotation period must be a positive number of months, got {}",
                    months
                )));
            }
            None => return Err(StatsError::config(format!("unknown rotation period: {:?}", period))),
        };

        let raw_reference = period
            .reference_date
            .as_deref()
            .ok_or_else(|| StatsError::config("rotation period has no reference_date"))?;
        let reference = NaiveDate::parse_from_str(raw_reference, REFERENCE_DATE_FORMAT).map_err(|e| {
            StatsError::config(format!("malformed reference_date '{}': {}", raw_reference, e))
        })?;

        Ok(RotationSchedule {
            airports,
            months,
            reference: Some(reference),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.airports.is_empty()
    }

    /// Airport the aircraft is based at on `date`, or `None` without a rotation.
    pub fn get_airport_on_date(&self, aircraft: &Aircraft, date: NaiveDate) -> Result<Option<AirportId>> {
        let Some(reference) = self.reference.filter(|_| self.is_configured()) else {
            return Ok(None);
        };

        let home = aircraft.airport_at_reference.as_ref().ok_or_else(|| {
            StatsError::config(format!("aircraft {} has no airport_at_reference", aircraft.id))
        })?;
        let start_index = self
            .airports
            .iter()
            .position(|ap| ap == home)
            .ok_or_else(|| {
                StatsError::config(format!(
                    "airport {} of aircraft {} is not part of the rotation",
                    home, aircraft.id
                ))
            })?;

        let cycle_offset = months_between(date, reference).div_euclid(self.months);
        let index = (start_index as i64 + cycle_offset).rem_euclid(self.airports.len() as i64);

        Ok(Some(self.airports[index as usize].clone()))
    }
}
