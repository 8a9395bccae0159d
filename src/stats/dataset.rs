use crate::aircraft::{AircraftName, Roster};
use crate::airport::AirportId;
use crate::booking::EnrichedEvent;
use crate::error::Result;
use crate::stats::Counter;
use crate::stats::aggregate::{
    DatasetMetadata, UtilizationSplit, airport_utilization, days_between_usage, gather_metadata,
    length_histogram, usage_by_weekday, weekend_weekday_utilization,
};
use crate::stats::availability::{AirportAvailability, aircraft_available_by_airport_and_weekday};
use crate::time::DayOfWeek;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Every report computed from one run, keyed in JSON by report name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Dataset {
    pub dataset_metadata: DatasetMetadata,
    pub weekend_weekday_utilization: UtilizationSplit,
    pub airport_utilization: Counter<Arc<str>>,
    pub length_of_reservation_by_hours: Counter<i64>,
    pub days_between_usage_by_aircraft: BTreeMap<AircraftName, Vec<f64>>,
    pub usage_by_weekday: BTreeMap<AircraftName, Counter<DayOfWeek>>,
    pub aircraft_available_by_airport_and_weekday: BTreeMap<AirportId, AirportAvailability>,
}

impl Dataset {
    pub fn assemble(events: &[EnrichedEvent], roster: &Roster, airports: &[AirportId]) -> Result<Dataset> {
        let dataset = Dataset {
            dataset_metadata: gather_metadata(events)?,
            weekend_weekday_utilization: weekend_weekday_utilization(events),
            airport_utilization: airport_utilization(events),
            length_of_reservation_by_hours: length_histogram(events),
            days_between_usage_by_aircraft: days_between_usage(events),
            usage_by_weekday: usage_by_weekday(events),
            aircraft_available_by_airport_and_weekday: aircraft_available_by_airport_and_weekday(
                events, roster, airports,
            )?,
        };
        log::info!(
            "Assembled dataset of {} events over {} days",
            dataset.dataset_metadata.num_events,
            dataset.dataset_metadata.length_days
        );
        Ok(dataset)
    }

    pub fn write_json(&self, path: &Path) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        log::info!("Wrote dataset to {}", path.display());
        Ok(())
    }
}
