use crate::aircraft::{AircraftName, Roster};
use crate::airport::AirportId;
use crate::booking::EnrichedEvent;
use crate::error::{Result, StatsError};
use crate::time::{DayOfWeek, days_strictly_between};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AirportAvailability {
    pub aircraft_per_airport: usize,
    /// Unreserved aircraft for every walked day, grouped by weekday in date order
    pub by_weekday: BTreeMap<DayOfWeek, Vec<usize>>,
    pub mean_by_weekday: BTreeMap<DayOfWeek, f64>,
}

/// How many aircraft based at each airport had no reservation starting on a
/// given day, grouped by weekday.
///
/// The roster is assumed to be split evenly across `airports`. Events must be
/// sorted by start. Days between two reserved days are counted as fully
/// available; days before the first reservation are not walked. Events whose
/// airport is unresolved or not in `airports` do not reduce availability.
pub fn aircraft_available_by_airport_and_weekday(
    events: &[EnrichedEvent],
    roster: &Roster,
    airports: &[AirportId],
) -> Result<BTreeMap<AirportId, AirportAvailability>> {
    if airports.is_empty() {
        log::debug!("No airports to split the fleet across, skipping availability");
        return Ok(BTreeMap::new());
    }
    if roster.len() % airports.len() != 0 {
        return Err(StatsError::config(format!(
            "{} aircraft cannot be split evenly across {} airports",
            roster.len(),
            airports.len()
        )));
    }
    let per_airport = roster.len() / airports.len();

    let mut available_by_date: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    let mut seen: BTreeMap<&AirportId, BTreeSet<&AircraftName>> = BTreeMap::new();
    let mut current_date: Option<NaiveDate> = None;

    let remaining = |seen: &BTreeMap<&AirportId, BTreeSet<&AircraftName>>| -> Vec<usize> {
        airports
            .iter()
            .map(|ap| per_airport.saturating_sub(seen.get(ap).map_or(0, |s| s.len())))
            .collect()
    };

    for event in events {
        let date = event.start.date();
        if current_date != Some(date) {
            if let Some(previous) = current_date {
                available_by_date.insert(previous, remaining(&seen));
                for idle in days_strictly_between(previous, date) {
                    available_by_date.insert(idle, vec![per_airport; airports.len()]);
                }
            }
            current_date = Some(date);
            seen.clear();
        }

        if let Some(airport) = event.airport.as_ref().filter(|ap| airports.contains(ap)) {
            seen.entry(airport).or_default().insert(&event.aircraft_name);
        }
    }
    if let Some(last) = current_date {
        available_by_date.insert(last, remaining(&seen));
    }

    let mut result: BTreeMap<AirportId, AirportAvailability> = airports
        .iter()
        .map(|ap| {
            (ap.clone(), AirportAvailability { aircraft_per_airport: per_airport, ..Default::default() })
        })
        .collect();

    for (date, counts) in &available_by_date {
        for (airport, count) in airports.iter().zip(counts) {
            if let Some(entry) = result.get_mut(airport) {
                entry.by_weekday.entry(DayOfWeek::of(*date)).or_default().push(*count);
            }
        }
    }

    for entry in result.values_mut() {
        entry.mean_by_weekday = entry
            .by_weekday
            .iter()
            .map(|(day, counts)| (*day, mean(counts)))
            .collect();
    }

    log::debug!("Walked {} days of fleet availability", available_by_date.len());
    Ok(result)
}

fn mean(values: &[usize]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<usize>() as f64 / values.len() as f64
}
