use crate::aircraft::AircraftName;
use crate::booking::EnrichedEvent;
use crate::error::{Result, StatsError};
use crate::stats::Counter;
use crate::time::{DayOfWeek, TIMESTAMP_FORMAT, ceil_hours, days_touched, fractional_days};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Key of the per-class totals in [`UtilizationSplit`].
pub const TOTAL: &str = "total";
/// Bucket for events whose home airport could not be resolved.
pub const UNRESOLVED_AIRPORT: &str = "unresolved";

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DatasetMetadata {
    pub start_date: String,
    pub end_date: String,
    pub length_days: i64,
    pub num_events: usize,
}

/// Reservation counts split by weekend flag. Each side holds a `"total"`
/// entry plus one entry per aircraft name.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct UtilizationSplit {
    pub weekend: Counter<Arc<str>>,
    pub weekday: Counter<Arc<str>>,
}

/// Covered window and number of events. Fails on an empty event list.
pub fn gather_metadata(events: &[EnrichedEvent]) -> Result<DatasetMetadata> {
    let (Some(first), Some(last)) = (events.first(), events.last()) else {
        return Err(StatsError::EmptyDataset);
    };

    Ok(DatasetMetadata {
        start_date: first.start.format(TIMESTAMP_FORMAT).to_string(),
        end_date: last.end.format(TIMESTAMP_FORMAT).to_string(),
        length_days: (last.end - first.start).num_days(),
        num_events: events.len(),
    })
}

pub fn weekend_weekday_utilization(events: &[EnrichedEvent]) -> UtilizationSplit {
    let total: Arc<str> = Arc::from(TOTAL);
    let mut split = UtilizationSplit::default();
    for event in events {
        let side = if event.weekend { &mut split.weekend } else { &mut split.weekday };
        side.increment(total.clone());
        side.increment(event.aircraft_name.clone());
    }
    split
}

pub fn airport_utilization(events: &[EnrichedEvent]) -> Counter<Arc<str>> {
    let unresolved: Arc<str> = Arc::from(UNRESOLVED_AIRPORT);
    let mut counts = Counter::new();
    for event in events {
        counts.increment(event.airport.clone().unwrap_or_else(|| unresolved.clone()));
    }
    counts
}

/// Reservation length in whole hours, rounded up, excluding maintenance.
pub fn length_histogram(events: &[EnrichedEvent]) -> Counter<i64> {
    let mut histogram = Counter::new();
    events
        .iter()
        .filter(|e| !e.is_maintenance)
        .for_each(|e| histogram.increment(ceil_hours(e.duration)));
    histogram
}

/// Idle time in days between consecutive reservations of each aircraft.
///
/// A reservation starting on the day the previous one ended is not a gap and
/// does not replace the previous reservation. Gaps next to maintenance are
/// dropped. Every gap is kept so callers can compute their own statistics.
pub fn days_between_usage(events: &[EnrichedEvent]) -> BTreeMap<AircraftName, Vec<f64>> {
    let mut gaps: BTreeMap<AircraftName, Vec<f64>> = BTreeMap::new();
    let mut previous: HashMap<&AircraftName, &EnrichedEvent> = HashMap::new();

    for event in events {
        if let Some(prev) = previous.get(&event.aircraft_name) {
            if event.start.date() == prev.end.date() {
                continue;
            }
            if !event.is_maintenance && !prev.is_maintenance {
                gaps.entry(event.aircraft_name.clone())
                    .or_default()
                    .push(fractional_days(event.start - prev.end).abs());
            }
        }
        previous.insert(&event.aircraft_name, event);
    }

    gaps
}

/// Days of use per aircraft and weekday. A reservation counts once for every
/// calendar day it overlaps. Maintenance is excluded.
pub fn usage_by_weekday(events: &[EnrichedEvent]) -> BTreeMap<AircraftName, Counter<DayOfWeek>> {
    let mut usage: BTreeMap<AircraftName, Counter<DayOfWeek>> = BTreeMap::new();
    for event in events.iter().filter(|e| !e.is_maintenance) {
        for day in days_touched(event.start, event.end) {
            usage
                .entry(event.aircraft_name.clone())
                .or_default()
                .increment(DayOfWeek::of(day));
        }
    }
    usage
}
