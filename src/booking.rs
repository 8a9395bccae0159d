use crate::aircraft::{Aircraft, AircraftId, AircraftName, Roster};
use crate::airport::{AirportId, RotationSchedule};
use crate::error::Result;
use crate::time::DayOfWeek;
use chrono::{NaiveDateTime, TimeDelta};
use std::collections::HashMap;

const MAINTENANCE_MARKER: &str = "maint";

/// One reservation as returned by the club calendar.
#[derive(Clone, Debug, PartialEq)]
pub struct RawBookingEvent {
    pub aircraft_id: AircraftId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Calendar icon / category, e.g. `"maintenance"` or `"booking"`
    pub icon: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedEvent {
    pub aircraft_id: AircraftId,
    pub aircraft_name: AircraftName,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub duration: TimeDelta,
    pub weekend: bool,
    pub airport: Option<AirportId>,
    pub is_maintenance: bool,
}

impl EnrichedEvent {
    pub fn classify(
        name: &AircraftName,
        aircraft: &Aircraft,
        raw: &RawBookingEvent,
        rotation: &RotationSchedule,
    ) -> Result<EnrichedEvent> {
        Ok(EnrichedEvent {
            aircraft_id: aircraft.id.clone(),
            aircraft_name: name.clone(),
            start: raw.start,
            end: raw.end,
            duration: raw.end - raw.start,
            weekend: is_weekend(raw.start, raw.end),
            airport: rotation.get_airport_on_date(aircraft, raw.start.date())?,
            is_maintenance: is_maintenance(&raw.icon),
        })
    }
}

pub fn is_maintenance(icon: &str) -> bool {
    icon.contains(MAINTENANCE_MARKER)
}

/// Whether a reservation touches a weekend.
///
/// Endpoints on Saturday or Sunday count immediately. Otherwise spans shorter
/// than a day are weekday-only and spans longer than six days always include a
/// weekend; anything in between is walked a day at a time from `start`.
pub fn is_weekend(start: NaiveDateTime, end: NaiveDateTime) -> bool {
    if DayOfWeek::of(start).is_weekend() || DayOfWeek::of(end).is_weekend() {
        return true;
    }
    let span = end - start;
    if span < TimeDelta::days(1) {
        return false;
    }
    if span > TimeDelta::days(6) {
        return true;
    }

    let mut x = start;
    while x < end {
        if DayOfWeek::of(x).is_weekend() {
            return true;
        }
        x += TimeDelta::days(1);
    }
    false
}

/// Classifies every fetched reservation and returns them ordered by start time.
///
/// Events sharing a start time are ordered by aircraft name and then by the
/// order they were fetched in, so the result does not depend on which aircraft
/// was fetched first.
pub fn enrich_events(
    roster: &Roster,
    rotation: &RotationSchedule,
    raw_events: &[RawBookingEvent],
) -> Result<Vec<EnrichedEvent>> {
    let by_id: HashMap<&AircraftId, (&AircraftName, &Aircraft)> =
        roster.iter().map(|(name, ac)| (&ac.id, (name, ac))).collect();

    let mut events = Vec::with_capacity(raw_events.len());
    for raw in raw_events {
        match by_id.get(&raw.aircraft_id) {
            Some((name, aircraft)) => events.push(EnrichedEvent::classify(name, aircraft, raw, rotation)?),
            None => log::warn!("Skipping booking for unknown aircraft id {}", raw.aircraft_id),
        }
    }

    events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.aircraft_name.cmp(&b.aircraft_name)));
    log::debug!("Enriched {} of {} bookings", events.len(), raw_events.len());

    Ok(events)
}
