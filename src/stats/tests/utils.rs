use crate::aircraft::{Aircraft, Roster};
use crate::booking::{EnrichedEvent, is_weekend};
use crate::time::parse_timestamp;
use chrono::NaiveDateTime;
use proptest::prelude::Strategy;
use proptest::prop_oneof;
use proptest::strategy::Just;
use std::sync::Arc;

pub fn id(s: &str) -> Arc<str> {
    Arc::from(s)
}

pub fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

pub fn add_aircraft(roster: &mut Roster, name: &str, aircraft_id: &str, airport_at_reference: &str) {
    roster.insert(
        name,
        Aircraft {
            id: id(aircraft_id),
            airport_at_reference: Some(id(airport_at_reference)),
        },
    );
}

pub fn event(
    aircraft_name: &str,
    start: NaiveDateTime,
    end: NaiveDateTime,
    airport: Option<&str>,
    is_maintenance: bool,
) -> EnrichedEvent {
    EnrichedEvent {
        aircraft_id: id(&format!("{}-id", aircraft_name)),
        aircraft_name: id(aircraft_name),
        start,
        end,
        duration: end - start,
        weekend: is_weekend(start, end),
        airport: airport.map(id),
        is_maintenance,
    }
}

pub fn add_event(
    events: &mut Vec<EnrichedEvent>,
    aircraft_name: &str,
    start: &str,
    end: &str,
    airport: Option<&str>,
    is_maintenance: bool,
) {
    events.push(event(aircraft_name, ts(start), ts(end), airport, is_maintenance));
}

pub fn arb_name() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("N111AA"), Just("N222BB"), Just("N333CC")]
}

pub fn arb_event() -> impl Strategy<Value = EnrichedEvent> {
    (
        arb_name(),
        prop_oneof![Just(Some("CHD")), Just(Some("DVT")), Just(None)],
        0..(60 * 24 * 21i64),
        0..(60 * 24 * 4i64),
        proptest::bool::weighted(0.2),
    )
        .prop_map(|(name, airport, start, length, is_maintenance)| {
            let start = ts("2024-03-01 00:00:00") + chrono::TimeDelta::minutes(start);
            let end = start + chrono::TimeDelta::minutes(length);
            event(name, start, end, airport, is_maintenance)
        })
}

pub fn arb_sorted_events() -> impl Strategy<Value = Vec<EnrichedEvent>> {
    proptest::collection::vec(arb_event(), 0..40).prop_map(|mut events| {
        events.sort_by_key(|e| e.start);
        events
    })
}
