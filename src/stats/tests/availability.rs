use crate::aircraft::Roster;
use crate::error::StatsError;
use crate::stats::availability::aircraft_available_by_airport_and_weekday;
use crate::stats::tests::utils::{add_aircraft, add_event, id};
use crate::time::DayOfWeek::{Friday, Monday, Thursday, Tuesday, Wednesday};
use std::collections::BTreeMap;

fn four_aircraft() -> Roster {
    let mut roster = Roster::new();
    add_aircraft(&mut roster, "N101CH", "101", "CHD");
    add_aircraft(&mut roster, "N102CH", "102", "CHD");
    add_aircraft(&mut roster, "N201DV", "201", "DVT");
    add_aircraft(&mut roster, "N202DV", "202", "DVT");
    roster
}

#[test]
fn test_five_day_window_with_idle_aircraft() {
    let mut events = Vec::new();
    add_event(&mut events, "N101CH", "2024-03-04 08:00:00", "2024-03-04 10:00:00", Some("CHD"), false);
    add_event(&mut events, "N201DV", "2024-03-04 09:00:00", "2024-03-04 12:00:00", Some("DVT"), false);
    add_event(&mut events, "N101CH", "2024-03-05 08:00:00", "2024-03-05 10:00:00", Some("CHD"), false);
    add_event(&mut events, "N102CH", "2024-03-05 11:00:00", "2024-03-05 13:00:00", Some("CHD"), false);
    add_event(&mut events, "N101CH", "2024-03-07 07:00:00", "2024-03-07 08:00:00", Some("CHD"), false);
    add_event(&mut events, "N201DV", "2024-03-07 08:00:00", "2024-03-07 10:00:00", Some("DVT"), false);
    add_event(&mut events, "N101CH", "2024-03-07 15:00:00", "2024-03-07 16:00:00", Some("CHD"), false);
    add_event(&mut events, "N102CH", "2024-03-08 08:00:00", "2024-03-08 10:00:00", Some("CHD"), false);

    let airports = vec![id("CHD"), id("DVT")];
    let result = aircraft_available_by_airport_and_weekday(&events, &four_aircraft(), &airports).unwrap();

    let chd = result.get("CHD").unwrap();
    assert_eq!(2, chd.aircraft_per_airport);
    assert_eq!(
        BTreeMap::from([
            (Monday, vec![1]),
            (Tuesday, vec![0]),
            (Wednesday, vec![2]),
            (Thursday, vec![1]),
            (Friday, vec![1]),
        ]),
        chd.by_weekday
    );

    let dvt = result.get("DVT").unwrap();
    assert_eq!(2, dvt.aircraft_per_airport);
    assert_eq!(
        BTreeMap::from([
            (Monday, vec![1]),
            (Tuesday, vec![2]),
            (Wednesday, vec![2]),
            (Thursday, vec![1]),
            (Friday, vec![2]),
        ]),
        dvt.by_weekday
    );
    assert_eq!(Some(&2.0), dvt.mean_by_weekday.get(&Friday));
}

#[test]
fn test_mean_over_several_weeks() {
    let mut events = Vec::new();
    add_event(&mut events, "N101CH", "2024-03-04 08:00:00", "2024-03-04 10:00:00", Some("CHD"), false);
    add_event(&mut events, "N102CH", "2024-03-04 08:00:00", "2024-03-04 10:00:00", Some("CHD"), false);
    add_event(&mut events, "N101CH", "2024-03-11 08:00:00", "2024-03-11 10:00:00", Some("CHD"), false);

    let airports = vec![id("CHD"), id("DVT")];
    let result = aircraft_available_by_airport_and_weekday(&events, &four_aircraft(), &airports).unwrap();

    let chd = result.get("CHD").unwrap();
    assert_eq!(Some(&vec![0, 1]), chd.by_weekday.get(&Monday));
    assert_eq!(Some(&0.5), chd.mean_by_weekday.get(&Monday));
    assert_eq!(Some(&vec![2]), chd.by_weekday.get(&Tuesday));
    assert_eq!(Some(&2.0), result.get("DVT").unwrap().mean_by_weekday.get(&Monday));
}

#[test]
fn test_days_before_first_event_are_not_walked() {
    let mut events = Vec::new();
    add_event(&mut events, "N101CH", "2024-03-06 08:00:00", "2024-03-06 10:00:00", Some("CHD"), false);

    let airports = vec![id("CHD"), id("DVT")];
    let result = aircraft_available_by_airport_and_weekday(&events, &four_aircraft(), &airports).unwrap();

    let chd = result.get("CHD").unwrap();
    assert_eq!(vec![Wednesday], chd.by_weekday.keys().copied().collect::<Vec<_>>());
    assert_eq!(Some(&vec![1]), chd.by_weekday.get(&Wednesday));
}

#[test]
fn test_unresolved_airport_does_not_reduce_availability() {
    let mut events = Vec::new();
    add_event(&mut events, "N101CH", "2024-03-04 08:00:00", "2024-03-04 10:00:00", None, false);
    add_event(&mut events, "N201DV", "2024-03-04 08:00:00", "2024-03-04 10:00:00", Some("FFZ"), false);

    let airports = vec![id("CHD"), id("DVT")];
    let result = aircraft_available_by_airport_and_weekday(&events, &four_aircraft(), &airports).unwrap();

    assert_eq!(Some(&vec![2]), result.get("CHD").unwrap().by_weekday.get(&Monday));
    assert_eq!(Some(&vec![2]), result.get("DVT").unwrap().by_weekday.get(&Monday));
}

#[test]
fn test_uneven_roster_is_rejected() {
    let mut roster = four_aircraft();
    add_aircraft(&mut roster, "N301FF", "301", "CHD");

    let airports = vec![id("CHD"), id("DVT")];
    let result = aircraft_available_by_airport_and_weekday(&[], &roster, &airports);

    assert!(matches!(result, Err(StatsError::Configuration(_))));
}

#[test]
fn test_no_events_yields_empty_lists() {
    let airports = vec![id("CHD"), id("DVT")];
    let result = aircraft_available_by_airport_and_weekday(&[], &four_aircraft(), &airports).unwrap();

    assert_eq!(2, result.len());
    assert!(result.values().all(|a| a.by_weekday.is_empty() && a.mean_by_weekday.is_empty()));
}

#[test]
fn test_no_airports_yields_empty_report() {
    let mut events = Vec::new();
    add_event(&mut events, "N101CH", "2024-03-04 08:00:00", "2024-03-04 10:00:00", None, false);

    let result = aircraft_available_by_airport_and_weekday(&events, &four_aircraft(), &[]).unwrap();

    assert!(result.is_empty());
}
