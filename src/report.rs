use crate::stats::aggregate::TOTAL;
use crate::stats::dataset::Dataset;
use crate::time::DayOfWeek;
use colored::Colorize;
use std::fmt::Write;
use tabled::builder::Builder;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

const WEEK: [DayOfWeek; 7] = [
    DayOfWeek::Monday,
    DayOfWeek::Tuesday,
    DayOfWeek::Wednesday,
    DayOfWeek::Thursday,
    DayOfWeek::Friday,
    DayOfWeek::Saturday,
    DayOfWeek::Sunday,
];

#[derive(Tabled)]
struct SplitRow {
    #[tabled(rename = "Aircraft")]
    name: String,
    #[tabled(rename = "Weekday")]
    weekday: u32,
    #[tabled(rename = "Weekend")]
    weekend: u32,
}

#[derive(Tabled)]
struct CountRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Reservations")]
    count: u32,
}

#[derive(Tabled)]
struct GapRow {
    #[tabled(rename = "Aircraft")]
    name: String,
    #[tabled(rename = "Gaps")]
    gaps: usize,
    #[tabled(rename = "Avg days between usage")]
    mean: String,
}

fn styled(mut table: Table) -> String {
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

fn section(out: &mut String, title: &str, body: String) {
    let _ = writeln!(out, "\n{}", title.bold().cyan());
    let _ = writeln!(out, "{}", body);
}

/// Renders every report of the dataset as terminal tables.
pub fn render(dataset: &Dataset) -> String {
    let mut out = String::new();

    let meta = &dataset.dataset_metadata;
    section(
        &mut out,
        "Dataset",
        format!(
            "{} events from {} to {} ({} days)",
            meta.num_events, meta.start_date, meta.end_date, meta.length_days
        ),
    );

    let split = &dataset.weekend_weekday_utilization;
    let mut names: Vec<_> = split
        .weekday
        .iter()
        .chain(split.weekend.iter())
        .map(|(name, _)| name.clone())
        .filter(|name| &**name != TOTAL)
        .collect();
    names.sort();
    names.dedup();
    names.push(TOTAL.into());
    let rows: Vec<SplitRow> = names
        .iter()
        .map(|name| SplitRow {
            name: name.to_string(),
            weekday: split.weekday.get(&**name),
            weekend: split.weekend.get(&**name),
        })
        .collect();
    section(&mut out, "Weekend vs weekday reservations", styled(Table::new(rows)));

    let rows: Vec<CountRow> = dataset
        .airport_utilization
        .iter()
        .map(|(airport, count)| CountRow { key: airport.to_string(), count: *count })
        .collect();
    section(&mut out, "Reservations by airport", styled(Table::new(rows)));

    if dataset.length_of_reservation_by_hours.is_empty() {
        section(&mut out, "Reservation length", "No reservations outside maintenance".to_string());
    } else {
        let rows: Vec<CountRow> = dataset
            .length_of_reservation_by_hours
            .iter()
            .map(|(hours, count)| CountRow { key: format!("{}h", hours), count: *count })
            .collect();
        section(&mut out, "Reservation length", styled(Table::new(rows)));
    }

    let rows: Vec<GapRow> = dataset
        .days_between_usage_by_aircraft
        .iter()
        .map(|(name, gaps)| GapRow {
            name: name.to_string(),
            gaps: gaps.len(),
            mean: format!("{:.2}", gaps.iter().sum::<f64>() / gaps.len().max(1) as f64),
        })
        .collect();
    section(&mut out, "Days between usage", styled(Table::new(rows)));

    let mut usage = Builder::default();
    usage.push_record(std::iter::once("Aircraft".to_string()).chain(WEEK.iter().map(|d| d.to_string())));
    for (name, counts) in &dataset.usage_by_weekday {
        usage.push_record(
            std::iter::once(name.to_string()).chain(WEEK.iter().map(|d| counts.get(d).to_string())),
        );
    }
    section(&mut out, "Usage by weekday", styled(usage.build()));

    let mut available = Builder::default();
    available.push_record(std::iter::once("Airport".to_string()).chain(WEEK.iter().map(|d| d.to_string())));
    for (airport, availability) in &dataset.aircraft_available_by_airport_and_weekday {
        available.push_record(std::iter::once(format!("{} (of {})", airport, availability.aircraft_per_airport)).chain(
            WEEK.iter().map(|d| {
                availability
                    .mean_by_weekday
                    .get(d)
                    .map(|mean| format!("{:.2}", mean))
                    .unwrap_or_else(|| "-".to_string())
            }),
        ));
    }
    section(&mut out, "Average aircraft available", styled(available.build()));

    out
}
