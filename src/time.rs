use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Format used by the club calendar for booking timestamps and by the metadata report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_HOUR: i64 = 60 * 60;
const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;

/// Weekday used as a report key. Ordered Monday first so maps keyed by it
/// come out in calendar order, and serialized as the full English day name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub fn of(date: impl Datelike) -> DayOfWeek {
        DayOfWeek::from(date.weekday())
    }

    pub fn is_weekend(self) -> bool {
        matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Calendar-month difference between two dates, ignoring the day of month.
/// Negative when `date` falls before `reference`.
pub fn months_between(date: NaiveDate, reference: NaiveDate) -> i64 {
    let years = date.year() as i64 - reference.year() as i64;
    let months = date.month() as i64 - reference.month() as i64;
    years * 12 + months
}

/// Every calendar date that overlaps the half-open span `[start, end)`.
pub fn days_touched(start: NaiveDateTime, end: NaiveDateTime) -> impl Iterator<Item = NaiveDate> {
    let first = start.date();
    let last = if end <= start {
        None
    } else if end.time() == NaiveTime::MIN {
        end.date().pred_opt()
    } else {
        Some(end.date())
    };

    first
        .iter_days()
        .take_while(move |day| last.is_some_and(|last| *day <= last))
}

/// Calendar dates strictly between `from` and `to`.
pub fn days_strictly_between(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.checked_add_days(Days::new(1))
        .into_iter()
        .flat_map(|next| next.iter_days())
        .take_while(move |day| *day < to)
}

/// Duration rounded up to whole hours.
pub fn ceil_hours(duration: TimeDelta) -> i64 {
    (duration.num_seconds() + SECONDS_PER_HOUR - 1).div_euclid(SECONDS_PER_HOUR)
}

pub fn fractional_days(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 / SECONDS_PER_DAY
}

pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
}
