//! Client for the club-management web application.
//!
//! Logs in once with a cookie-keeping session, then pulls the booking calendar
//! of every aircraft in the roster for the requested window.

use crate::aircraft::{Aircraft, Roster};
use crate::booking::RawBookingEvent;
use crate::error::{Result, StatsError};
use crate::time::parse_timestamp;
use chrono::{DateTime, TimeZone};
use reqwest::blocking::Client;
use serde::Deserialize;

const LOGIN_PATH: &str = "/functions/authentication/login.php";
const CALENDAR_PATH: &str = "/functions/booking/getBookingsForCalendar.php";
const REJECTED_LOGINS: [&str; 3] = ["incorrect", "locked", "expired"];

#[derive(Debug, Deserialize)]
struct LoginResponse {
    success: serde_json::Value,
}

/// One entry of the calendar feed. Only the fields the statistics need.
#[derive(Debug, Deserialize)]
struct CalendarEntry {
    start: String,
    end: String,
    #[serde(default)]
    icon: String,
}

impl CalendarEntry {
    fn into_raw_event(self, aircraft: &Aircraft) -> Result<RawBookingEvent> {
        let parse = |value: &str| {
            parse_timestamp(value).map_err(|source| StatsError::Timestamp {
                value: value.to_string(),
                source,
            })
        };
        Ok(RawBookingEvent {
            aircraft_id: aircraft.id.clone(),
            start: parse(&self.start)?,
            end: parse(&self.end)?,
            icon: self.icon,
        })
    }
}

pub struct ClubClient {
    client: Client,
    url: String,
}

impl ClubClient {
    pub fn login(url: &str, username: &str, password: &str) -> Result<ClubClient> {
        let url = url.trim_end_matches('/').to_string();
        let client = Client::builder().cookie_store(true).build()?;

        let response: LoginResponse = client
            .post(format!("{}{}", url, LOGIN_PATH))
            .form(&[("username", username), ("password", password)])
            .send()?
            .error_for_status()?
            .json()?;
        check_login(&response.success)?;

        log::info!("Logged in to {} as {}", url, username);
        Ok(ClubClient { client, url })
    }

    /// Reservations of every rostered aircraft between `period_start` and `period_end`,
    /// in roster order.
    pub fn fetch_raw_events<Tz: TimeZone>(
        &self,
        roster: &Roster,
        period_start: &DateTime<Tz>,
        period_end: &DateTime<Tz>,
    ) -> Result<Vec<RawBookingEvent>> {
        let mut events = Vec::new();
        for (name, aircraft) in roster.iter() {
            let entries: Vec<CalendarEntry> = self
                .client
                .get(format!("{}{}", self.url, CALENDAR_PATH))
                .query(&[
                    ("start", period_start.timestamp().to_string()),
                    ("end", period_end.timestamp().to_string()),
                    ("a", aircraft.id.to_string()),
                ])
                .send()?
                .error_for_status()?
                .json()?;

            log::debug!("Fetched {} bookings for {}", entries.len(), name);
            for entry in entries {
                events.push(entry.into_raw_event(aircraft)?);
            }
        }
        log::info!("Fetched {} bookings for {} aircraft", events.len(), roster.len());
        Ok(events)
    }
}

fn check_login(success: &serde_json::Value) -> Result<()> {
    match success.as_str() {
        Some(status) if REJECTED_LOGINS.contains(&status) => Err(StatsError::Login(status.to_string())),
        _ => Ok(()),
    }
}
