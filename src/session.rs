// src/session.rs

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

/// Visual form shared by the CSV and JSON exports, e.g.
/// `2023-06-05 10:00:00+02:00`. The planner parses it back with the
/// same pattern.
pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S%:z";

/// One speaker/panelist as listed on the session page. Page order is kept
/// and duplicates are not collapsed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: u64,
    pub public_name: String,
}

/// One scheduled talk/panel/event instance. Built once per scrape run and
/// immutable afterwards; field order here is the export key order.
#[derive(Clone, Debug, Serialize)]
pub struct Session {
    pub url: String,
    pub id: u64,
    #[serde(serialize_with = "ser_datetime")]
    pub start_datetime: DateTime<Tz>,
    pub start_date: String,
    pub start_time: String,
    #[serde(serialize_with = "ser_datetime")]
    pub end_datetime: DateTime<Tz>,
    pub end_date: String,
    pub end_time: String,
    /// `H:MM`, floor-minute difference of the two instants.
    pub duration: String,
    pub room: String,
    pub slug: String,
    pub title: String,
    pub persons: Vec<Person>,
    pub track: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Two-letter code, lowercased.
    pub language: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub description: String,
    pub translation: bool,
    pub translation_derived: bool,
    pub is_partner_session: bool,
    pub is_cancelled: bool,
}

impl Session {
    /// Speaker names collapsed into the single CSV column.
    pub fn speakers_joined(&self) -> String {
        self.persons
            .iter()
            .map(|p| p.public_name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn ser_datetime<S: Serializer>(dt: &DateTime<Tz>, ser: S) -> Result<S::Ok, S::Error> {
    ser.serialize_str(&dt.format(DATETIME_FMT).to_string())
}
