// src/export/frab.rs

use std::error::Error;

use chrono::NaiveTime;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{json, Map, Value};

use crate::config::EventConfig;
use crate::session::Session;

// The schedule interchange granularity is fixed; consumers only use it for
// grid snapping.
const TIMESLOT_DURATION: &str = "00:15";

#[derive(Serialize)]
pub struct Schedule {
    pub version: String,
    pub base_url: String,
    pub conference: Conference,
}

#[derive(Serialize)]
pub struct Conference {
    pub acronym: String,
    pub title: String,
    pub start: String,
    pub end: String,
    #[serde(rename = "daysCount")]
    pub days_count: usize,
    pub timeslot_duration: String,
    pub time_zone_name: String,
    pub days: Vec<Day>,
}

#[derive(Serialize)]
pub struct Day {
    pub index: usize,
    pub date: String,
    pub day_start: String,
    pub day_end: String,
    /// Room name → sessions, in first-seen room order.
    pub rooms: Map<String, Value>,
}

/// Consecutive runs of records sharing a `start_date`. The input is assumed
/// date-ordered already; a date that reappears non-consecutively starts a
/// new group rather than merging backwards.
pub fn group_by_day(sessions: &[Session]) -> Vec<&[Session]> {
    let mut groups = Vec::new();
    let mut start = 0;
    for i in 1..=sessions.len() {
        if i == sessions.len() || sessions[i].start_date != sessions[start].start_date {
            groups.push(&sessions[start..i]);
            start = i;
        }
    }
    groups
}

/// Build the schedule envelope. `version` is the artifact timestamp stem.
pub fn build_schedule(
    sessions: &[Session],
    cfg: &EventConfig,
    version: &str,
) -> Result<Schedule, Box<dyn Error>> {
    let (first, last) = match (sessions.first(), sessions.last()) {
        (Some(f), Some(l)) => (f, l),
        _ => return Err("cannot build a schedule from an empty record sequence".into()),
    };

    let day_groups = group_by_day(sessions);
    let mut days = Vec::with_capacity(day_groups.len());

    for (index, group) in day_groups.iter().enumerate() {
        let day_start = group
            .iter()
            .map(|s| s.start_datetime)
            .min()
            .ok_or("empty day group")?;

        // Latest end time-of-day across the group, regardless of date.
        let mut day_end = NaiveTime::MIN;
        for s in group.iter() {
            let t = NaiveTime::parse_from_str(&s.end_time, "%H:%M")
                .map_err(|e| format!("bad end_time `{}`: {}", s.end_time, e))?;
            day_end = day_end.max(t);
        }

        let mut rooms: Map<String, Value> = Map::new();
        for s in group.iter() {
            let entry = rooms
                .entry(s.room.clone())
                .or_insert_with(|| Value::Array(Vec::new()));
            if let Value::Array(list) = entry {
                list.push(session_value(s)?);
            }
        }

        days.push(Day {
            index: index + 1,
            date: day_start.format("%Y-%m-%d").to_string(),
            day_start: day_start.format("%H:%M").to_string(),
            day_end: day_end.format("%H:%M").to_string(),
            rooms,
        });
    }

    Ok(Schedule {
        version: s!(version),
        base_url: format!("{}/", cfg.base_url),
        conference: Conference {
            acronym: cfg.acronym.clone(),
            title: cfg.title.clone(),
            start: first.start_date.clone(),
            end: last.end_date.clone(),
            days_count: days.len(),
            timeslot_duration: s!(TIMESLOT_DURATION),
            time_zone_name: s!(cfg.tz_name()),
            days,
        },
    })
}

pub fn to_frab_string(
    sessions: &[Session],
    cfg: &EventConfig,
    version: &str,
) -> Result<String, Box<dyn Error>> {
    let schedule = build_schedule(sessions, cfg, version)?;
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    schedule.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// One session, reshaped for the schedule schema: `start` as an ISO
/// instant, `guid` from the url, the split date/time fields dropped, and
/// fixed defaults for the recording metadata the site does not carry.
fn session_value(s: &Session) -> Result<Value, Box<dyn Error>> {
    let mut m = Map::new();
    m.insert(s!("url"), json!(s.url));
    m.insert(s!("id"), json!(s.id));
    m.insert(s!("duration"), json!(s.duration));
    m.insert(s!("room"), json!(s.room));
    m.insert(s!("slug"), json!(s.slug));
    m.insert(s!("title"), json!(s.title));
    m.insert(s!("persons"), serde_json::to_value(&s.persons)?);
    m.insert(s!("track"), json!(s.track));
    m.insert(s!("type"), json!(s.kind));
    m.insert(s!("language"), json!(s.language));
    m.insert(s!("abstract"), json!(s.summary));
    m.insert(s!("description"), json!(s.description));
    m.insert(s!("translation"), json!(s.translation));
    m.insert(s!("translation_derived"), json!(s.translation_derived));
    m.insert(s!("is_partner_session"), json!(s.is_partner_session));
    m.insert(s!("is_cancelled"), json!(s.is_cancelled));
    m.insert(s!("start"), json!(s.start_datetime.to_rfc3339()));
    m.insert(s!("guid"), json!(s.url));
    m.insert(s!("logo"), json!(""));
    m.insert(s!("do_not_record"), json!(false));
    m.insert(s!("answers"), json!([]));
    m.insert(s!("links"), json!([]));
    m.insert(s!("attachments"), json!([]));
    m.insert(s!("recording_license"), json!("Unknown"));
    Ok(Value::Object(m))
}

/* ---------------- Tests ---------------- */
