// src/export/csv.rs

use crate::core::csv::write_row;
use crate::session::{Session, DATETIME_FMT};

/// Column order of the tabular export: the record's key order minus the
/// structured `persons` list, plus the joined `speakers` column at the end.
/// The planner reads these back by name.
pub const COLUMNS: [&str; 22] = [
    "url",
    "id",
    "start_datetime",
    "start_date",
    "start_time",
    "end_datetime",
    "end_date",
    "end_time",
    "duration",
    "room",
    "slug",
    "title",
    "track",
    "type",
    "language",
    "abstract",
    "description",
    "translation",
    "translation_derived",
    "is_partner_session",
    "is_cancelled",
    "speakers",
];

pub fn session_row(s: &Session) -> Vec<String> {
    vec![
        s.url.clone(),
        s.id.to_string(),
        s.start_datetime.format(DATETIME_FMT).to_string(),
        s.start_date.clone(),
        s.start_time.clone(),
        s.end_datetime.format(DATETIME_FMT).to_string(),
        s.end_date.clone(),
        s.end_time.clone(),
        s.duration.clone(),
        s.room.clone(),
        s.slug.clone(),
        s.title.clone(),
        s.track.clone(),
        s.kind.clone(),
        s.language.clone(),
        s.summary.clone(),
        s.description.clone(),
        s.translation.to_string(),
        s.translation_derived.to_string(),
        s.is_partner_session.to_string(),
        s.is_cancelled.to_string(),
        s.speakers_joined(),
    ]
}

/// Header plus one row per session. An empty input still writes the header
/// line, nothing else.
pub fn to_csv_string(sessions: &[Session]) -> String {
    let header: Vec<String> = COLUMNS.iter().map(|c| s!(*c)).collect();

    let mut buf: Vec<u8> = Vec::new();
    let _ = write_row(&mut buf, &header);
    for session in sessions {
        let _ = write_row(&mut buf, &session_row(session));
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
