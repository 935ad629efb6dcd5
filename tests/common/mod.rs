// tests/common/mod.rs
//
// Shared session builder for the integration tests.

use chrono::TimeZone;
use chrono_tz::Europe::Berlin;

use rp_scrape::normalize::{format_duration, slug};
use rp_scrape::session::{Person, Session};

pub fn session(
    day: u32,
    start: (u32, u32),
    end: (u32, u32),
    room: &str,
    title: &str,
    translation: bool,
    is_partner_session: bool,
) -> Session {
    let start = Berlin
        .with_ymd_and_hms(2023, 6, day, start.0, start.1, 0)
        .unwrap();
    let end = Berlin.with_ymd_and_hms(2023, 6, day, end.0, end.1, 0).unwrap();
    Session {
        url: format!("https://re-publica.com/de/session/{}", slug(title)),
        id: 0,
        start_date: start.format("%Y-%m-%d").to_string(),
        start_time: start.format("%H:%M").to_string(),
        end_date: end.format("%Y-%m-%d").to_string(),
        end_time: end.format("%H:%M").to_string(),
        duration: format_duration(&start, &end),
        start_datetime: start,
        end_datetime: end,
        room: room.to_string(),
        slug: slug(title),
        title: title.to_string(),
        persons: vec![
            Person { id: 1, public_name: "Jane Doe".to_string() },
            Person { id: 2, public_name: "John Smith".to_string() },
        ],
        track: "Politics".to_string(),
        kind: "Talk".to_string(),
        language: "en".to_string(),
        summary: "Short".to_string(),
        description: "Short. And a second sentence.".to_string(),
        translation,
        translation_derived: translation,
        is_partner_session,
        is_cancelled: false,
    }
}
