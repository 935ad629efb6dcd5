// src/normalize.rs
//
// Pure field derivations shared by the extractor. No I/O, no config reads
// beyond what is passed in.

use std::sync::OnceLock;

use chrono::DateTime;
use chrono_tz::Tz;
use regex::Regex;

fn non_word_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^\w\d]+").unwrap())
}

fn sentence_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.:!?]\s+").unwrap())
}

/// Lowercase, hyphen-separated identifier derived from the title.
/// Deterministic and idempotent; uniqueness is not guaranteed.
pub fn slug(title: &str) -> String {
    let s = non_word_re().replace_all(title, "-");
    s.trim_matches('-').to_lowercase()
}

/// First `max_sentences` sentence(s) of the description, cut to `max_words`
/// words with a `...` marker when longer. Empty description yields an empty
/// abstract.
pub fn shorten_description(description: &str, max_sentences: usize, max_words: usize) -> String {
    let sentences: Vec<&str> = sentence_re().split(description).collect();
    let take = max_sentences.min(sentences.len());
    let summary = sentences[..take].join(" ");

    let words: Vec<&str> = summary.split_whitespace().collect();
    if words.len() > max_words {
        format!("{}...", words[..max_words].join(" "))
    } else {
        summary
    }
}

/// `H:MM` with zero-padded minutes, e.g. `1:05`. Floor-minute difference
/// of the whole interval (days included).
pub fn format_duration(start: &DateTime<Tz>, end: &DateTime<Tz>) -> String {
    let minutes = (*end - *start).num_minutes();
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Translation flags for a session.
///
/// An explicit translation marker on the page wins when present (non-empty
/// text = translated). Without one, fall back to the room heuristic:
/// translated rooms have booths, but partner sessions are not staffed.
/// The heuristic value alone is also reported, for the
/// `translation_derived` column.
pub fn derive_translation(
    explicit: Option<&str>,
    room: &str,
    is_partner_session: bool,
    translated_rooms: &[String],
) -> (bool, bool) {
    let derived = translated_rooms.iter().any(|r| r == room) && !is_partner_session;
    let translation = match explicit {
        Some(marker) => !marker.trim().is_empty(),
        None => derived,
    };
    (translation, derived)
}

/* ---------------- Tests ---------------- */
