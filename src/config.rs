// src/config.rs
//
// Per-event constants live here, not as module globals scattered around.
// Every component takes an `EventConfig` so a differently-configured event
// instance (another year, another site) only needs a different config value.

use chrono_tz::Tz;

pub const DEFAULT_BASE_URL: &str = "https://re-publica.com";
pub const DEFAULT_LANGUAGE: &str = "de";
pub const DEFAULT_TZ: Tz = chrono_tz::Europe::Berlin;
pub const DEFAULT_FIRST_DAY: &str = "2023-06-05";
pub const DEFAULT_LAST_DAY: &str = "2023-06-07";
pub const DEFAULT_ACRONYM: &str = "rp23";
pub const DEFAULT_TITLE: &str = "re:publica 2023";

/// Rooms with interpreter booths. Sessions here are translated by default
/// unless they are partner sessions.
pub const DEFAULT_TRANSLATED_ROOMS: [&str; 2] = ["Stage 1", "Stage 2"];

#[derive(Clone, Debug)]
pub struct EventConfig {
    pub base_url: String,
    pub language: String,
    pub tz: Tz,
    /// Fallback date range for sessions whose listing entry carries no
    /// date block (used as `<first_day>T06:00:00Z` / `<last_day>T16:00:00Z`).
    pub first_day: String,
    pub last_day: String,
    pub acronym: String,
    pub title: String,
    pub translated_rooms: Vec<String>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            base_url: s!(DEFAULT_BASE_URL),
            language: s!(DEFAULT_LANGUAGE),
            tz: DEFAULT_TZ,
            first_day: s!(DEFAULT_FIRST_DAY),
            last_day: s!(DEFAULT_LAST_DAY),
            acronym: s!(DEFAULT_ACRONYM),
            title: s!(DEFAULT_TITLE),
            translated_rooms: DEFAULT_TRANSLATED_ROOMS.iter().map(|r| s!(*r)).collect(),
        }
    }
}

impl EventConfig {
    /// Paginated session listing endpoint.
    pub fn sessions_url(&self) -> String {
        format!("{}/{}/sessions", self.base_url, self.language)
    }

    /// IANA timezone name, as exported in the frab envelope.
    pub fn tz_name(&self) -> &'static str {
        self.tz.name()
    }
}

/// Planner filter settings. The room allow-set doubles as the set of grid
/// columns; it is configuration, not an invariant of the grid algorithm.
#[derive(Clone, Debug)]
pub struct GridOptions {
    pub rooms: Vec<String>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            rooms: DEFAULT_TRANSLATED_ROOMS.iter().map(|r| s!(*r)).collect(),
        }
    }
}
