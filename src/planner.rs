// src/planner.rs
//
// Grid builder for interpreter staffing: reshapes an exported sessions CSV
// into a room-by-time matrix. Deterministic pure transform — grouping runs
// over sorted keys (BTreeMap), never insertion order, and the only external
// state is the configured room allow-set.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt;

use chrono::DateTime;

use crate::config::GridOptions;
use crate::records::{Record, Table};
use crate::session::DATETIME_FMT;

/// Sub-columns emitted per room. The trailing two are free-form staffing
/// slots, filled in by hand after the fact.
pub const ROOM_COLUMNS: [&str; 9] = [
    "url",
    "start_time",
    "duration",
    "title",
    "speakers",
    "language",
    "type",
    "INT_1",
    "INT_2",
];

/// Trailing global staffing slots (the standby interpreters).
pub const STANDBY_COLUMNS: [&str; 2] = ["standby_INT_1", "standby_INT_2"];

/// Two sessions claimed the same `(date, time, room)` slot. The first-seen
/// record stays in the grid; the collision is reported, not resolved.
pub struct Collision {
    pub date: String,
    pub time: String,
    pub room: String,
    pub kept_title: String,
    pub dropped_title: String,
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "multiple sessions for {} {} in room {}: kept `{}`, dropped `{}`",
            self.date, self.time, self.room, self.kept_title, self.dropped_title
        )
    }
}

pub struct Grid {
    /// Output rows, header included. Empty rows are the visual spacers.
    pub rows: Vec<Vec<String>>,
    pub collisions: Vec<Collision>,
}

impl Grid {
    /// Column count of every non-spacer row: date + 9 per room + 2 standby.
    pub fn width(room_count: usize) -> usize {
        1 + ROOM_COLUMNS.len() * room_count + STANDBY_COLUMNS.len()
    }
}

pub fn build_grid(table: &Table, opts: &GridOptions) -> Result<Grid, Box<dyn Error>> {
    // 1. Keep staffable sessions only: allowed room, translated, no partner.
    let filtered: Vec<Record<'_>> = table
        .records()
        .filter(|r| {
            opts.rooms.iter().any(|room| room == r.get("room"))
                && r.get("translation") == "true"
                && r.get("is_partner_session") == "false"
        })
        .collect();

    // 2. Rooms actually present, lexicographic — this is the column layout.
    let rooms: Vec<String> = filtered
        .iter()
        .map(|r| s!(r.get("room")))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    // 3. Sort by parsed start instant.
    let mut keyed = Vec::with_capacity(filtered.len());
    for r in filtered {
        let raw = r.get("start_datetime");
        let dt = DateTime::parse_from_str(raw, DATETIME_FMT)
            .map_err(|e| format!("bad start_datetime `{raw}`: {e}"))?;
        keyed.push((dt, r));
    }
    keyed.sort_by_key(|(dt, _)| *dt);

    // 4. Group date → time → room, first write wins.
    let mut grouped: BTreeMap<String, BTreeMap<String, BTreeMap<String, Record<'_>>>> =
        BTreeMap::new();
    let mut collisions = Vec::new();
    for (_, r) in keyed {
        let slot = grouped
            .entry(s!(r.get("start_date")))
            .or_default()
            .entry(s!(r.get("start_time")))
            .or_default();
        match slot.entry(s!(r.get("room"))) {
            Entry::Vacant(e) => {
                e.insert(r);
            }
            Entry::Occupied(e) => collisions.push(Collision {
                date: s!(r.get("start_date")),
                time: s!(r.get("start_time")),
                room: s!(r.get("room")),
                kept_title: s!(e.get().get("title")),
                dropped_title: s!(r.get("title")),
            }),
        }
    }

    // 5.–8. Emit.
    let mut rows = Vec::new();
    rows.push(header_row(&rooms));

    let mut last_hour: Option<String> = None;
    for (date, times) in &grouped {
        rows.push(summary_row(date, &rooms, times));

        for (time, slots) in times {
            let hour = time.split(':').next().unwrap_or(time).to_string();
            if last_hour.as_deref() != Some(hour.as_str()) {
                rows.push(Vec::new()); // spacer on hour change
            }

            let mut row = Vec::with_capacity(Grid::width(rooms.len()));
            row.push(date.clone());
            for room in &rooms {
                match slots.get(room) {
                    Some(r) => row.extend(ROOM_COLUMNS.iter().map(|col| s!(r.get(col)))),
                    None => push_blanks(&mut row, ROOM_COLUMNS.len()),
                }
            }
            push_blanks(&mut row, STANDBY_COLUMNS.len());
            rows.push(row);

            last_hour = Some(hour);
        }

        rows.push(Vec::new()); // spacer after every date block
    }

    Ok(Grid { rows, collisions })
}

/* ---------------- row builders ---------------- */

fn header_row(rooms: &[String]) -> Vec<String> {
    let mut header = Vec::with_capacity(Grid::width(rooms.len()));
    header.push(s!("date"));
    for room in rooms {
        for col in ROOM_COLUMNS {
            header.push(format!("{room}_{col}"));
        }
    }
    header.extend(STANDBY_COLUMNS.iter().map(|c| s!(*c)));
    header
}

/// One line per date stating each room's first start and last end that day.
/// Rooms with no session that day stay entirely blank.
fn summary_row(
    date: &str,
    rooms: &[String],
    times: &BTreeMap<String, BTreeMap<String, Record<'_>>>,
) -> Vec<String> {
    let mut row = Vec::with_capacity(Grid::width(rooms.len()));
    row.push(s!(date));

    for room in rooms {
        let mut first_start: Option<&str> = None;
        let mut last_end: Option<&str> = None;
        for slots in times.values() {
            if let Some(r) = slots.get(room) {
                let start = r.get("start_time");
                let end = r.get("end_time");
                first_start = Some(first_start.map_or(start, |cur| cur.min(start)));
                last_end = Some(last_end.map_or(end, |cur| cur.max(end)));
            }
        }
        match (first_start, last_end) {
            (Some(start), Some(end)) => {
                row.push(format!(
                    "{room} first session starts {start}, last session ends {end}"
                ));
                push_blanks(&mut row, ROOM_COLUMNS.len() - 1);
            }
            _ => push_blanks(&mut row, ROOM_COLUMNS.len()),
        }
    }

    push_blanks(&mut row, STANDBY_COLUMNS.len());
    row
}

fn push_blanks(row: &mut Vec<String>, n: usize) {
    row.extend((0..n).map(|_| s!()));
}
