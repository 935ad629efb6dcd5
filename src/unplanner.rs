// src/unplanner.rs
//
// Pulls one person's schedule back out of a staffing grid: scan the
// staffing cells for a name, and extract the full column slice of whichever
// stage the matching cell belongs to. Column geometry differs between grid
// layouts, so the ranges are versioned presets, not code.

use std::fmt;

/// Column slice of one named stage within a grid row.
#[derive(Clone, Debug)]
pub struct StageRange {
    pub name: String,
    pub start: usize,
    pub end: usize, // exclusive
}

/// One grid layout version: which columns to scan for names, and which
/// stage each column index belongs to.
#[derive(Clone, Debug)]
pub struct StageSchema {
    pub name: &'static str,
    pub scan: Vec<usize>,
    pub stages: Vec<StageRange>,
}

impl StageSchema {
    /// Geometry of the grids this crate's planner emits for two stages:
    /// date, 9 columns per stage (staffing slots at offsets 7 and 8), then
    /// the two standby columns. Scanned cells are exactly the staffing
    /// slots, so a name in a speakers cell never matches.
    pub fn grid_v1() -> Self {
        Self {
            name: "grid-v1",
            scan: vec![8, 9, 17, 18, 19, 20],
            stages: vec![
                range("Stage 1", 1, 10),
                range("Stage 2", 10, 19),
                range("Standby", 19, 21),
            ],
        }
    }

    /// Column ranges of the hand-maintained 2023 spreadsheet. Its stages
    /// were ten columns wide and the standby block sat far right; the
    /// scanned window also swept the stages' detail columns.
    pub fn rp23_legacy() -> Self {
        Self {
            name: "rp23-legacy",
            scan: (9..32).collect(),
            stages: vec![
                range("Stage 1", 1, 11),
                range("Stage 2", 11, 21),
                range("Standby", 31, 33),
            ],
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "grid-v1" => Some(Self::grid_v1()),
            "rp23-legacy" => Some(Self::rp23_legacy()),
            _ => None,
        }
    }

    pub fn preset_names() -> &'static [&'static str] {
        &["grid-v1", "rp23-legacy"]
    }

    fn stage_for(&self, col: usize) -> Option<&StageRange> {
        self.stages.iter().find(|s| s.start <= col && col < s.end)
    }
}

impl fmt::Display for StageSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

fn range(name: &str, start: usize, end: usize) -> StageRange {
    StageRange { name: s!(name), start, end }
}

/// Filter grid rows down to those where a staffing cell contains any of the
/// given names (case-insensitive substring). The output row is
/// `[date, stage]` plus the matched stage's column slice; only the first
/// matching cell per row counts. Leading header rows (first cell `date`)
/// pass through unchanged.
pub fn filter_rows(
    rows: &[Vec<String>],
    names: &[String],
    schema: &StageSchema,
) -> Vec<Vec<String>> {
    let lowered: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
    let mut out = Vec::new();

    let mut data_start = 0;
    for (i, row) in rows.iter().enumerate() {
        if is_header_row(row) {
            out.push(row.clone());
            data_start = i + 1;
        } else {
            break;
        }
    }

    for row in &rows[data_start..] {
        if let Some((stage, slice)) = match_row(row, &lowered, schema) {
            let mut filtered = Vec::with_capacity(2 + slice.len());
            filtered.push(row.first().cloned().unwrap_or_default());
            filtered.push(stage);
            filtered.extend(slice);
            out.push(filtered);
        }
    }

    out
}

pub fn is_header_row(row: &[String]) -> bool {
    row.first().map(String::as_str) == Some("date")
}

fn match_row(
    row: &[String],
    lowered_names: &[String],
    schema: &StageSchema,
) -> Option<(String, Vec<String>)> {
    for &col in &schema.scan {
        let cell = row.get(col).map(String::as_str).unwrap_or("");
        if cell.is_empty() {
            continue;
        }
        let cell_lc = cell.to_lowercase();
        if !lowered_names.iter().any(|n| cell_lc.contains(n)) {
            continue;
        }
        if let Some(stage) = schema.stage_for(col) {
            let slice = (stage.start..stage.end)
                .map(|k| row.get(k).cloned().unwrap_or_default())
                .collect();
            return Some((stage.name.clone(), slice));
        }
    }
    None
}

/// Compact one-line rendering of a filtered row:
/// `date - stage - time (duration) - [lang] title - speakers`.
/// Standby rows carry no detail columns; their fields render empty.
pub fn format_list(row: &[String]) -> String {
    let get = |i: usize| row.get(i).map(String::as_str).unwrap_or("");
    format!(
        "{} - {} - {} ({}) - [{}] {} - {}",
        get(0), // date
        get(1), // stage
        get(3), // start_time
        get(4), // duration
        get(7), // language
        get(5), // title
        get(6), // speakers
    )
}
