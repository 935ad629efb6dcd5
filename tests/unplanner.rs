// tests/unplanner.rs
//
// Name filter over a staffing grid: scan only the staffing cells, extract
// the matched stage's full column slice.

use rp_scrape::planner::Grid;
use rp_scrape::unplanner::{filter_rows, format_list, StageSchema};

fn blank_row() -> Vec<String> {
    vec![String::new(); Grid::width(2)]
}

/// Grid data row with Stage 1 session details filled in.
fn stage1_row(date: &str, title: &str) -> Vec<String> {
    let mut row = blank_row();
    row[0] = date.to_string();
    row[1] = format!("https://re-publica.com/de/session/{title}");
    row[2] = "10:00".to_string();
    row[3] = "1:00".to_string();
    row[4] = title.to_string();
    row[5] = "Some Speaker".to_string();
    row[6] = "en".to_string();
    row[7] = "Talk".to_string();
    row
}

#[test]
fn staffing_cell_match_extracts_stage_slice() {
    let mut row = stage1_row("2023-06-05", "Alpha");
    row[8] = "Jane Doe".to_string(); // Stage 1 INT_1

    let got = filter_rows(&[row], &["Jane Doe".to_string()], &StageSchema::grid_v1());
    assert_eq!(got.len(), 1);
    let m = &got[0];
    assert_eq!(m[0], "2023-06-05");
    assert_eq!(m[1], "Stage 1");
    // date + stage + the 9 Stage 1 columns, nothing of Stage 2 or standby
    assert_eq!(m.len(), 11);
    assert_eq!(m[5], "Alpha");
    assert_eq!(m[10], "");
}

#[test]
fn name_in_speakers_cell_does_not_match() {
    // "Jane Doe" as a *speaker* sits outside the scanned staffing columns
    let mut row = stage1_row("2023-06-05", "Alpha");
    row[5] = "Jane Doe".to_string();

    let got = filter_rows(&[row], &["Jane Doe".to_string()], &StageSchema::grid_v1());
    assert!(got.is_empty());
}

#[test]
fn match_is_case_insensitive_substring() {
    let mut row = stage1_row("2023-06-05", "Alpha");
    row[9] = "jane DOE (morning only)".to_string();

    let got = filter_rows(&[row], &["Jane Doe".to_string()], &StageSchema::grid_v1());
    assert_eq!(got.len(), 1);
    assert_eq!(got[0][1], "Stage 1");
}

#[test]
fn first_match_wins_per_row() {
    let mut row = stage1_row("2023-06-05", "Alpha");
    row[8] = "Jane Doe".to_string(); // Stage 1
    row[17] = "Jane Doe".to_string(); // Stage 2 — never reached

    let got = filter_rows(&[row], &["Jane Doe".to_string()], &StageSchema::grid_v1());
    assert_eq!(got.len(), 1);
    assert_eq!(got[0][1], "Stage 1");
}

#[test]
fn standby_match_yields_short_slice() {
    let mut row = blank_row();
    row[0] = "2023-06-06".to_string();
    row[19] = "Jane Doe".to_string();

    let got = filter_rows(&[row], &["Jane Doe".to_string()], &StageSchema::grid_v1());
    assert_eq!(got.len(), 1);
    let m = &got[0];
    assert_eq!(m[1], "Standby");
    assert_eq!(m.len(), 4); // date + stage + the two standby cells
    // detail fields render empty in the list form
    assert_eq!(format_list(m), "2023-06-06 - Standby -  () - []  - ");
}

#[test]
fn unmatched_rows_are_dropped_and_headers_kept() {
    let mut header = blank_row();
    header[0] = "date".to_string();
    let mut matched = stage1_row("2023-06-05", "Alpha");
    matched[8] = "Jane Doe".to_string();
    let unmatched = stage1_row("2023-06-05", "Beta");

    let rows = vec![header.clone(), matched, unmatched];
    let got = filter_rows(&rows, &["Jane Doe".to_string()], &StageSchema::grid_v1());
    assert_eq!(got.len(), 2);
    assert_eq!(got[0], header);
    assert_eq!(got[1][5], "Alpha");
}

#[test]
fn list_format_shape() {
    let mut row = stage1_row("2023-06-05", "Alpha");
    row[8] = "Jane Doe".to_string();
    let got = filter_rows(&[row], &["Jane Doe".to_string()], &StageSchema::grid_v1());
    assert_eq!(
        format_list(&got[0]),
        "2023-06-05 - Stage 1 - 10:00 (1:00) - [en] Alpha - Some Speaker"
    );
}

#[test]
fn legacy_schema_boundaries() {
    let legacy = StageSchema::rp23_legacy();
    let mut row = vec![String::new(); 33];
    row[0] = "2023-06-05".to_string();
    row[31] = "Jane Doe".to_string();

    let got = filter_rows(&[row], &["Jane Doe".to_string()], &legacy);
    assert_eq!(got.len(), 1);
    assert_eq!(got[0][1], "Standby");
    assert_eq!(got[0].len(), 4);

    assert!(StageSchema::by_name("grid-v1").is_some());
    assert!(StageSchema::by_name("nope").is_none());
}
