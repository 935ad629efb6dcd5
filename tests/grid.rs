// tests/grid.rs
//
// Grid builder end-to-end: exported CSV in, staffing grid out.

mod common;

use common::session;
use rp_scrape::config::GridOptions;
use rp_scrape::export::csv::to_csv_string;
use rp_scrape::planner::{build_grid, Grid};
use rp_scrape::records::Table;

fn grid_of(sessions: &[rp_scrape::session::Session], opts: &GridOptions) -> Grid {
    let table = Table::parse(&to_csv_string(sessions)).unwrap();
    build_grid(&table, opts).unwrap()
}

fn data_rows(grid: &Grid) -> Vec<&Vec<String>> {
    // skip header, spacers, and per-date summary rows
    grid.rows
        .iter()
        .skip(1)
        .filter(|r| !r.is_empty() && !r.iter().any(|c| c.contains("first session starts")))
        .collect()
}

#[test]
fn filtered_rooms_define_columns() {
    let sessions = vec![
        session(5, (10, 0), (11, 0), "Stage 1", "Alpha", true, false),
        session(5, (10, 0), (11, 0), "Stage 2", "Beta", true, false),
        session(5, (10, 0), (11, 0), "Stage 3", "Gamma", true, false),
    ];
    let grid = grid_of(&sessions, &GridOptions::default());

    // Stage 3 is outside the allow-set: two room column groups only.
    let header = &grid.rows[0];
    assert_eq!(header.len(), Grid::width(2));
    assert_eq!(header[0], "date");
    assert_eq!(header[1], "Stage 1_url");
    assert_eq!(header[10], "Stage 2_url");
    assert_eq!(header[19], "standby_INT_1");

    // one data row for 10:00, and Gamma appears nowhere
    let rows = data_rows(&grid);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][2], "10:00");
    assert_eq!(rows[0][4], "Alpha");
    assert_eq!(rows[0][13], "Beta");
    assert!(grid.rows.iter().flatten().all(|cell| !cell.contains("Gamma")));
}

#[test]
fn column_count_is_constant() {
    let sessions = vec![
        session(5, (10, 0), (11, 0), "Stage 1", "Alpha", true, false),
        session(5, (11, 30), (12, 0), "Stage 2", "Beta", true, false),
        session(6, (9, 0), (10, 0), "Stage 1", "Delta", true, false),
    ];
    let grid = grid_of(&sessions, &GridOptions::default());
    for row in grid.rows.iter().filter(|r| !r.is_empty()) {
        assert_eq!(row.len(), Grid::width(2));
    }
}

#[test]
fn collision_keeps_first_and_reports_once() {
    let sessions = vec![
        session(5, (10, 0), (11, 0), "Stage 1", "First seen", true, false),
        session(5, (10, 0), (11, 30), "Stage 1", "Second seen", true, false),
    ];
    let grid = grid_of(&sessions, &GridOptions::default());

    assert_eq!(grid.collisions.len(), 1);
    let c = &grid.collisions[0];
    assert_eq!(c.date, "2023-06-05");
    assert_eq!(c.time, "10:00");
    assert_eq!(c.room, "Stage 1");
    assert_eq!(c.kept_title, "First seen");
    assert_eq!(c.dropped_title, "Second seen");

    let rows = data_rows(&grid);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][4], "First seen");
    assert!(grid.rows.iter().flatten().all(|cell| cell != "Second seen"));
}

#[test]
fn translation_and_partner_filters_apply() {
    let sessions = vec![
        session(5, (10, 0), (11, 0), "Stage 1", "Staffed", true, false),
        session(5, (12, 0), (13, 0), "Stage 1", "Untranslated", false, false),
        session(5, (14, 0), (15, 0), "Stage 1", "Partner", true, true),
    ];
    let grid = grid_of(&sessions, &GridOptions::default());
    let rows = data_rows(&grid);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][4], "Staffed");
}

#[test]
fn allow_set_is_configuration() {
    let sessions = vec![
        session(5, (10, 0), (11, 0), "Stage 9", "Offside", true, false),
    ];
    let opts = GridOptions { rooms: vec!["Stage 9".to_string()] };
    let grid = grid_of(&sessions, &opts);
    assert_eq!(grid.rows[0].len(), Grid::width(1));
    assert_eq!(data_rows(&grid).len(), 1);
}

#[test]
fn spacers_on_hour_change_and_date_end() {
    let sessions = vec![
        session(5, (10, 0), (10, 30), "Stage 1", "A", true, false),
        session(5, (10, 30), (11, 0), "Stage 1", "B", true, false),
        session(5, (11, 0), (12, 0), "Stage 1", "C", true, false),
    ];
    let grid = grid_of(&sessions, &GridOptions::default());

    // layout: header, summary, spacer, 10:00, 10:30, spacer, 11:00, spacer
    let kinds: Vec<&str> = grid.rows[1..]
        .iter()
        .map(|r| {
            if r.is_empty() {
                "spacer"
            } else if r.iter().any(|c| c.contains("first session starts")) {
                "summary"
            } else {
                "data"
            }
        })
        .collect();
    assert_eq!(
        kinds,
        ["summary", "spacer", "data", "data", "spacer", "data", "spacer"]
    );
}

#[test]
fn summary_row_states_day_bounds() {
    let sessions = vec![
        session(5, (10, 0), (11, 0), "Stage 1", "Early", true, false),
        session(5, (16, 0), (17, 45), "Stage 1", "Late", true, false),
        session(5, (12, 0), (13, 0), "Stage 2", "Mid", true, false),
    ];
    let grid = grid_of(&sessions, &GridOptions::default());
    let summary = &grid.rows[1];
    assert_eq!(summary[0], "2023-06-05");
    assert_eq!(
        summary[1],
        "Stage 1 first session starts 10:00, last session ends 17:45"
    );
    assert_eq!(
        summary[10],
        "Stage 2 first session starts 12:00, last session ends 13:00"
    );
}

#[test]
fn room_without_sessions_on_a_day_stays_blank() {
    let sessions = vec![
        session(5, (10, 0), (11, 0), "Stage 1", "Day one", true, false),
        session(5, (10, 0), (11, 0), "Stage 2", "Day one too", true, false),
        session(6, (10, 0), (11, 0), "Stage 1", "Day two", true, false),
    ];
    let grid = grid_of(&sessions, &GridOptions::default());

    // second summary row: Stage 2 has nothing on day two
    let summaries: Vec<&Vec<String>> = grid
        .rows
        .iter()
        .filter(|r| r.iter().any(|c| c.contains("first session starts")))
        .collect();
    assert_eq!(summaries.len(), 2);
    let day_two = summaries[1];
    assert_eq!(day_two[0], "2023-06-06");
    assert!(day_two[1].starts_with("Stage 1"));
    assert!(day_two[10..19].iter().all(|c| c.is_empty()));
}

#[test]
fn malformed_csv_is_rejected() {
    assert!(Table::parse("").is_err());
    assert!(Table::parse("a,b\n1,2,3\n").is_err());
}
