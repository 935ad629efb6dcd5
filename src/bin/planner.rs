// src/bin/planner.rs
//
// Read an exported sessions CSV, write the interpreter staffing grid to
// stdout. Collision diagnostics go to stderr; a collision is reported, not
// fatal.

use std::error::Error;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use rp_scrape::config::GridOptions;
use rp_scrape::core::csv::write_row;
use rp_scrape::file::read_to_string;
use rp_scrape::planner::build_grid;
use rp_scrape::records::Table;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = match args.as_slice() {
        [path] => path,
        _ => {
            eprintln!("Usage: planner <sessions.csv>");
            std::process::exit(1);
        }
    };

    let text = read_to_string(Path::new(path))?;
    let table = Table::parse(&text)?;
    let grid = build_grid(&table, &GridOptions::default())?;

    for collision in &grid.collisions {
        eprintln!("ERROR: {collision}");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for row in &grid.rows {
        write_row(&mut out, row)?;
    }
    out.flush()?;
    Ok(())
}
