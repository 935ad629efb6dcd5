// src/bin/unplanner.rs
//
// Extract one or more people's assignments from a staffing grid CSV.
// Default output is a compact line per match; --csv re-emits the raw
// column slices instead.

use std::error::Error;
use std::path::Path;

use rp_scrape::core::csv::{parse_rows, rows_to_string};
use rp_scrape::file::read_to_string;
use rp_scrape::unplanner::{filter_rows, format_list, is_header_row, StageSchema};

fn usage() -> ! {
    eprintln!(
        "Usage: unplanner <grid.csv> <name1> [<name2> ...] [--csv] [--schema <{}>]",
        StageSchema::preset_names().join("|")
    );
    std::process::exit(1);
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();

    let mut csv_output = false;
    if let Some(i) = args.iter().position(|a| a == "--csv") {
        csv_output = true;
        args.remove(i);
    }

    let mut schema = StageSchema::grid_v1();
    if let Some(i) = args.iter().position(|a| a == "--schema") {
        if i + 1 >= args.len() {
            usage();
        }
        schema = match StageSchema::by_name(&args[i + 1]) {
            Some(s) => s,
            None => usage(),
        };
        args.drain(i..=i + 1);
    }

    if args.len() < 2 {
        usage();
    }
    let path = args.remove(0);
    let names = args;

    let text = read_to_string(Path::new(&path))?;
    let rows = parse_rows(&text);
    let filtered = filter_rows(&rows, &names, &schema);

    if csv_output {
        print!("{}", rows_to_string(&filtered));
    } else {
        for row in filtered.iter().filter(|r| !is_header_row(r)) {
            println!("{}", format_list(row));
        }
    }
    Ok(())
}
