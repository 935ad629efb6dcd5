// src/cli.rs
use std::env;
use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use crate::config::EventConfig;
use crate::params::Params;
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let cfg = EventConfig::default();
    let mut progress = ConsoleProgress;
    let summary = runner::run(&params, &cfg, Some(&mut progress))?;

    for path in &summary.files_written {
        println!("Saved as {}", path.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--csv" => params.csv = true,
            "--json" => params.json = true,
            "--frab" => params.frab = true,
            "-o" | "--out" => {
                params.out_dir =
                    PathBuf::from(args.next().ok_or("Missing value for --out")?);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

/// Single-line page ticker on stderr, overwritten in place.
struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }

    fn page_done(&mut self, page: usize, total: usize) {
        eprint!("\rPage {}/{}", page, total);
        let _ = std::io::stderr().flush();
    }

    fn finish(&mut self) {
        eprintln!();
    }
}
