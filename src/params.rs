// src/params.rs
use std::path::PathBuf;

use crate::file::SCRAPES_DIR;

/// Scrape-run parameters, CLI-selectable. The three export modes are
/// independent and combinable in one run.
#[derive(Clone)]
pub struct Params {
    pub csv: bool,               // tabular export
    pub json: bool,              // full-fidelity export
    pub frab: bool,              // interchange schedule export
    pub out_dir: PathBuf,        // artifact directory
}

impl Params {
    pub fn new() -> Self {
        Self {
            csv: false,
            json: false,
            frab: false,
            out_dir: PathBuf::from(SCRAPES_DIR),
        }
    }

    /// CSV is the default when no mode was selected.
    pub fn wants_csv(&self) -> bool {
        self.csv || (!self.json && !self.frab)
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
