// src/file.rs

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::EventConfig;

/// Default directory for scrape artifacts.
pub const SCRAPES_DIR: &str = "scrapes";

/// Timestamp stem shared by all artifacts of one run, rendered in the
/// event timezone: `2023-06-05T101500+0200`.
pub fn timestamp_stem(cfg: &EventConfig) -> String {
    Utc::now()
        .with_timezone(&cfg.tz)
        .format("%Y-%m-%dT%H%M%S%z")
        .to_string()
}

/// `<dir>/<stem><suffix>`, e.g. `scrapes/2023-06-05T101500+0200-frab.json`.
pub fn artifact_path(dir: &Path, stem: &str, suffix: &str) -> PathBuf {
    dir.join(format!("{stem}{suffix}"))
}

pub fn write_string(path: &Path, contents: &str) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn read_to_string(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e).into())
}
