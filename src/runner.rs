// src/runner.rs

use std::error::Error;
use std::path::PathBuf;

use scraper::Html;

use crate::config::EventConfig;
use crate::core::net::Http;
use crate::export;
use crate::file;
use crate::params::Params;
use crate::progress::Progress;
use crate::session::Session;
use crate::specs;

/// Summary of what a scrape run produced.
pub struct RunSummary {
    pub sessions: usize,
    pub files_written: Vec<PathBuf>,
}

/// Top-level scrape runner: discover the page count, walk the listing
/// pages in order, then write the selected export artifacts.
///
/// Pages are fetched strictly sequentially; record order is page order, so
/// the output is deterministic. A page that fails even after retries is
/// skipped with a warning rather than aborting the whole run.
pub fn run(
    params: &Params,
    cfg: &EventConfig,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error>> {
    let http = Http::new()?;

    let first = http.get(&cfg.sessions_url())?;
    let last_page = specs::sessions::last_page(&Html::parse_document(&first))?;
    let total = last_page as usize + 1;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
        p.log(&format!("Scraping {} pages from {}...", total, cfg.sessions_url()));
    }

    let mut sessions: Vec<Session> = Vec::new();
    for page in 0..=last_page {
        let url = format!("{}?page={}", cfg.sessions_url(), page);
        match fetch_page(&http, &url, cfg) {
            Ok(mut page_sessions) => sessions.append(&mut page_sessions),
            Err(e) => logw!("page {} skipped: {}", page, e),
        }
        if let Some(p) = progress.as_deref_mut() {
            p.page_done(page as usize + 1, total);
        }
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if sessions.is_empty() {
        return Err("no sessions extracted — refusing to write empty artifacts".into());
    }

    write_artifacts(params, cfg, &sessions)
}

fn fetch_page(http: &Http, url: &str, cfg: &EventConfig) -> Result<Vec<Session>, Box<dyn Error>> {
    let body = http.get(url)?;
    let doc = Html::parse_document(&body);
    specs::sessions::extract_sessions(&doc, cfg)
}

fn write_artifacts(
    params: &Params,
    cfg: &EventConfig,
    sessions: &[Session],
) -> Result<RunSummary, Box<dyn Error>> {
    file::ensure_directory(&params.out_dir)?;
    let stem = file::timestamp_stem(cfg);

    let mut written = Vec::new();

    if params.frab {
        let path = file::artifact_path(&params.out_dir, &stem, "-frab.json");
        file::write_string(&path, &export::frab::to_frab_string(sessions, cfg, &stem)?)?;
        written.push(path);
    }
    if params.json {
        let path = file::artifact_path(&params.out_dir, &stem, ".json");
        file::write_string(&path, &export::json::to_json_string(sessions)?)?;
        written.push(path);
    }
    if params.wants_csv() {
        let path = file::artifact_path(&params.out_dir, &stem, ".csv");
        file::write_string(&path, &export::csv::to_csv_string(sessions))?;
        written.push(path);
    }

    Ok(RunSummary { sessions: sessions.len(), files_written: written })
}
