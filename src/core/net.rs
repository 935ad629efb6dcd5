// src/core/net.rs
//
// Blocking HTTP GET with a small retry ladder. The scrape is strictly
// sequential, one page at a time; a page that still fails after the last
// attempt is the caller's problem (the runner warns and moves on).

use std::error::Error;
use std::thread::sleep;
use std::time::Duration;

use reqwest::blocking::Client;

const ATTEMPTS: u32 = 3;
const BACKOFF_BASE_MS: u64 = 500;

pub struct Http {
    client: Client,
}

impl Http {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = Client::builder()
            .user_agent(concat!("rp_scrape/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(15))
            .build()?;
        Ok(Self { client })
    }

    /// GET a page body as text. Non-2xx counts as a failure and is retried.
    pub fn get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let mut last_err: Option<Box<dyn Error>> = None;

        for attempt in 1..=ATTEMPTS {
            match self.try_get(url) {
                Ok(body) => return Ok(body),
                Err(e) => {
                    if attempt < ATTEMPTS {
                        logw!("GET {} failed (attempt {}/{}): {}", url, attempt, ATTEMPTS, e);
                        sleep(Duration::from_millis(BACKOFF_BASE_MS * u64::from(attempt)));
                    }
                    last_err = Some(e);
                }
            }
        }

        Err(last_err.unwrap_or_else(|| format!("GET {} failed", url).into()))
    }

    fn try_get(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP error: {} {}", status, url).into());
        }
        Ok(response.text()?)
    }
}
