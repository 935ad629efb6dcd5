// src/progress.rs
/// Lightweight progress reporting for the scrape loop. Frontends implement
/// this to surface status to users.
pub trait Progress {
    /// Called once the page count is known.
    fn begin(&mut self, _total: usize) {}

    /// Called after each page, successful or not.
    fn page_done(&mut self, _page: usize, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
