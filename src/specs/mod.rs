// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific extraction specifications for the event site. Each spec
//! focuses on a single page/endpoint and encodes *where the ground truth
//! lives in the markup* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML extraction** over an already-parsed `scraper::Html`
//!   document. No fetching: the runner fetches, specs read.
//! - **Selector choice & precedence** for the session listing (article
//!   blocks, field wrappers, the pager).
//! - **Tolerant field handling**: required regions (title, description,
//!   track, format, language) error out with context; optional regions
//!   (date block, room, translation marker, partner marker) fall back to
//!   documented defaults instead of failing.
//! - **Light shaping** of results into `session::Session` records via the
//!   `normalize` derivations.
//!
//! ## What does **not** live here
//! - Pagination control and retry policy — `runner` owns the loop,
//!   `core::net` owns the transport.
//! - Export formatting — `export::*` reads finished records.
//!
//! ## Conventions & invariants
//! - Record order is page order; the runner concatenates pages in index
//!   order, so the final sequence is deterministic.
//! - A malformed speaker link degrades to a warning for that speaker only,
//!   never an aborted extraction.
//!
//! ## Testing notes
//! - Specs are testable **offline** against captured fixture markup; see
//!   the tests at the bottom of `sessions.rs`.

pub mod sessions;
