// src/export/mod.rs
//
// Serialization of a finished scrape run. Three independent modes, any
// combination selectable per run:
//   csv  — one row per session, speakers joined into a single column
//   json — full-fidelity dump including the structured persons list
//   frab — nested day/room/session interchange schedule
//          (see https://c3voc.de/schedule/schema.json)

pub mod csv;
pub mod frab;
pub mod json;
