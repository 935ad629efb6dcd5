// src/core/mod.rs

pub mod csv;
pub mod net;
