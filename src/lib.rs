// src/lib.rs

#[macro_use]
pub mod macros;

#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;

pub mod session;
pub mod normalize;

pub mod export;
pub mod records;
pub mod planner;
pub mod unplanner;

pub mod cli;
pub mod file;
pub mod params;
pub mod progress;
pub mod runner;
