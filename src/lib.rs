// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod console;
pub mod core;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod record;
pub mod runner;
pub mod scrape;
pub mod specs;

pub use error::{Error, ExtractionError, FetchError, Result, SinkError};
pub use record::PokemonRecord;
