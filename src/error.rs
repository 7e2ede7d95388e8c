// src/error.rs
use std::io;

use thiserror::Error;

/// Failure to get a page body off the wire.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP error: {status} {url}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The detail page did not have the layout the extractor reads.
///
/// `MissingTables`, `MissingCell` and `MissingStatsRow` mean the markup moved;
/// `EmptyField` and `InvalidStat` mean the cell was there but held the wrong thing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("expected at least {expected} dextable tables, found {found}")]
    MissingTables { expected: usize, found: usize },

    #[error("no cell for `{field}` at index {index}")]
    MissingCell { field: &'static str, index: usize },

    #[error("`{field}` cell is empty")]
    EmptyField { field: &'static str },

    #[error("no \"Base Stats - Total:\" row")]
    MissingStatsRow,

    #[error("`{field}` is not a non-negative integer: {text:?}")]
    InvalidStat { field: &'static str, text: String },
}

#[derive(Debug, Error)]
pub enum SinkError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractionError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("{0}")]
    Config(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
