// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub origin: String,
    pub index_path: String,
    pub range: DexRange,
    pub timeout: Duration,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            origin: s!(ORIGIN),
            index_path: s!(INDEX_PATH),
            range: DexRange::default(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
        }
    }
}

/// Inclusive Pokédex-number window. Either end may be open.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DexRange {
    pub first: Option<u32>,
    pub last: Option<u32>,
}

impl DexRange {
    pub fn new(first: Option<u32>, last: Option<u32>) -> Result<Self, String> {
        if let (Some(a), Some(b)) = (first, last) {
            if a > b {
                return Err(format!("Invalid range: first ({a}) is greater than last ({b})"));
            }
        }
        Ok(Self { first, last })
    }

    pub fn is_unbounded(&self) -> bool {
        self.first.is_none() && self.last.is_none()
    }

    /// Entries without a number only pass an unbounded range.
    pub fn admits(&self, number: Option<u32>) -> bool {
        if self.is_unbounded() {
            return true;
        }
        match number {
            Some(n) => {
                self.first.is_none_or(|a| n >= a) && self.last.is_none_or(|b| n <= b)
            }
            None => false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub save: bool,
    pub verbose: bool,
    pub out_path: PathBuf,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            save: false,
            verbose: false,
            out_path: PathBuf::from(DEFAULT_OUT_FILE),
        }
    }
}

impl ExportOptions {
    /// Records go to the console unless the run is file-only.
    pub fn echo(&self) -> bool {
        !self.save || self.verbose
    }
}
