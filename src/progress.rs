// src/progress.rs
use crate::error::Error;
use crate::record::PokemonRecord;

/// Lightweight progress reporting for the batch.
/// The CLI implements this to echo records as they arrive.
pub trait Progress {
    /// Called at the start with the number of paths queued.
    fn begin(&mut self, _total: usize) {}

    /// Called once per record that made it into the batch.
    fn item_done(&mut self, _path: &str, _record: &PokemonRecord) {}

    /// Called once per path that was skipped.
    fn item_failed(&mut self, _path: &str, _error: &Error) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
