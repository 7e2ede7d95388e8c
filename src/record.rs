// src/record.rs
use serde::{Deserialize, Serialize};

/// One species entry as read off its detail page.
///
/// Field order is the JSON key order and the console line order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    pub name: String,
    /// Kept as text; the site may pad or prefix it.
    pub number: String,
    pub classification: String,
    pub height: Vec<String>,
    pub weight: Vec<String>,
    pub hit_points: u32,
    pub attack: u32,
    pub defense: u32,
    pub special: u32,
    pub speed: u32,
}
