// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read **one page shape** on serebii.net and nothing else:
//! where the ground truth lives in the markup and how to pull it out.
//!
//! ## What lives here
//! - Pure HTML reading over a parsed `scraper::Html`.
//! - The selectors, class names and cell positions the site currently uses.
//!   When the layout drifts, this is the only directory that should change.
//!
//! ## What does **not** live here
//! - Batching, skipping and progress (`scrape`).
//! - Console or JSON output (`console`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner → specs::index::resolve  → Vec<IndexEntry>
//!        → scrape::collect_pokemon → specs::pokemon::parse_page (per path)
//! ```
//!
//! ## Testing notes
//! Both specs are testable offline against the saved pages in `tests/fixtures/`.
pub mod index;
pub mod pokemon;
