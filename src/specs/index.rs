// src/specs/index.rs
//! Listing page spec.
//!
//! The Sword/Shield pokedex page carries `<select>` jump menus whose
//! `<option value="/pokedex-swsh/<name>/">NNN Name</option>` entries point at
//! every detail page. The same option shows up in several menus, so values are
//! collapsed to one entry each.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::config::consts::{DETAIL_PATH_PATTERN, INDEX_PATH};
use crate::config::options::DexRange;
use crate::core::html::{selector, text};
use crate::core::net::Fetch;
use crate::core::sanitize::leading_number;
use crate::error::FetchError;

static OPTION: LazyLock<Selector> = LazyLock::new(|| selector("option[value]"));
static DETAIL_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DETAIL_PATH_PATTERN).unwrap_or_else(|e| panic!("bad detail pattern: {e}"))
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// Site-relative detail path, e.g. `/pokedex-swsh/hitmontop/`.
    pub path: String,
    /// Leading number of the option label, if it has one.
    pub number: Option<u32>,
}

/// Fetch the listing page and read its detail paths.
pub fn resolve<F: Fetch + ?Sized>(fetcher: &F) -> Result<Vec<IndexEntry>, FetchError> {
    resolve_at(fetcher, INDEX_PATH)
}

pub fn resolve_at<F: Fetch + ?Sized>(fetcher: &F, index_path: &str) -> Result<Vec<IndexEntry>, FetchError> {
    let body = fetcher.fetch(index_path)?;
    let entries = parse_index(&Html::parse_document(&body));
    info!("Found {} detail pages on {}", entries.len(), index_path);
    Ok(entries)
}

/// Distinct detail entries, ordered by (number, path). Unnumbered entries sort last.
pub fn parse_index(doc: &Html) -> Vec<IndexEntry> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for opt in doc.select(&OPTION) {
        let Some(value) = opt.value().attr("value") else { continue };
        if !DETAIL_PATH.is_match(value) { continue; }
        if !seen.insert(s!(value)) { continue; }

        out.push(IndexEntry {
            path: s!(value),
            number: leading_number(&text(opt)),
        });
    }

    out.sort_by(|a, b| {
        let key = |e: &IndexEntry| (e.number.is_none(), e.number);
        key(a).cmp(&key(b)).then_with(|| a.path.cmp(&b.path))
    });
    out
}

/// Keep the entries whose number falls in `range`.
pub fn select(entries: Vec<IndexEntry>, range: &DexRange) -> Vec<IndexEntry> {
    if range.is_unbounded() {
        return entries;
    }
    let before = entries.len();
    let kept: Vec<IndexEntry> = entries
        .into_iter()
        .filter(|e| {
            let ok = range.admits(e.number);
            if !ok && e.number.is_none() {
                debug!("Dropping unnumbered entry {} from ranged run", e.path);
            }
            ok
        })
        .collect();
    info!("Range {:?}..={:?} keeps {} of {} pages", range.first, range.last, kept.len(), before);
    kept
}
