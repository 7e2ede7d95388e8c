// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::AppOptions,
    core::net::Fetch,
    error::Result,
    file,
    progress::Progress,
    scrape::{self, Harvest},
    specs::index,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub discovered: usize,
    pub selected: usize,
    pub harvest: Harvest,
    pub saved_to: Option<PathBuf>,
}

/// Top-level run: listing → range filter → batch → optional JSON file.
/// A listing that cannot be fetched ends the run before anything is written.
pub fn run<F: Fetch + ?Sized>(
    fetcher: &F,
    opts: &AppOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let entries = index::resolve_at(fetcher, &opts.scrape.index_path)?;
    let discovered = entries.len();

    let paths: Vec<String> = index::select(entries, &opts.scrape.range)
        .into_iter()
        .map(|e| e.path)
        .collect();
    let selected = paths.len();

    let harvest = scrape::collect_pokemon(fetcher, &paths[..], progress);

    let saved_to = if opts.export.save {
        let path = opts.export.out_path.clone();
        info!("Saving to {}", path.display());
        file::save_json(&path, &harvest.records)?;
        Some(path)
    } else {
        info!("All Pokémon retrieved! To save to JSON, use the --save flag");
        None
    };

    Ok(RunSummary { discovered, selected, harvest, saved_to })
}
