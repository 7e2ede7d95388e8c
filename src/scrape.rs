// src/scrape.rs
// Sequential batch: fetch, parse, extract, one path at a time.

use tracing::{error, info};

use crate::{
    core::net::Fetch,
    error::Error,
    progress::Progress,
    record::PokemonRecord,
    specs::pokemon,
};

/// A path that produced no record, and why.
#[derive(Debug)]
pub struct Skipped {
    pub path: String,
    pub error: Error,
}

/// Everything one batch produced. `records` is in processing order.
#[derive(Debug, Default)]
pub struct Harvest {
    pub records: Vec<PokemonRecord>,
    pub skipped: Vec<Skipped>,
}

/// Fetch and extract every path. A failing path is logged, reported and
/// skipped; it never stops the batch.
pub fn collect_pokemon<F, S>(
    fetcher: &F,
    paths: &[S],
    mut progress: Option<&mut dyn Progress>,
) -> Harvest
where
    F: Fetch + ?Sized,
    S: AsRef<str>,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(paths.len());
    }

    let mut harvest = Harvest::default();

    for path in paths {
        let path = path.as_ref();
        info!("Extracting data from {path}");

        let record = match scrape_one(fetcher, path) {
            Ok(record) => record,
            Err(e) => {
                error!("Skipping pokemon with url {path}: {e}");
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(path, &e);
                }
                harvest.skipped.push(Skipped { path: s!(path), error: e });
                continue;
            }
        };

        info!("Adding {} {} to dataset", record.number, record.name);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(path, &record);
        }
        harvest.records.push(record);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    harvest
}

fn scrape_one<F: Fetch + ?Sized>(fetcher: &F, path: &str) -> Result<PokemonRecord, Error> {
    let body = fetcher.fetch(path)?;
    Ok(pokemon::parse_page(&body)?)
}
