// src/cli.rs
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::{info, warn};

use crate::config::consts::{DEFAULT_OUT_FILE, TIMEOUT_SECS};
use crate::config::options::{AppOptions, DexRange, ExportOptions, ScrapeOptions};
use crate::console;
use crate::core::net::HttpFetcher;
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::record::PokemonRecord;

/// A Pokémon web scraper
#[derive(Parser, Debug)]
#[command(name = "dex_scrape", version, about)]
pub struct Args {
    /// Save the output to JSON
    #[arg(short, long)]
    pub save: bool,

    /// Galar Pokédex number of the first Pokémon to retrieve (the listing's
    /// own numbering, not the National number shown in each record)
    #[arg(short, long)]
    pub first: Option<u32>,

    /// Galar Pokédex number of the last Pokémon to retrieve
    #[arg(short, long)]
    pub last: Option<u32>,

    /// Print the Pokémon's statistics to console
    #[arg(short, long)]
    pub verbose: bool,

    /// Where --save writes the JSON array
    #[arg(short, long, default_value = DEFAULT_OUT_FILE)]
    pub out: PathBuf,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = TIMEOUT_SECS)]
    pub timeout: u64,
}

impl Args {
    pub fn into_options(self) -> Result<AppOptions> {
        let range = DexRange::new(self.first, self.last).map_err(Error::Config)?;
        Ok(AppOptions {
            scrape: ScrapeOptions {
                range,
                timeout: Duration::from_secs(self.timeout),
                ..ScrapeOptions::default()
            },
            export: ExportOptions {
                save: self.save,
                verbose: self.verbose,
                out_path: self.out,
            },
        })
    }
}

/// Echoes each record to stdout as the batch finds it.
pub struct ConsoleProgress<W: Write> {
    echo: bool,
    out: W,
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(echo: bool, out: W) -> Self {
        Self { echo, out }
    }
}

impl<W: Write> Progress for ConsoleProgress<W> {
    fn begin(&mut self, total: usize) {
        info!("Scraping {total} pages");
    }

    fn item_done(&mut self, _path: &str, record: &PokemonRecord) {
        if !self.echo { return; }
        if let Err(e) = console::print_record(&mut self.out, record) {
            warn!("Could not print {}: {e}", record.name);
        }
    }

    fn finish(&mut self) {
        if let Err(e) = self.out.flush() {
            warn!("Could not flush console output: {e}");
        }
    }
}

pub fn run() -> Result<()> {
    let opts = Args::parse().into_options()?;
    crate::log::init();

    let fetcher = HttpFetcher::from_options(&opts.scrape)?;
    let mut progress = ConsoleProgress::new(opts.export.echo(), io::stdout().lock());

    let summary = crate::runner::run(&fetcher, &opts, Some(&mut progress))?;
    info!(
        "Done: {} listed, {} selected, {} added, {} skipped",
        summary.discovered,
        summary.selected,
        summary.harvest.records.len(),
        summary.harvest.skipped.len()
    );
    Ok(())
}
