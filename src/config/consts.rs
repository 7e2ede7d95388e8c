// src/config/consts.rs

// Net config
pub const ORIGIN: &str = "https://serebii.net";
pub const USER_AGENT: &str = concat!("dex_scrape/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 15;

// Listing page
pub const INDEX_PATH: &str = "/pokedex-swsh";
pub const DETAIL_PATH_PATTERN: &str = r"^/pokedex-swsh/[a-z]+/$";

// Export
pub const DEFAULT_OUT_FILE: &str = "pokemon.json";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "dex_scrape=info";
