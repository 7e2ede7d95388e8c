// src/file.rs

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::Path,
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::SinkError;
use crate::record::PokemonRecord;

const JSON_INDENT: &[u8] = b"    ";

/// Write the whole batch as one pretty-printed JSON array, replacing whatever
/// was at `path`.
pub fn save_json(path: &Path, records: &[PokemonRecord]) -> Result<(), SinkError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
    records.serialize(&mut ser)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

/// Read back an array written by `save_json`.
pub fn load_json(path: &Path) -> Result<Vec<PokemonRecord>, SinkError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

pub fn ensure_directory(dir: &Path) -> Result<(), SinkError> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
