// src/specs/pokemon.rs
//! Detail page spec.
//!
//! Everything is read by position out of the site's `dextable` layout:
//!
//! - the **second** `table.dextable` holds the identity block; its
//!   `td.fooinfo` cells are, in order, name (0), other names (1), a nested
//!   number table (2), gender (3), classification (4), height (5), weight (6);
//! - the stats block is the row whose label cell reads
//!   `Base Stats - Total: NNN`. Its `fooinfo` cells are the total (0) followed
//!   by the five stats (1..=5).
//!
//! Class attributes are matched exactly (`[class="…"]`), so a cell carrying an
//! extra class is not counted. Any gap fails the whole page.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::core::html::{parent_element, raw_text, selector, text};
use crate::core::sanitize::{normalize_ws, split_measures};
use crate::error::ExtractionError;
use crate::record::PokemonRecord;

static DEXTABLE: LazyLock<Selector> = LazyLock::new(|| selector(r#"table[class="dextable"]"#));
static FOOINFO: LazyLock<Selector> = LazyLock::new(|| selector(r#"td[class="fooinfo"]"#));
static TD: LazyLock<Selector> = LazyLock::new(|| selector("td"));
static STATS_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Base Stats - Total:").unwrap_or_else(|e| panic!("bad stats pattern: {e}"))
});

const IDENTITY_TABLE: usize = 1;

const NAME: usize = 0;
const NUMBER: usize = 2;
const CLASSIFICATION: usize = 4;
const HEIGHT: usize = 5;
const WEIGHT: usize = 6;

/// Cell within the nested number table that holds the number itself.
const NUMBER_INNER: usize = 1;

const STAT_FIELDS: [&str; 5] = ["hit_points", "attack", "defense", "special", "speed"];

/// Parse a page body and extract its record.
pub fn parse_page(body: &str) -> Result<PokemonRecord, ExtractionError> {
    extract(&Html::parse_document(body))
}

pub fn extract(doc: &Html) -> Result<PokemonRecord, ExtractionError> {
    let tables: Vec<ElementRef> = doc.select(&DEXTABLE).collect();
    let identity = tables.get(IDENTITY_TABLE).ok_or(ExtractionError::MissingTables {
        expected: IDENTITY_TABLE + 1,
        found: tables.len(),
    })?;
    let info: Vec<ElementRef> = identity.select(&FOOINFO).collect();

    let name = required_text(cell(&info, NAME, "name")?, "name")?;

    let number_cells: Vec<ElementRef> = cell(&info, NUMBER, "number")?.select(&TD).collect();
    let number = required_text(cell(&number_cells, NUMBER_INNER, "number")?, "number")?;

    let classification = normalize_ws(&raw_text(cell(&info, CLASSIFICATION, "classification")?));
    if classification.is_empty() {
        return Err(ExtractionError::EmptyField { field: "classification" });
    }

    let height = measures(cell(&info, HEIGHT, "height")?, "height")?;
    let weight = measures(cell(&info, WEIGHT, "weight")?, "weight")?;

    let [hit_points, attack, defense, special, speed] = base_stats(doc)?;

    Ok(PokemonRecord {
        name,
        number,
        classification,
        height,
        weight,
        hit_points,
        attack,
        defense,
        special,
        speed,
    })
}

fn cell<'a>(
    cells: &[ElementRef<'a>],
    index: usize,
    field: &'static str,
) -> Result<ElementRef<'a>, ExtractionError> {
    cells.get(index).copied().ok_or(ExtractionError::MissingCell { field, index })
}

fn required_text(el: ElementRef<'_>, field: &'static str) -> Result<String, ExtractionError> {
    let t = text(el);
    if t.is_empty() {
        return Err(ExtractionError::EmptyField { field });
    }
    Ok(t)
}

fn measures(el: ElementRef<'_>, field: &'static str) -> Result<Vec<String>, ExtractionError> {
    let segs = split_measures(&raw_text(el));
    if segs.is_empty() {
        return Err(ExtractionError::EmptyField { field });
    }
    Ok(segs)
}

/// The label cell is the innermost `td` mentioning the total; outer layout
/// cells that merely contain it are skipped.
fn stats_label<'a>(doc: &'a Html) -> Option<ElementRef<'a>> {
    doc.select(&TD)
        .filter(|td| td.select(&TD).next().is_none())
        .find(|td| STATS_LABEL.is_match(&raw_text(*td)))
}

fn base_stats(doc: &Html) -> Result<[u32; 5], ExtractionError> {
    let label = stats_label(doc).ok_or(ExtractionError::MissingStatsRow)?;
    let row = parent_element(label).ok_or(ExtractionError::MissingStatsRow)?;
    let cells: Vec<ElementRef> = row.select(&FOOINFO).collect();

    let mut stats = [0u32; 5];
    for (i, &field) in STAT_FIELDS.iter().enumerate() {
        let raw = text(cell(&cells, i + 1, field)?);
        stats[i] = raw
            .parse()
            .map_err(|_| ExtractionError::InvalidStat { field, text: raw.clone() })?;
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER_TABLE: &str = r#"<table class="dextable"><tr><td class="fooevo">Picture</td></tr></table>"#;

    fn identity_table(cells: &[&str]) -> String {
        let tds: String = cells.iter().map(|c| format!(r#"<td class="fooinfo">{c}</td>"#)).collect();
        format!(r#"<table class="dextable"><tr>{tds}</tr></table>"#)
    }

    fn stats_table(label: &str, values: &[&str]) -> String {
        let tds: String = values.iter().map(|v| format!(r#"<td class="fooinfo">{v}</td>"#)).collect();
        format!(r#"<table class="dextable"><tr><td class="fooinfo">{label}</td>{tds}</tr></table>"#)
    }

    const NUMBER_CELL: &str = "<table><tr><td>National</td><td>#237</td></tr></table>";

    fn good_identity() -> String {
        identity_table(&[
            "Hitmontop",
            "Kapoerer",
            NUMBER_CELL,
            "Male",
            "Handstand Pokémon",
            "4'07\"\n\t\t\t1.4m",
            "105.8lbs\n\t\t\t48kg",
        ])
    }

    fn good_stats() -> String {
        stats_table("Base Stats - Total: 455", &["50", "95", "95", "35", "110", "70"])
    }

    fn doc(parts: &[&str]) -> Html {
        Html::parse_document(&format!("<html><body>{}</body></html>", parts.concat()))
    }

    #[test]
    fn extracts_full_record() {
        let d = doc(&[HEADER_TABLE, &good_identity(), &good_stats()]);
        let rec = extract(&d).unwrap();
        assert_eq!(rec.name, "Hitmontop");
        assert_eq!(rec.number, "#237");
        assert_eq!(rec.classification, "Handstand Pokémon");
        assert_eq!(rec.height, vec!["4'07\"", "1.4m"]);
        assert_eq!(rec.weight, vec!["105.8lbs", "48kg"]);
        assert_eq!(
            (rec.hit_points, rec.attack, rec.defense, rec.special, rec.speed),
            (50, 95, 95, 35, 110)
        );
    }

    #[test]
    fn one_table_is_not_enough() {
        let d = doc(&[&good_identity(), &good_stats()]);
        // The stats table lands at index 1; its third cell has no nested number table.
        assert_eq!(
            extract(&d).unwrap_err(),
            ExtractionError::MissingCell { field: "number", index: 1 }
        );

        let d = doc(&[HEADER_TABLE]);
        assert_eq!(
            extract(&d).unwrap_err(),
            ExtractionError::MissingTables { expected: 2, found: 1 }
        );
    }

    #[test]
    fn short_identity_block_names_the_missing_cell() {
        let short = identity_table(&["Hitmontop", "Kapoerer", NUMBER_CELL, "Male", "Handstand Pokémon", "1.4m"]);
        let d = doc(&[HEADER_TABLE, &short, &good_stats()]);
        assert_eq!(
            extract(&d).unwrap_err(),
            ExtractionError::MissingCell { field: "weight", index: 6 }
        );
    }

    #[test]
    fn number_table_needs_two_cells() {
        let ident = identity_table(&[
            "Hitmontop", "", "<table><tr><td>#237</td></tr></table>", "", "Handstand Pokémon", "1.4m", "48kg",
        ]);
        let d = doc(&[HEADER_TABLE, &ident, &good_stats()]);
        assert_eq!(
            extract(&d).unwrap_err(),
            ExtractionError::MissingCell { field: "number", index: 1 }
        );
    }

    #[test]
    fn blank_name_is_rejected() {
        let ident = identity_table(&["  ", "", NUMBER_CELL, "", "Handstand Pokémon", "1.4m", "48kg"]);
        let d = doc(&[HEADER_TABLE, &ident, &good_stats()]);
        assert_eq!(extract(&d).unwrap_err(), ExtractionError::EmptyField { field: "name" });
    }

    #[test]
    fn missing_stats_row() {
        let d = doc(&[HEADER_TABLE, &good_identity()]);
        assert_eq!(extract(&d).unwrap_err(), ExtractionError::MissingStatsRow);
    }

    #[test]
    fn non_numeric_stat() {
        let stats = stats_table("Base Stats - Total: 455", &["50", "??", "95", "35", "110", "70"]);
        let d = doc(&[HEADER_TABLE, &good_identity(), &stats]);
        assert_eq!(
            extract(&d).unwrap_err(),
            ExtractionError::InvalidStat { field: "attack", text: s!("??") }
        );
    }

    #[test]
    fn negative_stat_is_invalid() {
        let stats = stats_table("Base Stats - Total: 455", &["-50", "95", "95", "35", "110"]);
        let d = doc(&[HEADER_TABLE, &good_identity(), &stats]);
        assert!(matches!(
            extract(&d).unwrap_err(),
            ExtractionError::InvalidStat { field: "hit_points", .. }
        ));
    }

    #[test]
    fn short_stats_row() {
        let stats = stats_table("Base Stats - Total: 455", &["50", "95", "95"]);
        let d = doc(&[HEADER_TABLE, &good_identity(), &stats]);
        assert_eq!(
            extract(&d).unwrap_err(),
            ExtractionError::MissingCell { field: "special", index: 4 }
        );
    }

    #[test]
    fn stats_label_inside_layout_table() {
        // The label sits deep inside an outer layout cell that also "contains" the text.
        let wrapped = format!(r#"<table><tr><td>{}</td></tr></table>"#, good_stats());
        let d = doc(&[HEADER_TABLE, &good_identity(), &wrapped]);
        assert_eq!(extract(&d).unwrap().speed, 110);
    }

    #[test]
    fn extra_class_is_not_fooinfo() {
        let ident = good_identity().replacen(r#"<td class="fooinfo">Hitmontop"#, r#"<td class="fooinfo bold">Hitmontop"#, 1);
        let d = doc(&[HEADER_TABLE, &ident, &good_stats()]);
        // Every identity cell shifts down by one.
        assert!(extract(&d).is_err());
    }
}
