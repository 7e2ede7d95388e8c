// src/console.rs
use std::io::{self, Write};

use crate::record::PokemonRecord;

/// Ten labelled lines, one per field, multi-value fields space-joined.
pub fn print_record<W: Write>(out: &mut W, p: &PokemonRecord) -> io::Result<()> {
    writeln!(out, "Name\t\t {}", p.name)?;
    writeln!(out, "Number\t\t {}", p.number)?;
    writeln!(out, "Classification\t {}", p.classification)?;
    writeln!(out, "Height\t\t {}", p.height.join(" "))?;
    writeln!(out, "Weight\t\t {}", p.weight.join(" "))?;
    writeln!(out, "HP\t\t {}", p.hit_points)?;
    writeln!(out, "Attack\t\t {}", p.attack)?;
    writeln!(out, "Defense\t\t {}", p.defense)?;
    writeln!(out, "Special\t\t {}", p.special)?;
    writeln!(out, "Speed\t\t {}", p.speed)?;
    Ok(())
}

pub fn format_record(p: &PokemonRecord) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = print_record(&mut buf, p);
    String::from_utf8_lossy(&buf).into_owned()
}
