// src/core/sanitize.rs

/// Separator the site puts between the imperial and metric measures in one cell.
pub const MEASURE_DELIMITER: &str = "\r\n\t\t\t";

/// Split a height/weight cell into its ordered text segments.
///
/// HTML parsers turn CRLF into LF, so the delimiter is matched in that form too.
/// Segments are trimmed and blanks dropped.
pub fn split_measures(s: &str) -> Vec<String> {
    let normalized = s.replace("\r\n", "\n");
    let delim = MEASURE_DELIMITER.replace("\r\n", "\n");
    normalized
        .split(delim.as_str())
        .map(normalize_ws)
        .filter(|seg| !seg.is_empty())
        .collect()
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Leading run of ASCII digits, e.g. "237 Hitmontop" → 237.
pub fn leading_number(s: &str) -> Option<u32> {
    let s = s.trim_start().trim_start_matches('#');
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}
