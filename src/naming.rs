//! Centralized filename and line parsing for the content conventions.
//!
//! Ordering and titles live in filenames, so every collection in the content
//! root goes through one of the parsers here:
//!
//! - `Despegables/Des<N>-<Title>.txt` → [`parse_section_file`]
//! - `Botones/<Group>/<N>.<Title>.txt` → [`parse_button_file`]
//! - `text <url>` lines (section items, buttons, social links) → [`split_link`]
//!
//! A name that does not match its pattern yields `None`; callers skip it.

use regex::Regex;
use std::sync::LazyLock;

static SECTION_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Des([0-9]+)-(.+)\.txt$").expect("Invalid section file regex"));

static BUTTON_FILE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.(.+)\.txt$").expect("Invalid button file regex"));

static LINK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*<([^>]+)>\s*$").expect("Invalid link line regex"));

/// Result of parsing an ordered filename like `Des2-Cobertura Nacional.txt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Sort key taken from the numeric part of the name.
    pub number: u32,
    /// Title part of the name, trimmed.
    pub title: String,
}

/// Parse an accordion section filename: `Des<N>-<Title>.txt`.
///
/// - `"Des1-Cobertura.txt"` → number=1, title="Cobertura"
/// - `"Des10-Red vial nacional.txt"` → number=10, title="Red vial nacional"
/// - `"Des-Sin numero.txt"` → None
pub fn parse_section_file(file_name: &str) -> Option<ParsedName> {
    parse_with(&SECTION_FILE, file_name)
}

/// Parse an indicator button filename: `<N>.<Title>.txt`.
///
/// - `"1.Fallecidos.txt"` → number=1, title="Fallecidos"
/// - `"2.Tasa.por.100k.txt"` → number=2, title="Tasa.por.100k"
/// - `"Pie.txt"` → None
pub fn parse_button_file(file_name: &str) -> Option<ParsedName> {
    parse_with(&BUTTON_FILE, file_name)
}

fn parse_with(pattern: &Regex, file_name: &str) -> Option<ParsedName> {
    let caps = pattern.captures(file_name)?;
    let number = caps[1].parse::<u32>().ok()?;
    Some(ParsedName {
        number,
        title: caps[2].trim().to_string(),
    })
}

/// Split a `text <url>` line into its text and optional url.
///
/// The url is the last `<...>` group at the end of the line. Lines without one
/// come back unchanged with `None`.
///
/// - `"Portal <https://x.pe>"` → ("Portal", Some("https://x.pe"))
/// - `"Solo texto"` → ("Solo texto", None)
pub fn split_link(line: &str) -> (String, Option<String>) {
    match LINK_LINE.captures(line) {
        Some(caps) => (
            caps[1].trim().to_string(),
            Some(caps[2].trim().to_string()),
        ),
        None => (line.to_string(), None),
    }
}
