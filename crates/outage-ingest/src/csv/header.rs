//! Header row location and header text normalization.

use outage_model::columns::{AREA_AFFECTED, NERC_REGION};

/// How many leading records are searched when detecting the header row.
const HEADER_SCAN_ROWS: usize = 10;

/// Location of the source header row within a summary file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRow {
    /// Zero-based record index of the header row.
    Fixed(usize),
    /// Locate the header row by its content.
    Auto,
}

impl Default for HeaderRow {
    fn default() -> Self {
        HeaderRow::Fixed(super::DEFAULT_HEADER_ROW)
    }
}

/// Normalizes header text: strips a BOM, trims, and collapses internal
/// whitespace (including line breaks) to single spaces.
///
/// # Examples
///
/// ```
/// use outage_ingest::normalize_header;
///
/// assert_eq!(normalize_header("  NERC\nRegion "), "NERC Region");
/// assert_eq!(normalize_header("\u{feff}Event Month"), "Event Month");
/// ```
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn header_key(raw: &str) -> String {
    normalize_header(raw).to_lowercase()
}

fn is_header_like(row: &[String]) -> bool {
    let keys: Vec<String> = row.iter().map(|cell| header_key(cell)).collect();
    let area = AREA_AFFECTED.to_lowercase();
    let nerc = NERC_REGION.to_lowercase();
    keys.iter().any(|key| *key == area) && keys.iter().any(|key| *key == nerc)
}

/// Finds the first record among the leading rows that names both the
/// Area Affected and NERC Region columns.
pub fn detect_header_row(rows: &[Vec<String>]) -> Option<usize> {
    rows.iter()
        .take(HEADER_SCAN_ROWS)
        .position(|row| is_header_like(row))
}
