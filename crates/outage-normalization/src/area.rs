//! Parsing of free-text "Area Affected" cells.
//!
//! A cell lists affected states, each optionally followed by its counties:
//!
//! ```text
//! Kentucky: Oldham County, Jefferson County; Virginia: Wise County;
//! ```
//!
//! A *state marker* is a label followed by `:`, where the label is any run of
//! characters other than `:` and `;` (so "District of Columbia" and "St.
//! Louis" are fine). Markers are found left to right without overlap. The
//! text between one marker and the next is that state's county list. A cell
//! without any marker is a single bare state.
//!
//! Parsing never fails. Malformed cells degrade to fewer, coarser pairs.

use outage_model::{AreaPair, AreaRecord};

/// A `<label>:` marker located in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StateMarker<'a> {
    /// Byte offset where the marker match begins (leading whitespace included).
    start: usize,
    /// Byte offset just past the colon and any whitespace after it.
    end: usize,
    /// Trimmed label text.
    label: &'a str,
}

/// Scans `cell` for state markers.
///
/// From the cursor, the next `:` or `;` decides the outcome. A `;` (or a `:`
/// with an empty run before it) cannot end a label, so scanning resumes just
/// past it. Otherwise the run from the cursor to the `:` is a marker and the
/// scan resumes after the marker's trailing whitespace.
fn find_state_markers(cell: &str) -> Vec<StateMarker<'_>> {
    let mut markers = Vec::new();
    let mut cursor = 0usize;
    while let Some(offset) = cell[cursor..].find([':', ';']) {
        let delimiter = cursor + offset;
        if offset == 0 || cell.as_bytes()[delimiter] == b';' {
            cursor = delimiter + 1;
            continue;
        }
        let rest = &cell[delimiter + 1..];
        let end = delimiter + 1 + (rest.len() - rest.trim_start().len());
        markers.push(StateMarker {
            start: cursor,
            end,
            label: cell[cursor..delimiter].trim(),
        });
        cursor = end;
    }
    markers
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Parses one Area Affected cell into (state, county) pairs.
///
/// Returns an empty vector for empty or whitespace-only input. A state with
/// no county list yields one pair with an absent county; otherwise one pair
/// per comma-separated county, in order.
///
/// # Examples
///
/// ```
/// use outage_model::AreaPair;
/// use outage_normalization::parse_area_affected;
///
/// assert_eq!(
///     parse_area_affected("Kentucky: Oldham County, Jefferson County; Virginia: Wise County"),
///     vec![
///         AreaPair::new(Some("Kentucky"), Some("Oldham County")),
///         AreaPair::new(Some("Kentucky"), Some("Jefferson County")),
///         AreaPair::new(Some("Virginia"), Some("Wise County")),
///     ]
/// );
/// assert_eq!(parse_area_affected("Texas"), vec![AreaPair::new(Some("Texas"), None)]);
/// assert!(parse_area_affected("").is_empty());
/// ```
pub fn parse_area_affected(cell: &str) -> Vec<AreaPair> {
    let cell = cell.trim();
    if cell.is_empty() {
        return Vec::new();
    }

    let markers = find_state_markers(cell);
    if markers.is_empty() {
        return vec![AreaPair::new(Some(cell), None)];
    }

    let mut pairs = Vec::new();
    for (idx, marker) in markers.iter().enumerate() {
        let block_end = markers.get(idx + 1).map_or(cell.len(), |next| next.start);
        let counties = cell[marker.end..block_end]
            .trim()
            .trim_end_matches([';', ',', ' '])
            .trim();
        let state = non_empty(marker.label);

        if counties.is_empty() {
            pairs.push(AreaPair {
                state,
                county: None,
            });
            continue;
        }

        for county in counties.split(',').map(str::trim) {
            if county.is_empty() {
                continue;
            }
            pairs.push(AreaPair {
                state: state.clone(),
                county: Some(county.to_string()),
            });
        }
    }
    pairs
}

/// Parses a column of Area Affected cells into row-tagged records.
///
/// Non-text cells (`None`) and cells that parse to nothing still produce one
/// record with both state and county absent, so every source row is
/// represented at least once. Records are emitted in row order.
pub fn untangle_area_affected(cells: &[Option<String>]) -> Vec<AreaRecord> {
    let mut records = Vec::with_capacity(cells.len());
    for (row_index, cell) in cells.iter().enumerate() {
        let pairs = cell.as_deref().map(parse_area_affected).unwrap_or_default();
        if pairs.is_empty() {
            records.push(AreaRecord::new(row_index, AreaPair::empty()));
            continue;
        }
        records.extend(
            pairs
                .into_iter()
                .map(|pair| AreaRecord::new(row_index, pair)),
        );
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cell: &str) -> Vec<&str> {
        find_state_markers(cell)
            .into_iter()
            .map(|marker| marker.label)
            .collect()
    }

    #[test]
    fn markers_are_found_left_to_right() {
        assert_eq!(
            labels("Kentucky: Oldham County; Virginia: Wise County"),
            vec!["Kentucky", "Virginia"]
        );
    }

    #[test]
    fn marker_span_excludes_semicolon_segments() {
        let cell = "Kentucky: Oldham County; Virginia: Wise County";
        let markers = find_state_markers(cell);
        assert_eq!(markers[0].start, 0);
        assert_eq!(&cell[markers[0].end..markers[1].start], "Oldham County;");
        assert_eq!(&cell[markers[1].end..], "Wise County");
    }

    #[test]
    fn leading_colon_is_not_a_marker() {
        assert_eq!(
            parse_area_affected(": Harris County"),
            vec![AreaPair::new(Some(": Harris County"), None)]
        );
        assert!(find_state_markers(":Texas").is_empty());
        assert_eq!(labels("::Ohio: Franklin"), vec!["Ohio"]);
    }

    #[test]
    fn labels_keep_spaces_and_periods() {
        assert_eq!(
            labels("District of Columbia: Washington; St. Croix: Frederiksted"),
            vec!["District of Columbia", "St. Croix"]
        );
    }

    #[test]
    fn label_without_semicolon_absorbs_previous_counties() {
        // Without a `;` the next label runs back to the previous marker.
        assert_eq!(
            labels("Kentucky: Oldham County Virginia: Wise County"),
            vec!["Kentucky", "Oldham County Virginia"]
        );
    }

    #[test]
    fn blank_label_parses_to_absent_state() {
        assert_eq!(
            parse_area_affected("Ohio; \t: Harris County"),
            vec![AreaPair::new(None, Some("Harris County"))]
        );
    }

    #[test]
    fn untangle_tags_rows() {
        let cells = vec![
            Some("Texas: Harris County, Dallas County".to_string()),
            None,
            Some("Ohio".to_string()),
        ];
        let records = untangle_area_affected(&cells);
        let rows: Vec<usize> = records.iter().map(|record| record.row_index).collect();
        assert_eq!(rows, vec![0, 0, 1, 2]);
        assert_eq!(records[2].area, AreaPair::empty());
        assert_eq!(records[3].state(), Some("Ohio"));
        assert_eq!(records[3].county(), None);
    }
}
