//! Canonical forms for the free-text categorical columns.
//!
//! Each normalizer maps text to text, never fails, and is idempotent.
//! Non-text cells normalize to the empty string.

use std::collections::BTreeSet;

use outage_model::columns;

/// Separators that split a NERC region cell into individual regions.
fn is_nerc_separator(ch: char) -> bool {
    matches!(ch, ',' | '/' | ';') || ch.is_whitespace()
}

/// Separators that split an event type cell into individual event labels.
fn is_event_type_separator(ch: char) -> bool {
    matches!(ch, ',' | '-' | '/')
}

/// Normalizes a NERC region cell.
///
/// Uppercases, splits on `/`, `;`, `,` and whitespace, drops empty parts and
/// repeats (first occurrence wins), and joins with `,`.
///
/// ```
/// use outage_normalization::normalize_nerc_region;
///
/// assert_eq!(normalize_nerc_region("MRO/SERC; MRO"), "MRO,SERC");
/// assert_eq!(normalize_nerc_region(" rfc "), "RFC");
/// ```
pub fn normalize_nerc_region(value: &str) -> String {
    let upper = value.to_uppercase();
    let mut seen = BTreeSet::new();
    let mut regions = Vec::new();
    for region in upper.split(is_nerc_separator) {
        if region.is_empty() || !seen.insert(region) {
            continue;
        }
        regions.push(region);
    }
    regions.join(",")
}

/// Normalizes an event type cell.
///
/// Strips leading dashes and surrounding whitespace, splits on `-`, `/` and
/// `,`, title-cases each non-empty trimmed piece, and joins with `,`.
/// Spaces inside a label are kept.
///
/// ```
/// use outage_normalization::normalize_event_type;
///
/// assert_eq!(
///     normalize_event_type("-Severe Weather-Transmission Interruption"),
///     "Severe Weather,Transmission Interruption"
/// );
/// ```
pub fn normalize_event_type(value: &str) -> String {
    value
        .trim()
        .trim_start_matches('-')
        .trim()
        .split(is_event_type_separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(",")
}

/// Normalizes an alert criteria cell: surrounding whitespace only.
pub fn normalize_alert_criteria(value: &str) -> String {
    value.trim().to_string()
}

/// Uppercases the first cased character of every word and lowercases the
/// rest. A word is a run of cased characters; anything else (digits,
/// punctuation, whitespace) starts a new word.
///
/// Characters whose uppercase spans several characters (`ß`, `ﬁ`, `ŉ`) are
/// unfolded into that expansion first, so `ßtorm` becomes `Sstorm` and the
/// result is stable under a second pass.
fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_word = false;
    for ch in unfold_multi_char_uppercase(value).chars() {
        if !is_cased(ch) {
            out.push(ch);
            in_word = false;
        } else if in_word {
            out.push(lower_char(ch));
        } else {
            out.push(upper_char(ch));
            in_word = true;
        }
    }
    out
}

fn unfold_multi_char_uppercase(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if single_char(ch.to_uppercase()).is_some() {
            out.push(ch);
        } else {
            out.extend(ch.to_uppercase().flat_map(char::to_lowercase));
        }
    }
    out
}

/// Upper, lower and titlecase letters (`ǅ` is neither upper nor lower).
fn is_cased(ch: char) -> bool {
    ch.is_uppercase()
        || ch.is_lowercase()
        || (!ch.to_uppercase().eq([ch]) && !ch.to_lowercase().eq([ch]))
}

fn upper_char(ch: char) -> char {
    single_char(ch.to_uppercase()).unwrap_or(ch)
}

/// Keeps `ch` when its lowercase spans several characters (`İ`) or would
/// uppercase to several again (`ẞ` to `ß`).
fn lower_char(ch: char) -> char {
    match single_char(ch.to_lowercase()) {
        Some(lower) if single_char(lower.to_uppercase()).is_some() => lower,
        _ => ch,
    }
}

fn single_char(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    chars.next().is_none().then_some(first)
}

/// The categorical columns the engine normalizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoricalField {
    NercRegion,
    AlertCriteria,
    EventType,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 3] = [
        CategoricalField::NercRegion,
        CategoricalField::AlertCriteria,
        CategoricalField::EventType,
    ];

    /// Raw column the field is read from.
    pub fn source_column(self) -> &'static str {
        match self {
            CategoricalField::NercRegion => columns::NERC_REGION,
            CategoricalField::AlertCriteria => columns::ALERT_CRITERIA,
            CategoricalField::EventType => columns::EVENT_TYPE,
        }
    }

    /// Normalized column the field is written to.
    pub fn target_column(self) -> &'static str {
        match self {
            CategoricalField::NercRegion => columns::NERC_REGION_NORMALIZED,
            CategoricalField::AlertCriteria => columns::ALERT_CRITERIA_NORMALIZED,
            CategoricalField::EventType => columns::EVENT_TYPE_NORMALIZED,
        }
    }

    /// Normalizes one cell; `None` (non-text) becomes the empty string.
    pub fn normalize(self, value: Option<&str>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        match self {
            CategoricalField::NercRegion => normalize_nerc_region(value),
            CategoricalField::AlertCriteria => normalize_alert_criteria(value),
            CategoricalField::EventType => normalize_event_type(value),
        }
    }
}
