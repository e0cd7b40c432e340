//! Summary sheet loading with fixed header assignment.

use std::path::Path;

use polars::prelude::{Column, DataFrame};
use tracing::{debug, warn};

use outage_common::string_column;
use outage_model::RAW_COLUMNS;

use super::header::{HeaderRow, detect_header_row, normalize_header};
use crate::error::{IngestError, Result};

/// Default header row: the DOE sheets carry two banner rows above the header.
pub const DEFAULT_HEADER_ROW: usize = 2;

/// Options for loading one summary file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Where the source header row sits.
    pub header_row: HeaderRow,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header_row(mut self, header_row: HeaderRow) -> Self {
        self.header_row = header_row;
        self
    }
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn read_records(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(rows)
}

/// Header width with trailing empty cells ignored.
fn header_width(header: &[String]) -> usize {
    header
        .iter()
        .rposition(|cell| !normalize_header(cell).is_empty())
        .map_or(0, |idx| idx + 1)
}

/// Loads one annual summary CSV export.
///
/// Records before the header row are skipped, and the source header text is
/// replaced positionally with [`RAW_COLUMNS`]. Blank records are dropped,
/// short records are padded with nulls, and empty cells become nulls. All
/// columns are strings.
///
/// # Errors
///
/// Fails when the file cannot be parsed, when the header row cannot be found,
/// or when the header width differs from the fixed schema.
pub fn load_summary_csv(path: &Path, options: &LoadOptions) -> Result<DataFrame> {
    let records = read_records(path)?;
    let header_index = match options.header_row {
        HeaderRow::Fixed(index) => index,
        HeaderRow::Auto => {
            detect_header_row(&records).ok_or_else(|| IngestError::NoHeaderDetected {
                path: path.to_path_buf(),
            })?
        }
    };
    let header = records
        .get(header_index)
        .ok_or_else(|| IngestError::MissingHeaderRow {
            path: path.to_path_buf(),
            header_row: header_index,
        })?;
    let found = header_width(header);
    if found != RAW_COLUMNS.len() {
        return Err(IngestError::ColumnCountMismatch {
            path: path.to_path_buf(),
            found,
            expected: RAW_COLUMNS.len(),
        });
    }
    for (source, target) in header.iter().zip(RAW_COLUMNS) {
        let source = normalize_header(source);
        if !source.eq_ignore_ascii_case(target) {
            debug!(path = %path.display(), source = %source, column = target, "renaming source header");
        }
    }

    let mut values: Vec<Vec<Option<String>>> = vec![Vec::new(); RAW_COLUMNS.len()];
    let mut skipped = 0usize;
    for record in records.iter().skip(header_index + 1) {
        if record.iter().all(|cell| cell.trim().is_empty()) {
            skipped += 1;
            continue;
        }
        if record.len() > RAW_COLUMNS.len()
            && record[RAW_COLUMNS.len()..]
                .iter()
                .any(|cell| !cell.trim().is_empty())
        {
            warn!(path = %path.display(), "dropping cells beyond the report schema");
        }
        for (idx, column) in values.iter_mut().enumerate() {
            column.push(record.get(idx).and_then(|cell| normalize_cell(cell)));
        }
    }

    let columns: Vec<Column> = RAW_COLUMNS
        .iter()
        .zip(values)
        .map(|(name, column)| string_column(name, column))
        .collect();
    let df = DataFrame::new(columns)?;
    debug!(
        path = %path.display(),
        rows = df.height(),
        blank_rows = skipped,
        header_row = header_index,
        "loaded summary file"
    );
    Ok(df)
}
