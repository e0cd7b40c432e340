//! Table-level normalization.
//!
//! [`normalize_outages`] explodes each report row into one row per affected
//! (state, county), attaches the canonical categorical columns and combined
//! timestamps, and projects the result onto [`NORMALIZED_COLUMNS`].

use chrono::NaiveDateTime;
use polars::prelude::{DataFrame, IdxCa, IdxSize};
use tracing::{debug, info_span, warn};

use outage_common::{column_text_values, string_column};
use outage_model::columns::{
    AREA_AFFECTED, COUNTY, DATE_EVENT_BEGAN, DATE_OF_RESTORATION, EVENT_END, EVENT_START, STATE,
    TIME_EVENT_BEGAN, TIME_OF_RESTORATION,
};
use outage_model::{AreaRecord, NORMALIZED_COLUMNS, RAW_COLUMNS};

use crate::area::untangle_area_affected;
use crate::categorical::CategoricalField;
use crate::error::{NormalizationError, Result};
use crate::timestamp::{combine_date_time, format_timestamp};

/// Counters collected during one normalization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizationStats {
    /// Rows in the raw table.
    pub input_rows: usize,
    /// Rows in the normalized table.
    pub output_rows: usize,
    /// Output rows with neither a state nor a county.
    pub rows_without_area: usize,
    /// Source rows whose event start could not be parsed.
    pub unparsed_starts: usize,
    /// Source rows whose event end could not be parsed.
    pub unparsed_ends: usize,
}

/// A normalized table together with the counters from producing it.
#[derive(Debug, Clone)]
pub struct NormalizationOutcome {
    pub frame: DataFrame,
    pub stats: NormalizationStats,
}

/// Normalizes a raw report table.
///
/// The input is borrowed and left untouched. An empty table yields an empty
/// table with the normalized schema.
///
/// # Errors
///
/// Returns [`NormalizationError::MissingColumn`] when a non-empty table lacks
/// one of [`RAW_COLUMNS`].
pub fn normalize_outages(raw: &DataFrame) -> Result<DataFrame> {
    normalize_outages_with_stats(raw).map(|outcome| outcome.frame)
}

/// Like [`normalize_outages`], also returning [`NormalizationStats`].
pub fn normalize_outages_with_stats(raw: &DataFrame) -> Result<NormalizationOutcome> {
    let span = info_span!("normalize_outages", rows = raw.height());
    let _guard = span.enter();

    if raw.height() == 0 {
        debug!("empty report table, nothing to normalize");
        return Ok(NormalizationOutcome {
            frame: empty_normalized_frame()?,
            stats: NormalizationStats::default(),
        });
    }
    require_raw_columns(raw)?;

    let records = untangle_area_affected(&column_text_values(raw, AREA_AFFECTED)?);
    let rows_without_area = records
        .iter()
        .filter(|record| record.area.state.is_none() && record.area.county.is_none())
        .count();

    let starts = combine_date_time(
        &column_text_values(raw, DATE_EVENT_BEGAN)?,
        &column_text_values(raw, TIME_EVENT_BEGAN)?,
    );
    let ends = combine_date_time(
        &column_text_values(raw, DATE_OF_RESTORATION)?,
        &column_text_values(raw, TIME_OF_RESTORATION)?,
    );
    let stats = NormalizationStats {
        input_rows: raw.height(),
        output_rows: records.len(),
        rows_without_area,
        unparsed_starts: starts.iter().filter(|value| value.is_none()).count(),
        unparsed_ends: ends.iter().filter(|value| value.is_none()).count(),
    };

    let indices: Vec<IdxSize> = records
        .iter()
        .map(|record| record.row_index as IdxSize)
        .collect();
    let mut expanded = raw.take(&IdxCa::from_vec("row_index".into(), indices))?;

    expanded.with_column(string_column(
        STATE,
        records.iter().map(|record| record.area.state.clone()).collect(),
    ))?;
    expanded.with_column(string_column(
        COUNTY,
        records.iter().map(|record| record.area.county.clone()).collect(),
    ))?;
    expanded.with_column(string_column(
        EVENT_START,
        expand_timestamps(&starts, &records),
    ))?;
    expanded.with_column(string_column(EVENT_END, expand_timestamps(&ends, &records)))?;

    for field in CategoricalField::ALL {
        let normalized: Vec<String> = column_text_values(raw, field.source_column())?
            .iter()
            .map(|cell| field.normalize(cell.as_deref()))
            .collect();
        expanded.with_column(string_column(
            field.target_column(),
            records
                .iter()
                .map(|record| Some(normalized[record.row_index].clone()))
                .collect(),
        ))?;
    }

    let frame = expanded.select(NORMALIZED_COLUMNS)?;

    if stats.unparsed_starts > 0 || stats.unparsed_ends > 0 {
        warn!(
            unparsed_starts = stats.unparsed_starts,
            unparsed_ends = stats.unparsed_ends,
            "some event timestamps could not be parsed"
        );
    }
    debug!(
        input_rows = stats.input_rows,
        output_rows = stats.output_rows,
        rows_without_area = stats.rows_without_area,
        "normalized report table"
    );

    Ok(NormalizationOutcome { frame, stats })
}

fn require_raw_columns(raw: &DataFrame) -> Result<()> {
    for column in RAW_COLUMNS {
        if raw.column(column).is_err() {
            return Err(NormalizationError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn expand_timestamps(
    values: &[Option<NaiveDateTime>],
    records: &[AreaRecord],
) -> Vec<Option<String>> {
    records
        .iter()
        .map(|record| values[record.row_index].as_ref().map(format_timestamp))
        .collect()
}

fn empty_normalized_frame() -> Result<DataFrame> {
    let columns = NORMALIZED_COLUMNS
        .iter()
        .map(|name| string_column(name, Vec::new()))
        .collect();
    Ok(DataFrame::new(columns)?)
}
