//! Column name cleanup for loaded report tables.

use polars::prelude::{Column, DataFrame};

use crate::error::Result;

fn clean_name(raw: &str) -> String {
    raw.trim().replace("\r\n", " ").replace('\n', " ")
}

/// Returns a copy of `df` with column names trimmed and embedded line breaks
/// replaced by spaces.
///
/// # Errors
///
/// Fails if two columns clean to the same name.
pub fn clean_column_names(df: &DataFrame) -> Result<DataFrame> {
    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .map(|column| {
            let name = clean_name(column.name().as_str());
            column.clone().with_name(name.into())
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}
