//! CSV persistence of normalized tables.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{AnyValue, DataFrame};
use tracing::info;

use outage_common::any_to_string;

/// Writes `df` as CSV to `path`, creating parent directories.
///
/// The first line is the header. Null cells are written as empty fields.
pub fn write_normalized_csv(df: &DataFrame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let file = fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    write_csv(df, file).with_context(|| format!("write {}", path.display()))?;
    info!(
        path = %path.display(),
        rows = df.height(),
        "wrote normalized outages"
    );
    Ok(())
}

/// Renders `df` as CSV text.
pub fn render_normalized_csv(df: &DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(df, &mut buffer)?;
    String::from_utf8(buffer).context("CSV output is not valid UTF-8")
}

fn write_csv<W: Write>(df: &DataFrame, sink: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(sink);
    let columns = df.get_columns();
    writer.write_record(columns.iter().map(|column| column.name().as_str()))?;
    for idx in 0..df.height() {
        let record: Vec<String> = columns
            .iter()
            .map(|column| any_to_string(column.get(idx).unwrap_or(AnyValue::Null)))
            .collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}
