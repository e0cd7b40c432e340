//! Outage report ingestion utilities.
//!
//! This crate loads the DOE-417 annual summary sheets (exported as CSV) into
//! Polars DataFrames with a fixed, reconciled column set.
//!
//! # Features
//!
//! - **Header reconciliation**: Banner rows are skipped and the source header
//!   row is replaced with the fixed report schema, so every reporting year
//!   lands under the same column names
//! - **Header detection**: Optionally locate the header row by content
//! - **File discovery**: Find summary CSV files in a data directory
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use outage_ingest::{list_summary_files, load_summary_csv, LoadOptions};
//!
//! let files = list_summary_files(Path::new("doe_147_data"))?;
//! let df = load_summary_csv(&files[0], &LoadOptions::default())?;
//! ```

mod clean;
mod csv;
mod discovery;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Loading ===
pub use self::csv::{
    DEFAULT_HEADER_ROW, HeaderRow, LoadOptions, detect_header_row, load_summary_csv,
    normalize_header,
};

// === Column Cleanup ===
pub use clean::clean_column_names;

// === File Discovery ===
pub use discovery::list_summary_files;
