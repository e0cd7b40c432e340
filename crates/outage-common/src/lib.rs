//! Shared utilities for the outage crates.
//!
//! This crate provides Polars helpers used across the workspace for reading
//! cell values out of loosely-typed report tables.

pub mod polars;

// Re-export commonly used functions at crate root for convenience
pub use self::polars::{
    any_as_text, any_to_string, column_strings, column_text_values, format_numeric, parse_f64,
    string_column,
};
