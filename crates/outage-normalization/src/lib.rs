//! Normalization engine for DOE-417 outage reports.
//!
//! Turns the human-entered free-text fields of a loaded report table into
//! structured, analyzable columns:
//!
//! - [`area`]: splits `State: County, County; State: ...` cells into
//!   (state, county) pairs
//! - [`categorical`]: canonicalizes NERC region, event type, and alert
//!   criteria strings
//! - [`timestamp`]: merges separate date and time text into one timestamp
//! - [`engine`]: runs all of the above over a table and projects the
//!   normalized schema
//!
//! Every function here is pure: inputs are borrowed and never mutated.

pub mod area;
pub mod categorical;
pub mod engine;
pub mod error;
pub mod timestamp;

pub use area::{parse_area_affected, untangle_area_affected};
pub use categorical::{
    CategoricalField, normalize_alert_criteria, normalize_event_type, normalize_nerc_region,
};
pub use engine::{
    NormalizationOutcome, NormalizationStats, normalize_outages, normalize_outages_with_stats,
};
pub use error::{NormalizationError, Result};
pub use timestamp::{
    combine_date_time, format_timestamp, parse_event_timestamp, parse_stored_timestamp,
    timestamp_column_values,
};
