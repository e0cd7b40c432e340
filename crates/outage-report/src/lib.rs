//! Reporting over normalized outage tables.
//!
//! - **Insights**: restoration-duration statistics, event-type frequency,
//!   and seasonal trends
//! - **CSV output**: persists the normalized table

mod insights;
mod output;

pub use insights::{GroupCount, GroupStat, Insights, InsightsSummary, TOP_EVENT_TYPES};
pub use output::{render_normalized_csv, write_normalized_csv};
