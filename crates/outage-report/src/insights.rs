//! Restoration statistics over a normalized outage table.

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime};
use polars::prelude::DataFrame;
use serde::Serialize;

use outage_common::column_text_values;
use outage_model::EventMonth;
use outage_model::columns::{
    EVENT_END, EVENT_MONTH, EVENT_START, EVENT_TYPE_NORMALIZED, NERC_REGION_NORMALIZED, STATE,
};
use outage_normalization::timestamp_column_values;

/// Number of event types kept in [`InsightsSummary::top_event_types`].
pub const TOP_EVENT_TYPES: usize = 10;

/// A per-group statistic in hours.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStat {
    pub key: String,
    pub hours: f64,
}

/// A per-group event count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCount {
    pub key: String,
    pub events: usize,
}

#[derive(Debug, Clone)]
struct InsightRow {
    start: Option<NaiveDateTime>,
    restoration_hours: Option<f64>,
    month: Option<String>,
    state: Option<String>,
    nerc_region: Option<String>,
    event_type: Option<String>,
}

/// Summary statistics computed from a normalized table.
///
/// Restoration time is `Event End - Event Start` in hours, missing when
/// either timestamp is missing.
#[derive(Debug, Clone)]
pub struct Insights {
    rows: Vec<InsightRow>,
}

/// Serializable bundle of every statistic in [`Insights`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsSummary {
    pub rows: usize,
    pub observed_years: Vec<i32>,
    pub avg_restoration_by_nerc: Vec<GroupStat>,
    pub avg_restoration_by_state: Vec<GroupStat>,
    pub top_event_types: Vec<GroupCount>,
    pub seasonal_trends_by_month: Vec<GroupStat>,
}

impl Insights {
    /// Reads the columns the statistics need from a normalized table.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let starts = timestamp_column_values(df, EVENT_START)
            .with_context(|| format!("read {EVENT_START}"))?;
        let ends =
            timestamp_column_values(df, EVENT_END).with_context(|| format!("read {EVENT_END}"))?;
        let months = text_column(df, EVENT_MONTH)?;
        let states = text_column(df, STATE)?;
        let regions = text_column(df, NERC_REGION_NORMALIZED)?;
        let event_types = text_column(df, EVENT_TYPE_NORMALIZED)?;

        let rows = starts
            .into_iter()
            .zip(ends)
            .zip(months)
            .zip(states)
            .zip(regions)
            .zip(event_types)
            .map(
                |(((((start, end), month), state), nerc_region), event_type)| InsightRow {
                    start,
                    restoration_hours: restoration_hours(start, end),
                    month,
                    state,
                    nerc_region,
                    event_type,
                },
            )
            .collect();
        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Restoration hours per row, in table order.
    pub fn restoration_hours(&self) -> Vec<Option<f64>> {
        self.rows.iter().map(|row| row.restoration_hours).collect()
    }

    /// Sorted distinct years of `Event Start`.
    pub fn observed_years(&self) -> Vec<i32> {
        self.rows
            .iter()
            .filter_map(|row| row.start.map(|start| start.year()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Mean restoration hours per normalized NERC region, longest first.
    pub fn avg_restoration_by_nerc(&self) -> Vec<GroupStat> {
        mean_by(&self.rows, |row| row.nerc_region.as_deref())
    }

    /// Mean restoration hours per state, longest first.
    pub fn avg_restoration_by_state(&self) -> Vec<GroupStat> {
        mean_by(&self.rows, |row| row.state.as_deref())
    }

    /// Row count per normalized event type, most frequent first.
    ///
    /// A multi-type cell such as `Severe Weather,Transmission Interruption`
    /// counts as its own key.
    pub fn count_events_by_type(&self) -> Vec<GroupCount> {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for key in self.rows.iter().filter_map(|row| row.event_type.as_deref()) {
            *counts.entry(key).or_default() += 1;
        }
        let mut out: Vec<GroupCount> = counts
            .into_iter()
            .map(|(key, events)| GroupCount {
                key: key.to_string(),
                events,
            })
            .collect();
        out.sort_by(|a, b| b.events.cmp(&a.events).then_with(|| a.key.cmp(&b.key)));
        out
    }

    /// Median restoration hours per `Event Month`, January first.
    ///
    /// Unrecognized month names and months without any restoration time are
    /// left out.
    pub fn seasonal_trends_by_month(&self) -> Vec<GroupStat> {
        let mut by_month: BTreeMap<EventMonth, Vec<f64>> = BTreeMap::new();
        for row in &self.rows {
            let (Some(month), Some(hours)) = (row.month.as_deref(), row.restoration_hours) else {
                continue;
            };
            if let Ok(month) = month.parse::<EventMonth>() {
                by_month.entry(month).or_default().push(hours);
            }
        }
        by_month
            .into_iter()
            .filter_map(|(month, mut hours)| {
                median(&mut hours).map(|value| GroupStat {
                    key: month.name().to_string(),
                    hours: round2(value),
                })
            })
            .collect()
    }

    pub fn summary(&self) -> InsightsSummary {
        let mut top_event_types = self.count_events_by_type();
        top_event_types.truncate(TOP_EVENT_TYPES);
        InsightsSummary {
            rows: self.row_count(),
            observed_years: self.observed_years(),
            avg_restoration_by_nerc: self.avg_restoration_by_nerc(),
            avg_restoration_by_state: self.avg_restoration_by_state(),
            top_event_types,
            seasonal_trends_by_month: self.seasonal_trends_by_month(),
        }
    }
}

fn text_column(df: &DataFrame, name: &str) -> Result<Vec<Option<String>>> {
    column_text_values(df, name).with_context(|| format!("read {name}"))
}

fn restoration_hours(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<f64> {
    let elapsed = end? - start?;
    Some(elapsed.num_seconds() as f64 / 3600.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn median(values: &mut [f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

fn mean_by<'a, F>(rows: &'a [InsightRow], key: F) -> Vec<GroupStat>
where
    F: Fn(&'a InsightRow) -> Option<&'a str>,
{
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let Some(group) = key(row) else {
            continue;
        };
        let entry = groups.entry(group).or_insert((0.0, 0));
        if let Some(hours) = row.restoration_hours {
            entry.0 += hours;
            entry.1 += 1;
        }
    }
    let mut out: Vec<GroupStat> = groups
        .into_iter()
        .filter(|(_, (_, count))| *count > 0)
        .map(|(group, (total, count))| GroupStat {
            key: group.to_string(),
            hours: round2(total / count as f64),
        })
        .collect();
    out.sort_by(|a, b| b.hours.total_cmp(&a.hours).then_with(|| a.key.cmp(&b.key)));
    out
}
