//! Insights over small normalized tables.

use polars::prelude::DataFrame;

use outage_common::string_column;
use outage_model::NORMALIZED_COLUMNS;
use outage_report::{GroupCount, GroupStat, Insights};

/// month, start, end, state, county, nerc, alert, event type, demand, customers
type Row = [Option<&'static str>; 10];

fn frame(rows: &[Row]) -> DataFrame {
    let columns = NORMALIZED_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, name)| {
            string_column(
                name,
                rows.iter().map(|row| row[col].map(str::to_string)).collect(),
            )
        })
        .collect();
    DataFrame::new(columns).expect("normalized frame")
}

fn row(
    month: &'static str,
    start: Option<&'static str>,
    end: Option<&'static str>,
    state: Option<&'static str>,
    nerc: &'static str,
    event_type: &'static str,
) -> Row {
    [
        Some(month),
        start,
        end,
        state,
        None,
        Some(nerc),
        Some("1"),
        Some(event_type),
        None,
        None,
    ]
}

fn sample() -> Insights {
    let df = frame(&[
        row(
            "January",
            Some("2021-01-02T14:30:00"),
            Some("2021-01-03T02:30:00"),
            Some("Kentucky"),
            "SERC",
            "Severe Weather",
        ),
        row(
            "January",
            Some("2021-01-05T00:00:00"),
            Some("2021-01-05T04:00:00"),
            Some("Virginia"),
            "SERC",
            "Severe Weather",
        ),
        row(
            "July",
            Some("2022-07-01T10:00:00"),
            Some("2022-07-01T11:00:00"),
            Some("Texas"),
            "TRE",
            "Vandalism",
        ),
        row(
            "Smarch",
            Some("2022-03-01T10:00:00"),
            Some("2022-03-01T20:00:00"),
            None,
            "WECC",
            "Fuel Supply Emergency",
        ),
        row(
            "July",
            Some("2023-07-04T10:00:00"),
            None,
            Some("Ohio"),
            "RFC",
            "Vandalism",
        ),
    ]);
    Insights::from_frame(&df).expect("insights")
}

fn stat(key: &str, hours: f64) -> GroupStat {
    GroupStat {
        key: key.to_string(),
        hours,
    }
}

#[test]
fn restoration_hours_per_row() {
    assert_eq!(
        sample().restoration_hours(),
        vec![Some(12.0), Some(4.0), Some(1.0), Some(10.0), None]
    );
}

#[test]
fn observed_years_are_sorted_and_unique() {
    assert_eq!(sample().observed_years(), vec![2021, 2022, 2023]);
}

#[test]
fn average_by_region_drops_undefined_means() {
    assert_eq!(
        sample().avg_restoration_by_nerc(),
        vec![stat("WECC", 10.0), stat("SERC", 8.0), stat("TRE", 1.0)]
    );
}

#[test]
fn average_by_state_drops_null_keys() {
    assert_eq!(
        sample().avg_restoration_by_state(),
        vec![stat("Kentucky", 12.0), stat("Virginia", 4.0), stat("Texas", 1.0)]
    );
}

#[test]
fn event_type_counts_break_ties_by_name() {
    assert_eq!(
        sample().count_events_by_type(),
        vec![
            GroupCount {
                key: "Severe Weather".to_string(),
                events: 2,
            },
            GroupCount {
                key: "Vandalism".to_string(),
                events: 2,
            },
            GroupCount {
                key: "Fuel Supply Emergency".to_string(),
                events: 1,
            },
        ]
    );
}

#[test]
fn seasonal_trends_use_calendar_order() {
    assert_eq!(
        sample().seasonal_trends_by_month(),
        vec![stat("January", 8.0), stat("July", 1.0)]
    );
}

#[test]
fn summary_serializes_to_json() {
    let summary = sample().summary();
    let json = serde_json::to_value(&summary).expect("json");
    assert_eq!(json["rows"], 5);
    assert_eq!(json["observed_years"], serde_json::json!([2021, 2022, 2023]));
    assert_eq!(json["top_event_types"][0]["key"], "Severe Weather");
    assert_eq!(json["seasonal_trends_by_month"][1]["hours"], 1.0);
}

#[test]
fn empty_table_has_no_statistics() {
    let insights = Insights::from_frame(&frame(&[])).expect("insights");
    assert_eq!(insights.row_count(), 0);
    assert!(insights.observed_years().is_empty());
    assert!(insights.avg_restoration_by_state().is_empty());
    assert!(insights.count_events_by_type().is_empty());
}

#[test]
fn missing_column_is_an_error() {
    let df = frame(&[]).drop("State").expect("drop");
    assert!(Insights::from_frame(&df).is_err());
}
