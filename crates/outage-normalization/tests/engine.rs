//! Whole-table normalization.

use polars::prelude::DataFrame;
use proptest::prelude::*;

use outage_common::{column_text_values, string_column};
use outage_model::columns::{
    ALERT_CRITERIA_NORMALIZED, AREA_AFFECTED, COUNTY, CUSTOMERS_AFFECTED, DEMAND_LOSS, EVENT_END,
    EVENT_START, EVENT_TYPE_NORMALIZED, NERC_REGION, NERC_REGION_NORMALIZED, STATE,
};
use outage_model::{NORMALIZED_COLUMNS, RAW_COLUMNS};
use outage_normalization::{
    NormalizationError, normalize_outages, normalize_outages_with_stats, parse_area_affected,
};

type Row = [Option<&'static str>; 11];

const KENTUCKY: Row = [
    Some("January"),
    Some("1/2/2021"),
    Some("14:30"),
    Some("1/3/2021"),
    Some("9:00"),
    Some("Kentucky: Oldham County, Jefferson County; Virginia: Wise County;"),
    Some("MRO/SERC; MRO"),
    Some(" 1 "),
    Some("-Severe Weather-Transmission Interruption"),
    Some("100"),
    Some("1,200"),
];

const TEXAS: Row = [
    Some("February"),
    Some("2/5/2022"),
    Some("08:00"),
    Some("not a date"),
    Some("x"),
    Some("Texas"),
    Some("tre"),
    Some("2"),
    Some("vandalism"),
    None,
    None,
];

const BLANK_AREA: Row = [
    Some("March"),
    Some("3/1/2022"),
    Some("1:00 PM"),
    Some("3/1/2022"),
    Some("2:00 PM"),
    None,
    Some("WECC"),
    None,
    Some("Fuel Supply Emergency"),
    Some("0"),
    Some("0"),
];

fn frame(rows: &[Row]) -> DataFrame {
    let columns = RAW_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, name)| {
            string_column(
                name,
                rows.iter().map(|row| row[col].map(str::to_string)).collect(),
            )
        })
        .collect();
    DataFrame::new(columns).expect("raw frame")
}

/// One TEXAS row per area cell, tagged with its input index in Demand Loss.
fn frame_with_areas(areas: &[Option<String>]) -> DataFrame {
    let columns = RAW_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let values = areas
                .iter()
                .enumerate()
                .map(|(idx, area)| match *name {
                    AREA_AFFECTED => area.clone(),
                    DEMAND_LOSS => Some(idx.to_string()),
                    _ => TEXAS[col].map(str::to_string),
                })
                .collect();
            string_column(name, values)
        })
        .collect();
    DataFrame::new(columns).expect("raw frame")
}

fn texts(df: &DataFrame, column: &str) -> Vec<Option<String>> {
    column_text_values(df, column).expect("column values")
}

fn some(values: &[&str]) -> Vec<Option<String>> {
    values.iter().map(|value| Some((*value).to_string())).collect()
}

#[test]
fn projects_the_normalized_schema() {
    let normalized = normalize_outages(&frame(&[KENTUCKY, TEXAS])).expect("normalize");
    let names: Vec<String> = normalized
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(names, NORMALIZED_COLUMNS);
}

#[test]
fn explodes_rows_per_state_and_county() {
    let normalized = normalize_outages(&frame(&[KENTUCKY, TEXAS])).expect("normalize");
    assert_eq!(normalized.height(), 4);
    assert_eq!(
        texts(&normalized, STATE),
        some(&["Kentucky", "Kentucky", "Virginia", "Texas"])
    );
    assert_eq!(
        texts(&normalized, COUNTY),
        vec![
            Some("Oldham County".to_string()),
            Some("Jefferson County".to_string()),
            Some("Wise County".to_string()),
            None,
        ]
    );
}

#[test]
fn expanded_rows_share_event_attributes() {
    let normalized = normalize_outages(&frame(&[KENTUCKY, TEXAS])).expect("normalize");
    assert_eq!(
        texts(&normalized, NERC_REGION_NORMALIZED),
        some(&["MRO,SERC", "MRO,SERC", "MRO,SERC", "TRE"])
    );
    assert_eq!(
        texts(&normalized, EVENT_TYPE_NORMALIZED),
        some(&[
            "Severe Weather,Transmission Interruption",
            "Severe Weather,Transmission Interruption",
            "Severe Weather,Transmission Interruption",
            "Vandalism",
        ])
    );
    assert_eq!(
        texts(&normalized, ALERT_CRITERIA_NORMALIZED),
        some(&["1", "1", "1", "2"])
    );
    assert_eq!(
        texts(&normalized, CUSTOMERS_AFFECTED),
        vec![
            Some("1,200".to_string()),
            Some("1,200".to_string()),
            Some("1,200".to_string()),
            None,
        ]
    );
}

#[test]
fn unparsable_timestamps_become_missing() {
    let normalized = normalize_outages(&frame(&[KENTUCKY, TEXAS])).expect("normalize");
    assert_eq!(
        texts(&normalized, EVENT_START),
        some(&[
            "2021-01-02T14:30:00",
            "2021-01-02T14:30:00",
            "2021-01-02T14:30:00",
            "2022-02-05T08:00:00",
        ])
    );
    assert_eq!(
        texts(&normalized, EVENT_END),
        vec![
            Some("2021-01-03T09:00:00".to_string()),
            Some("2021-01-03T09:00:00".to_string()),
            Some("2021-01-03T09:00:00".to_string()),
            None,
        ]
    );
}

#[test]
fn blank_area_keeps_the_row() {
    let outcome = normalize_outages_with_stats(&frame(&[BLANK_AREA])).expect("normalize");
    assert_eq!(outcome.frame.height(), 1);
    assert_eq!(texts(&outcome.frame, STATE), vec![None]);
    assert_eq!(texts(&outcome.frame, COUNTY), vec![None]);
    assert_eq!(texts(&outcome.frame, ALERT_CRITERIA_NORMALIZED), some(&[""]));
    assert_eq!(outcome.stats.rows_without_area, 1);
    assert_eq!(
        texts(&outcome.frame, EVENT_END),
        some(&["2022-03-01T14:00:00"])
    );
}

#[test]
fn stats_count_rows_and_failures() {
    let outcome =
        normalize_outages_with_stats(&frame(&[KENTUCKY, TEXAS, BLANK_AREA])).expect("normalize");
    assert_eq!(outcome.stats.input_rows, 3);
    assert_eq!(outcome.stats.output_rows, 5);
    assert_eq!(outcome.stats.unparsed_starts, 0);
    assert_eq!(outcome.stats.unparsed_ends, 1);
    assert!(outcome.stats.output_rows >= outcome.stats.input_rows);
}

#[test]
fn null_time_cell_gives_missing_timestamp() {
    let mut row = BLANK_AREA;
    row[2] = None;
    let outcome = normalize_outages_with_stats(&frame(&[row])).expect("normalize");
    assert_eq!(texts(&outcome.frame, EVENT_START), vec![None]);
    assert_eq!(outcome.stats.unparsed_starts, 1);
    assert_eq!(
        texts(&outcome.frame, EVENT_END),
        some(&["2022-03-01T14:00:00"])
    );
}

#[test]
fn input_table_is_not_mutated() {
    let raw = frame(&[KENTUCKY, TEXAS]);
    let before = raw.clone();
    let _ = normalize_outages(&raw).expect("normalize");
    assert!(raw.equals_missing(&before));
    assert_eq!(texts(&raw, NERC_REGION), texts(&before, NERC_REGION));
}

#[test]
fn normalization_is_deterministic() {
    let raw = frame(&[KENTUCKY, TEXAS, BLANK_AREA]);
    let first = normalize_outages(&raw).expect("normalize");
    let second = normalize_outages(&raw).expect("normalize");
    assert!(first.equals_missing(&second));
}

#[test]
fn empty_input_yields_empty_schema() {
    let normalized = normalize_outages(&frame(&[])).expect("normalize");
    assert_eq!(normalized.height(), 0);
    assert_eq!(normalized.width(), NORMALIZED_COLUMNS.len());

    let no_columns = normalize_outages(&DataFrame::empty()).expect("normalize");
    assert_eq!(no_columns.height(), 0);
    assert_eq!(no_columns.width(), NORMALIZED_COLUMNS.len());
}

#[test]
fn missing_column_is_an_error() {
    let raw = frame(&[TEXAS]).drop(AREA_AFFECTED).expect("drop");
    match normalize_outages(&raw) {
        Err(NormalizationError::MissingColumn { column }) => assert_eq!(column, AREA_AFFECTED),
        other => panic!("expected missing column, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn every_row_expands_to_its_area_pairs(
        areas in proptest::collection::vec(proptest::option::of("[A-Za-z :;,]{0,30}"), 0..8)
    ) {
        let expected: Vec<usize> = areas
            .iter()
            .map(|area| area.as_deref().map_or(1, |cell| parse_area_affected(cell).len().max(1)))
            .collect();
        let outcome = normalize_outages_with_stats(&frame_with_areas(&areas)).expect("normalize");

        prop_assert_eq!(outcome.stats.input_rows, areas.len());
        prop_assert_eq!(outcome.stats.output_rows, expected.iter().sum::<usize>());
        prop_assert_eq!(outcome.frame.height(), outcome.stats.output_rows);
        let single_pair_cells = areas
            .iter()
            .all(|area| area.as_deref().is_none_or(|cell| parse_area_affected(cell).len() <= 1));
        prop_assert_eq!(outcome.stats.output_rows == areas.len(), single_pair_cells);

        let tags = texts(&outcome.frame, DEMAND_LOSS);
        let mut expanded = Vec::new();
        for (idx, count) in expected.iter().enumerate() {
            expanded.extend(std::iter::repeat_n(Some(idx.to_string()), *count));
        }
        prop_assert_eq!(tags, expanded);
    }
}
