//! Date and time combination.

use chrono::{NaiveDate, NaiveDateTime};

use outage_normalization::{combine_date_time, parse_event_timestamp};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("valid timestamp")
}

fn cells(values: &[Option<&str>]) -> Vec<Option<String>> {
    values.iter().map(|value| value.map(str::to_string)).collect()
}

#[test]
fn combines_us_date_and_24h_time() {
    assert_eq!(parse_event_timestamp("1/2/2021", "14:30"), Some(at(2021, 1, 2, 14, 30)));
}

#[test]
fn garbage_is_missing_not_an_error() {
    assert_eq!(parse_event_timestamp("not a date", "x"), None);
    assert_eq!(parse_event_timestamp("13/45/2021", "10:00"), None);
    assert_eq!(parse_event_timestamp("1/2/2021", "25:00"), None);
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(
        parse_event_timestamp("  01/02/2021 ", " 2:30 PM "),
        Some(at(2021, 1, 2, 14, 30))
    );
}

#[test]
fn failures_stay_row_local() {
    let dates = cells(&[Some("1/2/2021"), Some("not a date"), None, Some("3/4/2019")]);
    let times = cells(&[Some("14:30"), Some("x"), Some("10:00"), None]);
    let combined = combine_date_time(&dates, &times);
    assert_eq!(combined, vec![Some(at(2021, 1, 2, 14, 30)), None, None, None]);
}

#[test]
fn output_is_row_aligned() {
    let dates = cells(&[Some("1/2/2021"), Some("1/3/2021"), Some("1/4/2021")]);
    let times = cells(&[Some("00:00"), Some("Unknown"), Some("23:59")]);
    let combined = combine_date_time(&dates, &times);
    assert_eq!(combined.len(), 3);
    assert_eq!(combined[0], Some(at(2021, 1, 2, 0, 0)));
    assert_eq!(combined[1], None);
    assert_eq!(combined[2], Some(at(2021, 1, 4, 23, 59)));
}
