//! Combining separate date and time cells into one timestamp.
//!
//! Timestamps are naive local values exactly as written in the report; no
//! timezone is resolved. Within a table they are stored as ISO 8601 text
//! (`YYYY-MM-DDTHH:MM:SS`) with null as the missing marker.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::{DataFrame, PolarsResult};

use outage_common::column_text_values;
use outage_model::columns::TIMESTAMP_FORMAT;

/// Date layouts seen across report years.
const DATE_FORMATS: [&str; 7] = [
    "%m/%d/%y", // 1/2/21
    "%m/%d/%Y", // 1/2/2021
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d-%b-%Y",  // 02-Jan-2021
    "%B %d, %Y", // January 2, 2021
    "%b %d, %Y", // Jan 2, 2021
];

const TIME_FORMATS: [&str; 5] = ["%H:%M:%S", "%H:%M", "%I:%M:%S %p", "%I:%M %p", "%I:%M%p"];

/// Time components spreadsheet exports append to a bare date.
const MIDNIGHT_SUFFIXES: [&str; 4] = ["00:00:00", "0:00:00", "00:00", "0:00"];

/// Drops a trailing midnight time from a date cell ("1/2/2021 0:00").
fn strip_midnight_suffix(date: &str) -> &str {
    match date.rsplit_once(' ') {
        Some((head, tail)) if MIDNIGHT_SUFFIXES.contains(&tail) => head.trim_end(),
        _ => date,
    }
}

fn clean_time(time: &str) -> String {
    time.trim()
        .to_uppercase()
        .replace("A.M.", "AM")
        .replace("P.M.", "PM")
}

/// Parses one date cell and one time cell into a timestamp.
///
/// The trimmed date and time are joined with a single space and matched
/// against the known layouts. An empty time string means midnight. Loaded
/// tables hold blank cells as null, and [`combine_date_time`] maps a null
/// time to `None`, so this only applies to direct calls. Returns `None` when
/// nothing matches.
///
/// ```
/// use chrono::NaiveDate;
/// use outage_normalization::parse_event_timestamp;
///
/// let expected = NaiveDate::from_ymd_opt(2021, 1, 2)
///     .and_then(|date| date.and_hms_opt(14, 30, 0));
/// assert_eq!(parse_event_timestamp("1/2/2021", "14:30"), expected);
/// assert_eq!(parse_event_timestamp("not a date", "x"), None);
/// ```
pub fn parse_event_timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = strip_midnight_suffix(date.trim());
    if date.is_empty() {
        return None;
    }
    let time = clean_time(time);

    if time.is_empty() {
        return DATE_FORMATS.iter().find_map(|fmt| {
            NaiveDate::parse_from_str(date, fmt)
                .ok()
                .map(|day| day.and_time(NaiveTime::MIN))
        });
    }

    let combined = format!("{date} {time}");
    for date_fmt in DATE_FORMATS {
        for time_fmt in TIME_FORMATS {
            let layout = format!("{date_fmt} {time_fmt}");
            if let Ok(parsed) = NaiveDateTime::parse_from_str(&combined, &layout) {
                return Some(parsed);
            }
        }
    }
    None
}

/// Combines row-aligned date and time columns.
///
/// A missing (null) cell on either side, including a blank time cell in a
/// loaded table, or an unparsable pair, yields `None` for that row only. The output has one entry per row of the longer input.
pub fn combine_date_time(
    dates: &[Option<String>],
    times: &[Option<String>],
) -> Vec<Option<NaiveDateTime>> {
    let len = dates.len().max(times.len());
    (0..len)
        .map(|idx| {
            let date = dates.get(idx).and_then(Option::as_deref)?;
            let time = times.get(idx).and_then(Option::as_deref)?;
            parse_event_timestamp(date, time)
        })
        .collect()
}

/// Formats a timestamp for storage in a table cell.
pub fn format_timestamp(value: &NaiveDateTime) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses a stored timestamp cell back into a value.
pub fn parse_stored_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).ok()
}

/// Reads a stored timestamp column from a normalized table.
pub fn timestamp_column_values(
    df: &DataFrame,
    column: &str,
) -> PolarsResult<Vec<Option<NaiveDateTime>>> {
    Ok(column_text_values(df, column)?
        .into_iter()
        .map(|cell| cell.as_deref().and_then(parse_stored_timestamp))
        .collect())
}
