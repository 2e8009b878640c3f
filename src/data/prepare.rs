//! Turns the two-column `Date,Value` table into a date-ordered [`Series`].
//!
//! Any bad row aborts the whole preparation. The table is fixed at build time,
//! so a failure here is a programming error and there is nothing to recover.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{Point, Series};
use crate::utils::TimeUtils;

/// One table row as it appears in the text, before any conversion.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Value")]
    value: String,
}

#[derive(Debug, Error)]
#[error("row {row} ({record:?}): {cause}")]
pub struct ParseError {
    /// 1-based data row (the header is row 0)
    pub row: usize,
    /// Offending text as it appeared in the table
    pub record: String,
    #[source]
    pub cause: ParseErrorCause,
}

#[derive(Debug, Error)]
pub enum ParseErrorCause {
    #[error("malformed record: {0}")]
    Record(#[from] csv::Error),

    #[error("invalid date {text:?}, expected month/day/two-digit year")]
    Date {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("invalid number {text:?}")]
    Value {
        text: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("value {0} is not a finite number")]
    NonFinite(f64),
}

/// Parses `data` (header row + `date,value` rows) and sorts it by date.
///
/// The output has exactly one point per data row. Rows sharing a date keep
/// their relative order.
pub fn prepare_series(data: &str) -> Result<Series, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| ParseError {
            row: 0,
            record: source_line(data, &e),
            cause: e.into(),
        })?
        .clone();

    let mut points = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;

        let record = result.map_err(|e| ParseError {
            row,
            record: source_line(data, &e),
            cause: e.into(),
        })?;
        let text = record.iter().collect::<Vec<_>>().join(",");

        let point = record
            .deserialize::<RawRow>(Some(&headers))
            .map_err(ParseErrorCause::from)
            .and_then(|raw| parse_row(&raw))
            .map_err(|cause| ParseError {
                row,
                record: text,
                cause,
            })?;
        points.push(point);
    }

    Ok(Series::from_points(points))
}

fn parse_row(raw: &RawRow) -> Result<Point, ParseErrorCause> {
    let date = NaiveDate::parse_from_str(&raw.date, TimeUtils::TABLE_DATE_FORMAT).map_err(
        |source| ParseErrorCause::Date {
            text: raw.date.clone(),
            source,
        },
    )?;

    let value: f64 = raw.value.parse().map_err(|source| ParseErrorCause::Value {
        text: raw.value.clone(),
        source,
    })?;
    if !value.is_finite() {
        return Err(ParseErrorCause::NonFinite(value));
    }

    Ok(Point::new(date, value))
}

/// Raw text of the line a csv error points at, if it carries a position.
fn source_line(data: &str, err: &csv::Error) -> String {
    err.position()
        .and_then(|pos| data.lines().nth((pos.line() as usize).saturating_sub(1)))
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn values(series: &Series) -> Vec<f64> {
        series.points().iter().map(|p| p.value).collect()
    }

    #[test]
    fn parses_and_sorts_rows() {
        let series = prepare_series("Date,Value\n6/30/16,11.0909\n12/31/15,6.1403\n3/31/16,12.162")
            .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(values(&series), vec![6.1403, 12.162, 11.0909]);
        assert_eq!(
            series.first().map(|p| p.date),
            NaiveDate::from_ymd_opt(2015, 12, 31)
        );
    }

    #[test]
    fn single_digit_month_and_day_are_accepted() {
        let series = prepare_series("Date,Value\n3/4/25,12.9881").unwrap();
        assert_eq!(
            series.first().map(|p| p.date),
            NaiveDate::from_ymd_opt(2025, 3, 4)
        );
    }

    #[test]
    fn whitespace_around_fields_is_ignored() {
        let series = prepare_series("Date,Value\n 12/31/15 , 6.5 \n").unwrap();
        assert_eq!(values(&series), vec![6.5]);
    }

    #[test]
    fn header_only_gives_empty_series() {
        let series = prepare_series("Date,Value\n").unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn duplicate_dates_keep_table_order() {
        let series =
            prepare_series("Date,Value\n3/31/16,2.0\n12/31/15,1.0\n3/31/16,3.0").unwrap();
        assert_eq!(values(&series), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn bad_date_reports_row_and_cause() {
        let err = prepare_series("Date,Value\n12/31/15,6.1\n2016-03-31,7.0").unwrap_err();

        assert_eq!(err.row, 2);
        assert_eq!(err.record, "2016-03-31,7.0");
        assert!(matches!(err.cause, ParseErrorCause::Date { ref text, .. } if text == "2016-03-31"));
    }

    #[test]
    fn bad_number_reports_row_and_cause() {
        let err = prepare_series("Date,Value\n12/31/15,six").unwrap_err();

        assert_eq!(err.row, 1);
        assert!(matches!(err.cause, ParseErrorCause::Value { ref text, .. } if text == "six"));
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = prepare_series("Date,Value\n12/31/15,NaN").unwrap_err();
        assert!(matches!(err.cause, ParseErrorCause::NonFinite(v) if v.is_nan()));
    }

    #[test]
    fn wrong_column_count_is_a_record_error() {
        let err = prepare_series("Date,Value\n12/31/15,1.0,extra").unwrap_err();

        assert_eq!(err.row, 1);
        assert!(matches!(err.cause, ParseErrorCause::Record(_)));
        assert_eq!(err.record, "12/31/15,1.0,extra");
    }

    #[test]
    fn missing_value_column_is_a_record_error() {
        let err = prepare_series("Date,Amount\n12/31/15,1.0").unwrap_err();
        assert!(matches!(err.cause, ParseErrorCause::Record(_)));
    }

    #[quickcheck]
    fn prepared_series_is_sorted_and_complete(rows: Vec<(u16, i32)>) -> bool {
        let base = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let mut table = String::from("Date,Value\n");
        for (offset, cents) in &rows {
            // Stay inside the 2000..2069 window that `%y` maps to
            let date = base + chrono::Days::new(u64::from(*offset % 18_000));
            table.push_str(&format!(
                "{},{}\n",
                date.format(TimeUtils::TABLE_DATE_FORMAT),
                f64::from(*cents) / 100.0
            ));
        }

        let series = match prepare_series(&table) {
            Ok(series) => series,
            Err(_) => return false,
        };
        series.len() == rows.len() && series.points().windows(2).all(|w| w[0].date <= w[1].date)
    }
}
