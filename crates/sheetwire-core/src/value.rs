//! Cell values, serial-day temporal encoding, and the wire cell codec.
//!
//! Google Sheets has no native date/time wire type. Dates, times, and
//! datetimes travel as "serial number" floats: days counted from an epoch of
//! 1899-12-30 (day 0), with the time of day in the fractional part. See
//! <https://developers.google.com/sheets/reference/rest/v4/DateTimeRenderOption>.

use crate::error::{Error, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::fmt;

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Day 0 of the serial-day encoding.
pub fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap()
}

/// A decoded, natively typed cell value.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Empty cell (no value on the wire)
    Empty,
    /// Boolean value (TRUE/FALSE)
    Bool(bool),
    /// Numeric value (all numbers are f64 on the wire)
    Number(f64),
    /// Text value
    Text(String),
    /// Calendar date, decoded from a DATE-formatted serial number
    Date(NaiveDate),
    /// Time of day, decoded from a TIME-formatted serial number
    Time(NaiveTime),
    /// Combined date and time, decoded from a DATE_TIME-formatted serial number
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Bool(true) => Some(1.0),
            CellValue::Bool(false) => Some(0.0),
            _ => None,
        }
    }

    /// Try to get the value as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Bool(_) => "boolean",
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "string",
            CellValue::Date(_) => "date",
            CellValue::Time(_) => "time",
            CellValue::DateTime(_) => "datetime",
        }
    }

    /// The serial-day representation of a temporal value, if this is one.
    ///
    /// Dates map to whole days since the epoch, times to a fraction of one
    /// day, datetimes to the sum of both.
    pub fn to_serial(&self) -> Option<f64> {
        match self {
            CellValue::Date(d) => Some((*d - serial_epoch()).num_days() as f64),
            CellValue::Time(t) => {
                let micros =
                    t.num_seconds_from_midnight() as f64 * 1_000_000.0 + t.nanosecond() as f64 / 1_000.0;
                Some(micros / MICROS_PER_DAY)
            }
            CellValue::DateTime(dt) => {
                let days = (dt.date() - serial_epoch()).num_days() as f64;
                let t = dt.time();
                let micros =
                    t.num_seconds_from_midnight() as f64 * 1_000_000.0 + t.nanosecond() as f64 / 1_000.0;
                Some(days + micros / MICROS_PER_DAY)
            }
            _ => None,
        }
    }

    /// Render the value into a JSON-serializable wire form.
    ///
    /// The values API only accepts JSON primitives, so this must run over
    /// every cell of every row before an upload body is built: temporal
    /// values become their canonical text forms (`YYYY-MM-DD`, `HH:MM:SS`,
    /// `YYYY-MM-DD HH:MM:SS`), NaN and empty cells become null, and
    /// everything else passes through unchanged.
    pub fn to_wire(&self) -> Json {
        match self {
            CellValue::Empty => Json::Null,
            CellValue::Bool(b) => Json::Bool(*b),
            CellValue::Number(n) if n.is_nan() => Json::Null,
            CellValue::Number(n) => serde_json::json!(n),
            CellValue::Text(s) => Json::String(s.clone()),
            CellValue::Date(d) => Json::String(d.format("%Y-%m-%d").to_string()),
            CellValue::Time(t) => Json::String(t.format("%H:%M:%S").to_string()),
            CellValue::DateTime(dt) => Json::String(dt.format("%Y-%m-%d %H:%M:%S").to_string()),
        }
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Empty
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
            CellValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            CellValue::Time(t) => write!(f, "{}", t.format("%H:%M:%S")),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveTime> for CellValue {
    fn from(t: NaiveTime) -> Self {
        CellValue::Time(t)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

/// The coarse-kind tagged value a cell carries on the wire
/// (`effectiveValue` is a one-entry mapping keyed by kind).
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// `numberValue`
    Number(f64),
    /// `stringValue`
    Text(String),
    /// `boolValue`
    Bool(bool),
}

impl WireValue {
    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            WireValue::Number(_) => "number",
            WireValue::Text(_) => "string",
            WireValue::Bool(_) => "boolean",
        }
    }

    fn is_falsy(&self) -> bool {
        match self {
            WireValue::Number(n) => *n == 0.0,
            WireValue::Text(s) => s.is_empty(),
            WireValue::Bool(b) => !b,
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WireValue::Number(n) => write!(f, "{}", n),
            WireValue::Text(s) => write!(f, "{}", s),
            WireValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

/// A cell's display format type (`effectiveFormat.numberFormat.type`).
///
/// When present, the display format takes precedence over the coarse kind
/// for selecting the decode conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumberFormatType {
    /// `TEXT`
    #[serde(rename = "TEXT")]
    Text,
    /// `NUMBER`
    #[serde(rename = "NUMBER")]
    Number,
    /// `PERCENT`
    #[serde(rename = "PERCENT")]
    Percent,
    /// `CURRENCY`
    #[serde(rename = "CURRENCY")]
    Currency,
    /// `SCIENTIFIC`
    #[serde(rename = "SCIENTIFIC")]
    Scientific,
    /// `DATE`
    #[serde(rename = "DATE")]
    Date,
    /// `TIME`
    #[serde(rename = "TIME")]
    Time,
    /// `DATE_TIME`
    #[serde(rename = "DATE_TIME")]
    DateTime,
    /// `NUMBER_FORMAT_TYPE_UNSPECIFIED`, or any format this library does not know
    #[serde(rename = "NUMBER_FORMAT_TYPE_UNSPECIFIED")]
    #[serde(other)]
    Unspecified,
}

impl NumberFormatType {
    /// The wire spelling of the format
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberFormatType::Text => "TEXT",
            NumberFormatType::Number => "NUMBER",
            NumberFormatType::Percent => "PERCENT",
            NumberFormatType::Currency => "CURRENCY",
            NumberFormatType::Scientific => "SCIENTIFIC",
            NumberFormatType::Date => "DATE",
            NumberFormatType::Time => "TIME",
            NumberFormatType::DateTime => "DATE_TIME",
            NumberFormatType::Unspecified => "NUMBER_FORMAT_TYPE_UNSPECIFIED",
        }
    }
}

impl fmt::Display for NumberFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode the date part of a serial number (whole days since the epoch).
pub fn date_from_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    serial_epoch().checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Decode the time-of-day part of a serial number (the fractional day,
/// interpreted as a duration since midnight).
pub fn time_from_serial(serial: f64) -> Option<NaiveTime> {
    if !serial.is_finite() {
        return None;
    }
    let micros = (serial.rem_euclid(1.0) * MICROS_PER_DAY).round() as i64 % 86_400_000_000;
    let secs = (micros / 1_000_000) as u32;
    let nanos = ((micros % 1_000_000) * 1_000) as u32;
    NaiveTime::from_num_seconds_from_midnight_opt(secs, nanos)
}

/// Decode a full serial number into a datetime (whole days plus fraction).
pub fn datetime_from_serial(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() {
        return None;
    }
    let micros = (serial * MICROS_PER_DAY).round() as i64;
    serial_epoch()
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(Duration::microseconds(micros))
}

fn identity(value: &WireValue) -> CellValue {
    match value {
        WireValue::Number(n) => CellValue::Number(*n),
        WireValue::Text(s) => CellValue::Text(s.clone()),
        WireValue::Bool(b) => CellValue::Bool(*b),
    }
}

fn mismatch(value: &WireValue, format: NumberFormatType) -> Error {
    Error::FormatMismatch {
        value: value.to_string(),
        format: format.to_string(),
        actual: value.type_name(),
    }
}

/// Decode one wire cell into a native [`CellValue`].
///
/// Selection rule: the display `format`, when present, picks the conversion;
/// otherwise the coarse kind of `value` is used as-is. An absent `value`
/// always decodes to [`CellValue::Empty`]; empty/falsy values are never run
/// through a conversion and pass through unconverted.
///
/// Error policy (deliberately asymmetric, and surprising on first read):
/// a value that is of a plausible type but fails the specific parse, such
/// as non-numeric text in a NUMBER-formatted cell, is passed through
/// unconverted, tolerating sheets that are presentation-formatted but not
/// truly typed. A value whose runtime type the conversion cannot operate on
/// at all, such as a boolean in a DATE-formatted cell, is a fatal
/// [`Error::FormatMismatch`].
pub fn decode_cell(value: Option<&WireValue>, format: Option<NumberFormatType>) -> Result<CellValue> {
    let Some(value) = value else {
        return Ok(CellValue::Empty);
    };
    if value.is_falsy() {
        return Ok(match value {
            WireValue::Text(_) => CellValue::Empty,
            _ => identity(value),
        });
    }
    let Some(format) = format else {
        return Ok(identity(value));
    };

    match format {
        NumberFormatType::Unspecified => Ok(identity(value)),

        NumberFormatType::Text => Ok(CellValue::Text(value.to_string())),

        NumberFormatType::Number
        | NumberFormatType::Percent
        | NumberFormatType::Currency
        | NumberFormatType::Scientific => match value {
            WireValue::Number(n) => Ok(CellValue::Number(*n)),
            WireValue::Text(s) => Ok(match s.trim().parse::<f64>() {
                Ok(n) => CellValue::Number(n),
                Err(_) => CellValue::Text(s.clone()),
            }),
            WireValue::Bool(_) => Err(mismatch(value, format)),
        },

        NumberFormatType::Date => match value {
            WireValue::Number(n) => Ok(date_from_serial(*n)
                .map(CellValue::Date)
                .unwrap_or(CellValue::Number(*n))),
            _ => Err(mismatch(value, format)),
        },

        NumberFormatType::Time => match value {
            WireValue::Number(n) => Ok(time_from_serial(*n)
                .map(CellValue::Time)
                .unwrap_or(CellValue::Number(*n))),
            _ => Err(mismatch(value, format)),
        },

        NumberFormatType::DateTime => match value {
            WireValue::Number(n) => Ok(datetime_from_serial(*n)
                .map(CellValue::DateTime)
                .unwrap_or(CellValue::Number(*n))),
            _ => Err(mismatch(value, format)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_serial_date_round_trip() {
        // 2016-01-01 is 42370 days after 1899-12-30
        assert_eq!(date_from_serial(42370.0), Some(date(2016, 1, 1)));
        assert_eq!(CellValue::Date(date(2016, 1, 1)).to_serial(), Some(42370.0));
    }

    #[test]
    fn test_serial_time() {
        let t = time_from_serial(0.5).unwrap();
        assert_eq!(t, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(CellValue::Time(t).to_serial(), Some(0.5));

        // Integer days do not leak into the time of day
        assert_eq!(time_from_serial(42370.25).unwrap(), NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    }

    #[test]
    fn test_serial_datetime() {
        let dt = datetime_from_serial(42370.5).unwrap();
        assert_eq!(dt.date(), date(2016, 1, 1));
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(CellValue::DateTime(dt).to_serial(), Some(42370.5));
    }

    #[test]
    fn test_decode_absent_is_empty() {
        assert_eq!(decode_cell(None, None).unwrap(), CellValue::Empty);
        // Format never forces a conversion of nothing
        assert_eq!(
            decode_cell(None, Some(NumberFormatType::Date)).unwrap(),
            CellValue::Empty
        );
    }

    #[test]
    fn test_decode_falsy_values_skip_conversion() {
        // Zero under a DATE format stays a plain zero
        assert_eq!(
            decode_cell(Some(&WireValue::Number(0.0)), Some(NumberFormatType::Date)).unwrap(),
            CellValue::Number(0.0)
        );
        assert_eq!(
            decode_cell(Some(&WireValue::Bool(false)), Some(NumberFormatType::Number)).unwrap(),
            CellValue::Bool(false)
        );
        assert_eq!(
            decode_cell(Some(&WireValue::Text(String::new())), Some(NumberFormatType::Number))
                .unwrap(),
            CellValue::Empty
        );
    }

    #[test]
    fn test_decode_format_precedence() {
        // Display format wins over the coarse kind
        let v = WireValue::Number(42370.0);
        assert_eq!(
            decode_cell(Some(&v), Some(NumberFormatType::Date)).unwrap(),
            CellValue::Date(date(2016, 1, 1))
        );
        // No display format: coarse kind applies
        assert_eq!(decode_cell(Some(&v), None).unwrap(), CellValue::Number(42370.0));
    }

    #[test]
    fn test_decode_numeric_text_parses() {
        let v = WireValue::Text("12.5".to_string());
        assert_eq!(
            decode_cell(Some(&v), Some(NumberFormatType::Currency)).unwrap(),
            CellValue::Number(12.5)
        );
    }

    #[test]
    fn test_decode_parse_failure_is_lenient() {
        // Non-numeric text under a numeric format passes through unconverted
        let v = WireValue::Text("n/a".to_string());
        assert_eq!(
            decode_cell(Some(&v), Some(NumberFormatType::Number)).unwrap(),
            CellValue::Text("n/a".to_string())
        );
    }

    #[test]
    fn test_decode_type_mismatch_is_fatal() {
        let v = WireValue::Bool(true);
        let err = decode_cell(Some(&v), Some(NumberFormatType::Number)).unwrap_err();
        match err {
            Error::FormatMismatch { value, format, actual } => {
                assert_eq!(value, "TRUE");
                assert_eq!(format, "NUMBER");
                assert_eq!(actual, "boolean");
            }
            other => panic!("expected FormatMismatch, got {other:?}"),
        }

        // Temporal formats reject non-numeric values outright
        let v = WireValue::Text("tomorrow".to_string());
        assert!(matches!(
            decode_cell(Some(&v), Some(NumberFormatType::Date)),
            Err(Error::FormatMismatch { .. })
        ));
    }

    #[test]
    fn test_decode_text_format_renders() {
        assert_eq!(
            decode_cell(Some(&WireValue::Number(7.0)), Some(NumberFormatType::Text)).unwrap(),
            CellValue::Text("7".to_string())
        );
    }

    #[test]
    fn test_to_wire() {
        assert_eq!(CellValue::Empty.to_wire(), Json::Null);
        assert_eq!(CellValue::Number(f64::NAN).to_wire(), Json::Null);
        assert_eq!(CellValue::Number(2.5).to_wire(), serde_json::json!(2.5));
        assert_eq!(CellValue::Bool(true).to_wire(), serde_json::json!(true));
        assert_eq!(
            CellValue::Date(date(2016, 1, 1)).to_wire(),
            serde_json::json!("2016-01-01")
        );
        assert_eq!(
            CellValue::Time(NaiveTime::from_hms_opt(9, 30, 5).unwrap()).to_wire(),
            serde_json::json!("09:30:05")
        );
        assert_eq!(
            CellValue::DateTime(date(2016, 1, 1).and_hms_opt(9, 30, 5).unwrap()).to_wire(),
            serde_json::json!("2016-01-01 09:30:05")
        );
    }

    #[test]
    fn test_format_type_wire_names() {
        let fmt: NumberFormatType = serde_json::from_str("\"DATE_TIME\"").unwrap();
        assert_eq!(fmt, NumberFormatType::DateTime);
        // Unknown formats collapse to Unspecified rather than failing the fetch
        let fmt: NumberFormatType = serde_json::from_str("\"SOME_FUTURE_FORMAT\"").unwrap();
        assert_eq!(fmt, NumberFormatType::Unspecified);
    }
}
