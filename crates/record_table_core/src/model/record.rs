//! Record domain model.
//!
//! # Responsibility
//! - Define the canonical row stored by the record table.
//! - Provide the textual projections used by search and rendering.
//!
//! # Invariants
//! - `key` is generated once at commit time and never reassigned.
//! - `date` is always rendered as `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// `chrono` format string for stored and displayed dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Opaque identity of a record, used only for equality and list diffing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordKey(Uuid);

impl RecordKey {
    /// Generates a fresh unique key.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parses a key previously rendered with `Display`.
    ///
    /// Returns `None` for anything that is not a valid key token.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl Display for RecordKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Domain fields submitted by a validated form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub date: NaiveDate,
    pub value: f64,
}

/// One table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub key: RecordKey,
    pub name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub value: f64,
}

impl Record {
    /// Creates a record with a freshly generated key.
    pub fn new(fields: RecordFields) -> Self {
        Self::with_key(RecordKey::generate(), fields)
    }

    /// Creates a record that keeps an existing key.
    ///
    /// Used by the edit path, which replaces a row without changing identity.
    pub fn with_key(key: RecordKey, fields: RecordFields) -> Self {
        Self {
            key,
            name: fields.name,
            date: fields.date,
            value: fields.value,
        }
    }

    /// Returns the domain fields without the key.
    pub fn fields(&self) -> RecordFields {
        RecordFields {
            name: self.name.clone(),
            date: self.date,
            value: self.value,
        }
    }

    pub fn date_text(&self) -> String {
        format_date(self.date)
    }

    pub fn value_text(&self) -> String {
        format_value(self.value)
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `YYYY-MM-DD` date, tolerating surrounding whitespace.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

/// Formats a number the way the table displays and searches it.
///
/// Follows JavaScript `Number#toString`: shortest round-trip digits, plain
/// notation for magnitudes in `[1e-6, 1e21)`, exponent form (`1e+21`,
/// `1.5e-7`) outside it, and `0` for negative zero.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digit_count = digits.len() as i32;
    // Decimal point position relative to the first digit.
    let point = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if digit_count <= point && point <= 21 {
        format!("{digits}{}", "0".repeat((point - digit_count) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        format!("{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        format!("0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let (lead, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exponent_sign = if point > 0 { '+' } else { '-' };
        format!("{lead}{fraction}e{exponent_sign}{}", (point - 1).abs())
    };
    format!("{sign}{body}")
}

#[cfg(test)]
mod tests {
    use super::{format_date, format_value, parse_date, Record, RecordFields, RecordKey};
    use chrono::NaiveDate;

    fn fields() -> RecordFields {
        RecordFields {
            name: "Alice".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            value: 10.0,
        }
    }

    #[test]
    fn generated_keys_are_distinct() {
        assert_ne!(RecordKey::generate(), RecordKey::generate());
    }

    #[test]
    fn key_display_parses_back() {
        let key = RecordKey::generate();
        assert_eq!(RecordKey::parse(&key.to_string()), Some(key));
        assert_eq!(RecordKey::parse("not-a-key"), None);
    }

    #[test]
    fn with_key_preserves_identity() {
        let original = Record::new(fields());
        let mut changed = fields();
        changed.value = 20.0;
        let replaced = Record::with_key(original.key, changed);
        assert_eq!(replaced.key, original.key);
        assert_eq!(replaced.value, 20.0);
    }

    #[test]
    fn date_text_uses_iso_calendar_form() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(date), "2024-03-07");
        assert_eq!(parse_date(" 2024-03-07 "), Some(date));
        assert_eq!(parse_date("07.03.2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn value_text_drops_integral_fraction() {
        assert_eq!(format_value(10.0), "10");
        assert_eq!(format_value(10.5), "10.5");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(-3.25), "-3.25");
    }

    #[test]
    fn value_text_switches_to_exponent_form_like_javascript() {
        assert_eq!(format_value(1e21), "1e+21");
        assert_eq!(format_value(1.5e22), "1.5e+22");
        assert_eq!(format_value(-2.5e-7), "-2.5e-7");
        assert_eq!(format_value(1e-7), "1e-7");
        assert_eq!(format_value(1e-6), "0.000001");
        assert_eq!(format_value(123e18), "123000000000000000000");
        assert_eq!(format_value(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_value(f64::NAN), "NaN");
        assert_eq!(format_value(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn record_serializes_date_as_text() {
        let record = Record::new(fields());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["key"], record.key.to_string());
    }
}
