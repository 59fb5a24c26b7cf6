//! Free-text filter over the record store.
//!
//! # Responsibility
//! - Derive the filtered view from the store and the current search text.
//!
//! # Invariants
//! - The result is a subsequence of the input, in input order.
//! - Empty search text returns every record.
//! - Matching is a case-insensitive substring test on the name, the
//!   `YYYY-MM-DD` date text and the display value text. The key is not
//!   searched.

use crate::model::record::Record;

/// Returns the records matching `text`, preserving store order.
pub fn filter_records<'a>(records: &'a [Record], text: &str) -> Vec<&'a Record> {
    if text.is_empty() {
        return records.iter().collect();
    }
    let needle = text.to_lowercase();
    records
        .iter()
        .filter(|record| record_matches(record, needle.as_str()))
        .collect()
}

/// Tests one record against an already lowercased needle.
pub fn record_matches(record: &Record, lowercase_needle: &str) -> bool {
    searchable_texts(record)
        .iter()
        .any(|text| text.to_lowercase().contains(lowercase_needle))
}

fn searchable_texts(record: &Record) -> [String; 3] {
    [record.name.clone(), record.date_text(), record.value_text()]
}

#[cfg(test)]
mod tests {
    use super::filter_records;
    use crate::model::record::{Record, RecordFields};
    use chrono::NaiveDate;

    fn record(name: &str, date: (i32, u32, u32), value: f64) -> Record {
        Record::new(RecordFields {
            name: name.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            value,
        })
    }

    #[test]
    fn matches_cyrillic_case_insensitively() {
        let records = vec![record("Иван", (2024, 5, 1), 1.0)];
        assert_eq!(filter_records(&records, "иВА").len(), 1);
    }

    #[test]
    fn matches_date_and_value_text() {
        let records = vec![
            record("a", (2023, 12, 31), 42.5),
            record("b", (2024, 1, 1), 7.0),
        ];
        let by_date = filter_records(&records, "2023-12");
        assert_eq!(by_date.len(), 1);
        assert_eq!(by_date[0].name, "a");

        let by_value = filter_records(&records, "42.5");
        assert_eq!(by_value.len(), 1);
        assert_eq!(by_value[0].name, "a");
    }

    #[test]
    fn integral_value_does_not_match_decimal_point() {
        let records = vec![record("x", (2024, 1, 1), 10.0)];
        assert!(filter_records(&records, "10.").is_empty());
    }

    #[test]
    fn key_text_is_not_searched() {
        let records = vec![record("x", (2024, 1, 1), 1.0)];
        let key_text = records[0].key.to_string();
        assert!(filter_records(&records, &key_text).is_empty());
    }
}
