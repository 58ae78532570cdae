//! Record and Dataset — the loaded price table.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::IndicatorKey;

/// One dataset row: a calendar date plus one value per indicator column.
///
/// Blank or unparseable cells are stored as NaN so every record carries the
/// full column set of its file. A BTreeMap keeps iteration order stable,
/// which the dataset fingerprint relies on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub date: NaiveDate,
    pub values: BTreeMap<IndicatorKey, f64>,
}

impl Record {
    /// Value for a key, NaN when the key is absent.
    pub fn value(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(f64::NAN)
    }

    /// True if the key has a finite value on this row.
    pub fn has_value(&self, key: &str) -> bool {
        self.value(key).is_finite()
    }
}

/// Ordered sequence of records, sorted ascending by date.
///
/// Duplicate dates are permitted; rows sharing a date keep their file order
/// (the constructor sorts stably).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.date);
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First and last dates, None for an empty dataset.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.records.first(), self.records.last()) {
            (Some(first), Some(last)) => Some((first.date, last.date)),
            _ => None,
        }
    }

    /// Most recent row carrying a finite value for `key`.
    ///
    /// Inline chart labels anchor here, so gaps at the tail of a series
    /// must be skipped rather than labeled at NaN.
    pub fn last_valid_point(&self, key: &str) -> Option<(NaiveDate, f64)> {
        self.records
            .iter()
            .rev()
            .find(|r| r.has_value(key))
            .map(|r| (r.date, r.value(key)))
    }

    /// Largest finite value across the given keys, None when no cell is finite.
    pub fn max_value(&self, keys: &[IndicatorKey]) -> Option<f64> {
        let mut max: Option<f64> = None;
        for record in &self.records {
            for key in keys {
                let v = record.value(key);
                if v.is_finite() && max.map_or(true, |m| v > m) {
                    max = Some(v);
                }
            }
        }
        max
    }

    /// Number of rows with a finite value for `key`.
    pub fn valid_count(&self, key: &str) -> usize {
        self.records.iter().filter(|r| r.has_value(key)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: NaiveDate, gold: f64, silver: f64) -> Record {
        let mut values = BTreeMap::new();
        values.insert("Gold_Price".to_string(), gold);
        values.insert("Silver_Price".to_string(), silver);
        Record { date, values }
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn constructor_sorts_by_date() {
        let ds = Dataset::new(vec![
            record(d(2022, 5, 1), 1800.0, 21.0),
            record(d(2020, 1, 2), 1550.0, 18.0),
            record(d(2021, 3, 9), 1700.0, 25.0),
        ]);
        let dates: Vec<NaiveDate> = ds.records().iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![d(2020, 1, 2), d(2021, 3, 9), d(2022, 5, 1)]);
    }

    #[test]
    fn missing_key_reads_as_nan() {
        let ds = Dataset::new(vec![record(d(2020, 1, 2), 1550.0, 18.0)]);
        assert!(ds.records()[0].value("Copper_Price").is_nan());
        assert!(!ds.records()[0].has_value("Copper_Price"));
    }

    #[test]
    fn last_valid_point_skips_trailing_nans() {
        let ds = Dataset::new(vec![
            record(d(2020, 1, 2), 1550.0, 18.0),
            record(d(2020, 1, 3), 1560.0, f64::NAN),
            record(d(2020, 1, 6), f64::NAN, f64::NAN),
        ]);
        assert_eq!(ds.last_valid_point("Gold_Price"), Some((d(2020, 1, 3), 1560.0)));
        assert_eq!(ds.last_valid_point("Silver_Price"), Some((d(2020, 1, 2), 18.0)));
        assert_eq!(ds.last_valid_point("Copper_Price"), None);
    }

    #[test]
    fn max_value_ignores_nans() {
        let ds = Dataset::new(vec![
            record(d(2020, 1, 2), 1550.0, f64::NAN),
            record(d(2020, 1, 3), f64::NAN, 18.0),
        ]);
        let keys = vec!["Gold_Price".to_string(), "Silver_Price".to_string()];
        assert_eq!(ds.max_value(&keys), Some(1550.0));
        assert_eq!(ds.max_value(&["Copper_Price".to_string()]), None);
    }

    #[test]
    fn empty_dataset_has_no_range() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.date_range(), None);
        assert_eq!(ds.max_value(&["Gold_Price".to_string()]), None);
    }

    #[test]
    fn duplicate_dates_are_kept_in_file_order() {
        let ds = Dataset::new(vec![
            record(d(2020, 1, 2), 1.0, 0.0),
            record(d(2020, 1, 2), 2.0, 0.0),
        ]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].value("Gold_Price"), 1.0);
        assert_eq!(ds.records()[1].value("Gold_Price"), 2.0);
    }
}
