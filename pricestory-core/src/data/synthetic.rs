//! Deterministic synthetic price data for demos and tests.
//!
//! Each key gets its own seeded random walk, so the same catalog and date
//! range always produce the same dataset. Weekends are skipped to look like
//! real trading data.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{Datelike, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::data::loader::{fingerprint, DataSource, LoadError, LoadedDataset};
use crate::data::schema::DATE_COLUMN;
use crate::domain::{Dataset, GroupCatalog, IndicatorKey, Record};

/// Generate a synthetic dataset covering every key the catalog declares.
pub fn generate(catalog: &GroupCatalog, start: NaiveDate, end: NaiveDate) -> LoadedDataset {
    let keys = catalog.all_keys();

    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        let weekday = current.weekday();
        if weekday != Weekday::Sat && weekday != Weekday::Sun {
            dates.push(current);
        }
        current += chrono::Duration::days(1);
    }

    let series: Vec<Vec<f64>> = keys.iter().map(|key| walk(key, dates.len())).collect();

    let records: Vec<Record> = dates
        .iter()
        .enumerate()
        .map(|(i, &date)| {
            let mut values = BTreeMap::new();
            for (k, key) in keys.iter().enumerate() {
                values.insert(key.clone(), series[k][i]);
            }
            Record { date, values }
        })
        .collect();

    let dataset = Dataset::new(records);
    LoadedDataset {
        fingerprint: fingerprint(&dataset),
        rows_dropped: 0,
        source: DataSource::Synthetic,
        dataset,
    }
}

/// Random walk for one key, seeded from the key name.
fn walk(key: &str, len: usize) -> Vec<f64> {
    let seed: [u8; 32] = *blake3::hash(key.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut price = rng.gen_range(20.0..500.0_f64);
    let mut values = Vec::with_capacity(len);
    for _ in 0..len {
        let daily_return: f64 = rng.gen_range(-0.03..0.03);
        price *= 1.0 + daily_return;
        values.push(price);
    }
    values
}

/// Write a dataset to CSV, dates in the month/day/2-digit-year format.
pub fn write_csv(
    loaded: &LoadedDataset,
    keys: &[IndicatorKey],
    path: &Path,
) -> Result<(), LoadError> {
    let mut wtr = csv::Writer::from_path(path)?;

    let mut header = vec![DATE_COLUMN.to_string()];
    header.extend(keys.iter().cloned());
    wtr.write_record(&header)?;

    for record in loaded.dataset.records() {
        let mut row = vec![record.date.format("%m/%d/%y").to_string()];
        for key in keys {
            let v = record.value(key);
            row.push(if v.is_finite() { format!("{v:.2}") } else { String::new() });
        }
        wtr.write_record(&row)?;
    }

    wtr.flush().map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })
}
