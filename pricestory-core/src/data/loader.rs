//! CSV loading: normalize dates, coerce values, sort, fingerprint.
//!
//! Rows whose date token fails normalization are dropped and counted, not
//! reported individually. A file with zero valid rows loads into an empty
//! dataset rather than an error; the viewer must still come up.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::data::schema::{self, SchemaError};
use crate::dates;
use crate::domain::{Dataset, GroupCatalog, Record};

/// Errors from the data loading layer.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Where a loaded dataset came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// A CSV file on disk.
    Csv(String),
    /// An in-memory reader.
    Inline,
    /// Generated demo data.
    Synthetic,
}

impl DataSource {
    pub fn label(&self) -> &str {
        match self {
            DataSource::Csv(path) => path,
            DataSource::Inline => "(inline)",
            DataSource::Synthetic => "(synthetic)",
        }
    }
}

/// A loaded dataset plus load provenance.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub dataset: Dataset,
    /// Rows dropped because their date token failed normalization.
    pub rows_dropped: usize,
    /// BLAKE3 hash over dates and values in row order.
    pub fingerprint: String,
    pub source: DataSource,
}

/// Load a dataset from a CSV file.
pub fn load_csv(path: &Path, catalog: &GroupCatalog) -> Result<LoadedDataset, LoadError> {
    let file = std::fs::File::open(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let mut loaded = load_reader(file, catalog)?;
    loaded.source = DataSource::Csv(path.display().to_string());
    Ok(loaded)
}

/// Load a dataset from any reader producing CSV text.
pub fn load_reader<R: Read>(reader: R, catalog: &GroupCatalog) -> Result<LoadedDataset, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let date_idx = schema::validate_header(&headers, catalog)?;

    let mut records = Vec::new();
    let mut rows_dropped = 0usize;

    for row in rdr.records() {
        let row = row?;
        let date = match row.get(date_idx).map(dates::normalize) {
            Some(Ok(date)) => date,
            // Bad or absent date: drop the row, keep count.
            _ => {
                rows_dropped += 1;
                continue;
            }
        };

        let mut values = BTreeMap::new();
        for (i, header) in headers.iter().enumerate() {
            if i == date_idx {
                continue;
            }
            let cell = row.get(i).unwrap_or("");
            values.insert(header.trim().to_string(), parse_value(cell));
        }
        records.push(Record { date, values });
    }

    let dataset = Dataset::new(records);
    let fingerprint = fingerprint(&dataset);
    Ok(LoadedDataset {
        dataset,
        rows_dropped,
        fingerprint,
        source: DataSource::Inline,
    })
}

/// Numeric coercion for one cell: blank or unparseable becomes NaN.
fn parse_value(cell: &str) -> f64 {
    let cell = cell.trim();
    if cell.is_empty() {
        return f64::NAN;
    }
    cell.parse().unwrap_or(f64::NAN)
}

/// Deterministic BLAKE3 hash over dates and values in row order.
///
/// Record values iterate in key order (BTreeMap), so two loads of the same
/// file always hash the same.
pub fn fingerprint(dataset: &Dataset) -> String {
    let mut hasher = blake3::Hasher::new();
    for record in dataset.records() {
        hasher.update(record.date.to_string().as_bytes());
        for (key, value) in &record.values {
            hasher.update(key.as_bytes());
            hasher.update(&value.to_le_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}
