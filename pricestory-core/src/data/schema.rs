//! Header validation against the declared group catalog.

use thiserror::Error;

use crate::domain::GroupCatalog;

/// Name of the required date column.
pub const DATE_COLUMN: &str = "Date";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("missing required '{DATE_COLUMN}' column")]
    MissingDateColumn,

    #[error("missing required column: {0}")]
    MissingColumn(String),
}

/// Check the CSV header against the catalog and return the date column index.
///
/// Every key a group declares must have a matching column. An absent key
/// would otherwise read as an all-NaN series and draw nothing, silently.
/// Columns the catalog does not declare are allowed and ignored.
pub fn validate_header(
    headers: &csv::StringRecord,
    catalog: &GroupCatalog,
) -> Result<usize, SchemaError> {
    let date_idx = headers
        .iter()
        .position(|h| h.trim() == DATE_COLUMN)
        .ok_or(SchemaError::MissingDateColumn)?;

    for key in catalog.all_keys() {
        if !headers.iter().any(|h| h.trim() == key) {
            return Err(SchemaError::MissingColumn(key));
        }
    }

    Ok(date_idx)
}
