//! Date normalization with ordered format fallback.
//!
//! The price CSV's date format drifted across data revisions, so a single
//! strict format would silently corrupt rows. Tokens are tried against the
//! two formats actually observed, then against a table of common formats;
//! the first parse wins.

use chrono::NaiveDate;
use thiserror::Error;

/// Month/day/2-digit-year, the most common revision.
const FORMAT_MDY2: &str = "%m/%d/%y";

/// Day-month-4-digit-year, seen in the european-formatted revision.
const FORMAT_DMY4: &str = "%d-%m-%Y";

/// Formats tried after the two fixed ones, in order.
const GENERIC_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d.%m.%Y",
    "%b %d, %Y",
    "%d %b %Y",
    "%B %d, %Y",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateParseError {
    #[error("unrecognized date token: {0:?}")]
    Unrecognized(String),
}

/// Normalize a raw date token into a calendar date.
///
/// Tries `%m/%d/%y`, then `%d-%m-%Y`, then [`GENERIC_FORMATS`]. A token that
/// parses under an earlier rule is accepted as-is even when a 2-digit year
/// lands in an unintended century (chrono pivots 00-68 into 20xx and 69-99
/// into 19xx).
pub fn normalize(token: &str) -> Result<NaiveDate, DateParseError> {
    let token = token.trim();
    NaiveDate::parse_from_str(token, FORMAT_MDY2)
        .or_else(|_| NaiveDate::parse_from_str(token, FORMAT_DMY4))
        .or_else(|_| {
            GENERIC_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
                .ok_or_else(|| DateParseError::Unrecognized(token.to_string()))
        })
}
