//! Domain types for PriceStory.

pub mod group;
pub mod record;
pub mod scene;

pub use group::{CatalogError, GroupCatalog, IndicatorGroup};
pub use record::{Dataset, Record};
pub use scene::Scene;

/// Indicator key type alias — a CSV column name such as `Gold_Price`.
pub type IndicatorKey = String;
