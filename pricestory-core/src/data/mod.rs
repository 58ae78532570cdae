//! Dataset loading, schema validation, and synthetic demo data.

pub mod loader;
pub mod schema;
pub mod synthetic;

pub use loader::{fingerprint, load_csv, load_reader, DataSource, LoadError, LoadedDataset};
pub use schema::{SchemaError, DATE_COLUMN};
