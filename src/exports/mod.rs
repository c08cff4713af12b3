mod csv;
mod export_error;
mod json;

pub use csv::{write_csv, CSV_FILE};
pub use export_error::ExportError;
pub use json::{write_json, JSON_FILE};
