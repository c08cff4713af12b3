// src/exports/json.rs
use crate::collector::models::PropertyRecord;
use crate::exports::ExportError;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const JSON_FILE: &str = "shanghai_xuhui_properties.json";

/// Array of record objects, 2-space indent. Non-ASCII text is written
/// literally; serde_json does not escape it.
pub fn write_json(path: &Path, records: &[PropertyRecord]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| ExportError::Json(e.to_string()))?;
    writer.flush().map_err(|e| ExportError::Io(e.to_string()))?;

    Ok(())
}
