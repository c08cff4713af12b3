// src/exports/csv.rs
use crate::collector::models::PropertyRecord;
use crate::exports::ExportError;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub const CSV_FILE: &str = "shanghai_xuhui_properties.csv";

// BOM keeps spreadsheet tools from mangling the UTF-8 text.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Header row plus one row per record, RFC-4180 quoting.
pub fn write_csv(path: &Path, records: &[PropertyRecord]) -> Result<(), ExportError> {
    let file = File::create(path).map_err(|e| ExportError::Io(e.to_string()))?;
    let mut writer = BufWriter::new(file);

    write_csv_to(&mut writer, records).map_err(|e| ExportError::Io(e.to_string()))?;
    writer.flush().map_err(|e| ExportError::Io(e.to_string()))?;

    Ok(())
}

fn write_csv_to<W: Write>(w: &mut W, records: &[PropertyRecord]) -> io::Result<()> {
    w.write_all(UTF8_BOM)?;

    let headers: Vec<String> = PropertyRecord::CSV_HEADERS
        .iter()
        .map(|h| h.to_string())
        .collect();
    write_row(w, &headers)?;

    for record in records {
        write_row(w, &record.csv_row())?;
    }

    Ok(())
}

fn needs_quotes(field: &str) -> bool {
    field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
}

fn write_row<W: Write>(w: &mut W, row: &[String]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, ",")?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{escaped}\"")?;
        } else {
            write!(w, "{cell}")?;
        }
    }
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commas_and_quotes_are_escaped() {
        let mut out = Vec::new();
        let row = vec![
            "Tianlin Road 123, Xuhui District, Shanghai".to_string(),
            "plain".to_string(),
            "say \"hi\"".to_string(),
        ];
        write_row(&mut out, &row).unwrap();

        let line = String::from_utf8(out).unwrap();
        assert_eq!(
            line,
            "\"Tianlin Road 123, Xuhui District, Shanghai\",plain,\"say \"\"hi\"\"\"\n"
        );
    }
}
