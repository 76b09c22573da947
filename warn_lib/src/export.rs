//! CSV export.

use std::fs;
use std::path::Path;

use crate::error::WarnError;
use crate::tables::Row;

/// Writes `rows` to `path` as comma-separated values, replacing any existing
/// file. Parent directories are created. Rows may differ in length.
pub fn write_rows_to_csv(path: &Path, rows: &[Row]) -> Result<(), WarnError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    tracing::debug!("Writing {} rows to {}", rows.len(), path.display());
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(cells: &[&str]) -> Row {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn writes_rows_with_quoting() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exports").join("ak.csv");
        let rows = vec![
            row(&["Company", "Location"]),
            row(&["Acme, Inc.", "Juneau"]),
            row(&["Quote \"Co\"", "Nome"]),
        ];
        write_rows_to_csv(&path, &rows).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Company,Location");
        assert_eq!(lines[1], "\"Acme, Inc.\",Juneau");
        assert_eq!(lines[2], "\"Quote \"\"Co\"\"\",Nome");
    }

    #[test]
    fn ragged_rows_allowed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ut.csv");
        let rows = vec![row(&["a", "b", "c"]), row(&["d"])];
        write_rows_to_csv(&path, &rows).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "a,b,c\nd\n");
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sd.csv");
        write_rows_to_csv(&path, &[row(&["old"]), row(&["rows"])]).unwrap();
        write_rows_to_csv(&path, &[row(&["new"])]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn empty_rows_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        write_rows_to_csv(&path, &[]).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
