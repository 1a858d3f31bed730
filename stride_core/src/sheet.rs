//! Reading exported sheet CSV into positional rows.

use crate::{Result, Row};
use csv::ReaderBuilder;
use serde::Serialize;

/// A parsed sheet: the header record (if any) and the data rows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Parse CSV exported from a spreadsheet
///
/// Cells must be valid UTF-8 and records may have any number of fields.
/// Empty lines are skipped by the reader; rows made only of empty cells are
/// kept and left to the assembler.
pub fn read_sheet(csv: &[u8], has_headers: bool) -> Result<SheetTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(has_headers)
        .flexible(true)
        .from_reader(csv);

    let headers = if has_headers {
        reader.headers()?.iter().map(str::to_string).collect()
    } else {
        Vec::new()
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().collect::<Row>());
    }

    tracing::debug!(
        "Read sheet with {} header cells and {} rows",
        headers.len(),
        rows.len()
    );

    Ok(SheetTable { headers, rows })
}

/// Header layout of an exported sheet
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SheetFormat {
    /// Named `Name` / `Sets` / `Reps` columns
    Standard,
    /// Spreadsheet-style `A`, `B`, `C`... headers
    Lettered,
    /// Numeric headers
    Numbered,
    Custom,
}

/// Classify the header row of a sheet
pub fn detect_format(headers: &[String]) -> SheetFormat {
    let has = |name: &str| headers.iter().any(|h| h == name);
    if has("Name") && has("Sets") && has("Reps") {
        return SheetFormat::Standard;
    }

    let lettered = headers
        .iter()
        .filter(|h| h.len() == 1 && h.chars().all(|c| c.is_ascii_uppercase()))
        .count();
    if lettered >= 5 {
        return SheetFormat::Lettered;
    }

    if headers
        .iter()
        .any(|h| !h.is_empty() && h.chars().all(|c| c.is_ascii_digit()))
    {
        return SheetFormat::Numbered;
    }

    SheetFormat::Custom
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_sheet_with_headers() {
        let csv = "Code,Exercise,Sets\nDay 1,Upper Focus\nA1,Push Up,3,10,2-0-1\n";
        let table = read_sheet(csv.as_bytes(), true).unwrap();

        assert_eq!(table.headers, headers(&["Code", "Exercise", "Sets"]));
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cell(0), "Day 1");
        assert_eq!(table.rows[0].cell(2), "");
        assert_eq!(table.rows[1].cells().len(), 5);
    }

    #[test]
    fn test_read_sheet_without_headers() {
        let csv = "Day 1,Upper\nA1,Push Up\n";
        let table = read_sheet(csv.as_bytes(), false).unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_read_sheet_skips_empty_lines_and_keeps_quotes() {
        let csv = "h1,h2\n\nA1,\"Push Up, wide\"\n\n,\n";
        let table = read_sheet(csv.as_bytes(), true).unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cell(1), "Push Up, wide");
        assert!(table.rows[1].is_blank());
    }

    #[test]
    fn test_read_sheet_rejects_invalid_utf8() {
        let result = read_sheet(b"h1,h2\nA1,\xFF\n", true);
        assert!(matches!(result, Err(crate::Error::Csv(_))));
    }

    #[test]
    fn test_read_empty_sheet() {
        let table = read_sheet(b"", true).unwrap();
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(&headers(&["Code", "Name", "Sets", "Reps"])),
            SheetFormat::Standard
        );
        assert_eq!(
            detect_format(&headers(&["A", "B", "C", "D", "E", "F"])),
            SheetFormat::Lettered
        );
        assert_eq!(
            detect_format(&headers(&["A", "B", "1", "2"])),
            SheetFormat::Numbered
        );
        assert_eq!(
            detect_format(&headers(&["Code", "Exercise"])),
            SheetFormat::Custom
        );
        assert_eq!(detect_format(&[]), SheetFormat::Custom);
    }
}
