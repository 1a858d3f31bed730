//! Progress history recorded in dated sheet columns.
//!
//! Many plan sheets keep a column per session date to the right of the
//! exercise columns, with the weight or reps achieved that day.

use crate::patterns::HISTORY_CODE;
use crate::sheet::SheetTable;
use crate::types::col;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Header names of the exercise detail columns, never treated as dates
const DETAIL_COLUMNS: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H", "I"];

/// One recorded value for an exercise on a date
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub value: String,
}

/// History entries keyed by `exercise-{rowIndex}`
///
/// `rowIndex` is the position of the row in [`SheetTable::rows`], so the CSV
/// header record is not counted while blank and marker rows are. Keys are
/// not assembled exercise ids: one sheet row backs at most one exercise, and
/// the row index is the only link between the two.
pub type SheetHistory = BTreeMap<String, Vec<HistoryEntry>>;

/// Collect dated values for every exercise row of the sheet
pub fn extract_history(table: &SheetTable) -> SheetHistory {
    let mut date_columns: Vec<(usize, NaiveDate)> = table
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !DETAIL_COLUMNS.contains(&header.as_str()))
        .filter_map(|(index, header)| parse_date(header).map(|date| (index, date)))
        .collect();
    date_columns.sort_by_key(|(_, date)| *date);

    let mut history = SheetHistory::new();
    if date_columns.is_empty() {
        return history;
    }

    for (row_index, row) in table.rows.iter().enumerate() {
        let code = row.cell(col::CODE);
        let name = row.cell(col::NAME);
        if code.is_empty()
            || name.is_empty()
            || !(HISTORY_CODE.is_match(code) || HISTORY_CODE.is_match(name))
        {
            continue;
        }

        let entries: Vec<HistoryEntry> = date_columns
            .iter()
            .filter_map(|(column, date)| {
                let value = row.cell(*column);
                (!value.trim().is_empty()).then(|| HistoryEntry {
                    date: *date,
                    value: value.to_string(),
                })
            })
            .collect();

        if !entries.is_empty() {
            history.insert(format!("exercise-{}", row_index), entries);
        }
    }

    tracing::debug!(
        "Extracted history for {} exercises across {} date columns",
        history.len(),
        date_columns.len()
    );
    history
}

/// Parse a header as a date
///
/// Day-first formats are tried before month-first ones, so `03/04/24` is the
/// 3rd of April while `03/25/24` falls through to March 25th.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Some((y, m, d)) = split3(text, '-') {
        if y.len() == 4 {
            return ymd(y, m, d);
        }
        return None;
    }

    let (a, b, y) = split3(text, '/')?;
    let year = match y.len() {
        2 => format!("20{}", y),
        4 => y.to_string(),
        _ => return None,
    };

    ymd(&year, b, a).or_else(|| ymd(&year, a, b))
}

fn split3(text: &str, sep: char) -> Option<(&str, &str, &str)> {
    let mut parts = text.split(sep);
    let first = parts.next()?;
    let second = parts.next()?;
    let third = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((first, second, third))
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    let short = |s: &str| !s.is_empty() && s.len() <= 2 && s.chars().all(|c| c.is_ascii_digit());
    if !year.chars().all(|c| c.is_ascii_digit()) || !short(month) || !short(day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}
