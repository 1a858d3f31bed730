//! Building CSV export URLs for Google Sheets plans.
//!
//! Fetching is left to the caller; this only rewrites the URL a user pastes
//! into one that returns the CSV for a single phase tab.

use crate::{Error, Result};
use url::Url;

const SHEETS_HOST: &str = "docs.google.com";

/// CSV export URL for the tab `gid` of the sheet at `sheet_url`
///
/// Published links (`/d/e/<key>/pub` or `/pubhtml`) are pointed at `/pub`
/// with `output=csv`, keeping a `gid` already in the query and adding
/// `gid` otherwise. Regular edit/share links are rewritten to the
/// `export?format=csv` endpoint. Fragments are dropped.
pub fn published_csv_url(sheet_url: &str, gid: &str) -> Result<String> {
    let sheet_url = sheet_url.trim();
    let mut url = parse_sheet_url(sheet_url)?;

    let segments: Vec<String> = url
        .path_segments()
        .map(|segments| segments.map(str::to_string).collect())
        .unwrap_or_default();

    match segments.as_slice() {
        [spreadsheets, d, e, key, page, ..]
            if spreadsheets == "spreadsheets"
                && d == "d"
                && e == "e"
                && !key.is_empty()
                && (page == "pub" || page == "pubhtml") =>
        {
            let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
            match pairs.iter_mut().find(|(name, _)| name == "output") {
                Some(output) => output.1 = "csv".into(),
                None => pairs.push(("output".into(), "csv".into())),
            }
            if !pairs.iter().any(|(name, _)| name == "gid") {
                pairs.push(("gid".into(), gid.into()));
            }

            url.set_path(&format!("/spreadsheets/d/e/{}/pub", key));
            url.set_fragment(None);
            url.query_pairs_mut().clear().extend_pairs(&pairs);
            Ok(url.to_string())
        }
        [spreadsheets, d, e, ..] if spreadsheets == "spreadsheets" && d == "d" && e == "e" => {
            Err(Error::SheetUrl(format!(
                "published link is not a /pub or /pubhtml page: {}",
                sheet_url
            )))
        }
        [spreadsheets, d, id, ..] if spreadsheets == "spreadsheets" && d == "d" && !id.is_empty() => {
            url.set_path(&format!("/spreadsheets/d/{}/export", id));
            url.set_fragment(None);
            url.set_query(None);
            url.query_pairs_mut()
                .append_pair("format", "csv")
                .append_pair("gid", gid);
            Ok(url.to_string())
        }
        _ => Err(Error::SheetUrl(format!(
            "no spreadsheet id in {}",
            sheet_url
        ))),
    }
}

fn parse_sheet_url(sheet_url: &str) -> Result<Url> {
    let with_scheme = if sheet_url.contains("://") {
        sheet_url.to_string()
    } else {
        format!("https://{}", sheet_url)
    };

    let url = Url::parse(&with_scheme)
        .map_err(|e| Error::SheetUrl(format!("invalid URL {}: {}", sheet_url, e)))?;

    if url.host_str() != Some(SHEETS_HOST) {
        return Err(Error::SheetUrl(format!(
            "not a Google Sheets URL: {}",
            sheet_url
        )));
    }
    Ok(url)
}
