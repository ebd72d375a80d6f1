//! Distributor stock feed client
//!
//! Downloads the stock workbook (xlsx) and reduces it to one label per
//! row by combining the ARTIST and TITLE columns as "ARTIST - TITLE".
//! Exact duplicate labels are dropped here, before the comparison engine
//! sees them; rows missing either cell are skipped and counted.
//!
//! TLS verification is on by default. The distributor host has a history
//! of certificate problems, so `accept_invalid_certs` exists as an
//! explicit configuration opt-out.

use calamine::{Data, DataType, Reader, Xlsx};
use shelfdiff_common::config::StockFeedSettings;
use shelfdiff_common::{Error, Result};
use std::collections::HashSet;
use std::io::Cursor;
use std::time::Duration;

const USER_AGENT: &str = concat!("shelfdiff/", env!("CARGO_PKG_VERSION"));

const ARTIST_HEADER: &str = "ARTIST";
const TITLE_HEADER: &str = "TITLE";

/// Parsed stock feed: deduplicated labels plus a skipped-row count
#[derive(Debug)]
pub struct StockFeed {
    pub labels: Vec<String>,
    /// Rows dropped because ARTIST or TITLE was missing/empty
    pub skipped_rows: usize,
}

/// Stock feed download client
#[derive(Debug, Clone)]
pub struct StockFeedClient {
    http_client: reqwest::Client,
    url: String,
}

impl StockFeedClient {
    pub fn new(settings: &StockFeedSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        Ok(Self {
            http_client,
            url: settings.url.clone(),
        })
    }

    /// Download the workbook and reduce it to deduplicated labels.
    pub async fn fetch_labels(&self) -> Result<StockFeed> {
        tracing::debug!(url = %self.url, "Downloading stock workbook");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "Stock feed returned HTTP {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let feed = parse_workbook(&bytes)?;
        tracing::info!(
            labels = feed.labels.len(),
            skipped_rows = feed.skipped_rows,
            "Stock feed fetched"
        );
        Ok(feed)
    }
}

/// Decode the first worksheet of an xlsx workbook into labels.
pub fn parse_workbook(bytes: &[u8]) -> Result<StockFeed> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))
        .map_err(|e| Error::Parse(format!("Workbook decode failed: {}", e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| Error::Parse("Workbook has no worksheets".to_string()))?
        .map_err(|e| Error::Parse(format!("Worksheet read failed: {}", e)))?;

    let rows: Vec<Vec<Option<String>>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    labels_from_rows(&rows)
}

/// Cell to text. Numeric cells stringify (some TITLE values are numbers);
/// empty and error cells yield None.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        other => other.as_string(),
    }
}

/// Reduce a header-plus-data row grid to deduplicated "ARTIST - TITLE"
/// labels, counting rows with a missing or blank cell.
pub fn labels_from_rows(rows: &[Vec<Option<String>>]) -> Result<StockFeed> {
    let header = rows
        .first()
        .ok_or_else(|| Error::Parse("Workbook is empty".to_string()))?;

    let artist_col = find_column(header, ARTIST_HEADER)?;
    let title_col = find_column(header, TITLE_HEADER)?;

    let mut labels = Vec::with_capacity(rows.len().saturating_sub(1));
    let mut seen = HashSet::new();
    let mut skipped_rows = 0usize;

    for row in &rows[1..] {
        let artist = row.get(artist_col).and_then(|c| c.as_deref());
        let title = row.get(title_col).and_then(|c| c.as_deref());

        match (artist, title) {
            (Some(artist), Some(title))
                if !artist.trim().is_empty() && !title.trim().is_empty() =>
            {
                let label = format!("{} - {}", artist, title);
                // Exact duplicates only; the engine handles case/whitespace
                if seen.insert(label.clone()) {
                    labels.push(label);
                }
            }
            _ => skipped_rows += 1,
        }
    }

    if skipped_rows > 0 {
        tracing::warn!(skipped_rows, "Stock feed rows missing ARTIST or TITLE");
    }

    Ok(StockFeed {
        labels,
        skipped_rows,
    })
}

fn find_column(header: &[Option<String>], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| {
            cell.as_deref()
                .is_some_and(|text| text.trim().eq_ignore_ascii_case(name))
        })
        .ok_or_else(|| Error::Parse(format!("Workbook is missing the {} column", name)))
}
