//! Storefront catalog API client
//!
//! Fetches the catalog payload: a JSON array of objects carrying at least
//! an integer `id` and a string `name`. Extra fields are ignored. The
//! `name` becomes the record label downstream.

use serde::Deserialize;
use shelfdiff_common::config::CatalogSettings;
use shelfdiff_common::{Error, Result};
use std::time::Duration;

use crate::engine::LabeledRecord;

const USER_AGENT: &str = concat!("shelfdiff/", env!("CARGO_PKG_VERSION"));

/// Parsed catalog payload
#[derive(Debug)]
pub struct Catalog {
    pub records: Vec<LabeledRecord>,
    /// Elements dropped because they lacked a usable id/name pair
    pub skipped_rows: usize,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    id: i64,
    name: String,
}

/// Catalog API client
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http_client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(settings: &CatalogSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| Error::Fetch(e.to_string()))?;

        Ok(Self {
            http_client,
            url: settings.url.clone(),
        })
    }

    /// Fetch and decode the catalog.
    ///
    /// A non-array payload is rejected as invalid input. Malformed array
    /// elements are skipped and counted, not fatal.
    pub async fn fetch_records(&self) -> Result<Catalog> {
        tracing::debug!(url = %self.url, "Fetching catalog payload");

        let response = self
            .http_client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| Error::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch(format!(
                "Catalog API returned HTTP {}",
                status.as_u16()
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Error::Parse(format!("Catalog payload is not JSON: {}", e)))?;

        let catalog = records_from_value(payload)?;
        tracing::info!(
            records = catalog.records.len(),
            skipped_rows = catalog.skipped_rows,
            "Catalog fetched"
        );
        Ok(catalog)
    }
}

/// Reduce a decoded catalog payload to labeled records.
///
/// The payload must be a JSON array; anything else is invalid input.
/// Elements lacking a usable id/name pair are skipped and counted.
pub fn records_from_value(payload: serde_json::Value) -> Result<Catalog> {
    let items = payload
        .as_array()
        .ok_or_else(|| Error::InvalidInput("Catalog payload is not a JSON array".to_string()))?;

    let mut records = Vec::with_capacity(items.len());
    let mut skipped_rows = 0usize;

    for item in items {
        match serde_json::from_value::<RawItem>(item.clone()) {
            Ok(raw) => records.push(LabeledRecord {
                id: raw.id,
                label: decode_entities(&raw.name),
            }),
            Err(e) => {
                skipped_rows += 1;
                tracing::debug!(error = %e, "Skipping malformed catalog element");
            }
        }
    }

    if skipped_rows > 0 {
        tracing::warn!(
            skipped_rows,
            total = items.len(),
            "Catalog payload contained malformed elements"
        );
    }

    Ok(Catalog {
        records,
        skipped_rows,
    })
}

/// The storefront HTML-escapes ampersands in item names
fn decode_entities(name: &str) -> String {
    name.replace("&amp;", "&")
}
