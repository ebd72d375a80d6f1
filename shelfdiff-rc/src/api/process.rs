//! Reconciliation endpoint
//!
//! `GET /process` runs the full pipeline synchronously: fetch both
//! datasets, build the reference set, scan the catalog, and return the
//! unique identifiers. Nothing is cached between invocations.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

use crate::engine;
use crate::error::ApiResult;
use crate::services::artifact;
use crate::AppState;

/// Response contract for `/process`
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub status: u16,
    pub message: String,
    pub unique_ids: Vec<i64>,
    pub unique_count: usize,
    /// Total wall-clock seconds for the whole pipeline, fetches included
    pub processing_time: f64,
}

/// GET /process
///
/// Fetches the stock feed and the catalog, then reports catalog entries
/// whose label has no counterpart in the stock feed.
pub async fn process_data(State(state): State<AppState>) -> ApiResult<Json<ProcessResponse>> {
    let start = Instant::now();
    info!("Starting reconciliation workflow");

    // Reference side: stock feed labels (no identifiers)
    let stock = state.stock_feed.fetch_labels().await?;

    // Labeled side: catalog records carrying identifiers
    let catalog = state.catalog.fetch_records().await?;

    // Artifact persistence is best-effort and never fails the request
    if let Some(dir) = &state.settings.artifact_dir {
        if let Err(e) = artifact::write_stock_labels(dir, &stock.labels) {
            warn!(error = %e, "Stock artifact write failed");
        }
        if let Err(e) = artifact::write_catalog_records(dir, &catalog.records) {
            warn!(error = %e, "Catalog artifact write failed");
        }
    }

    let strategy = state.compare_strategy();
    let result = engine::reconcile(&catalog.records, &stock.labels, strategy);

    let processing_time = start.elapsed().as_secs_f64();
    info!(
        unique_count = result.unique_count,
        compare_seconds = result.elapsed_seconds,
        total_seconds = processing_time,
        "Reconciliation workflow finished"
    );

    Ok(Json(ProcessResponse {
        status: 200,
        message: "Data processing completed successfully".to_string(),
        unique_ids: result.unique_ids,
        unique_count: result.unique_count,
        processing_time,
    }))
}

/// Build process routes
pub fn process_routes() -> Router<AppState> {
    Router::new().route("/process", get(process_data))
}
