//! shelfdiff-rc library interface
//!
//! Exposes the router, state, engine, and collaborators for integration
//! testing.

pub mod api;
pub mod engine;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use shelfdiff_common::config::StrategyKind;
use shelfdiff_common::Settings;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::engine::CompareStrategy;
use crate::services::{CatalogClient, StockFeedClient};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Service configuration, loaded once at startup
    pub settings: Arc<Settings>,
    /// Stock feed (Excel workbook) download client
    pub stock_feed: StockFeedClient,
    /// Storefront catalog API client
    pub catalog: CatalogClient,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Build state and the HTTP clients from configuration.
    pub fn new(settings: Settings) -> shelfdiff_common::Result<Self> {
        let stock_feed = StockFeedClient::new(&settings.stock_feed)?;
        let catalog = CatalogClient::new(&settings.catalog)?;

        Ok(Self {
            settings: Arc::new(settings),
            stock_feed,
            catalog,
            startup_time: Utc::now(),
        })
    }

    /// Map the configured strategy onto the engine's comparator selection.
    pub fn compare_strategy(&self) -> CompareStrategy {
        match self.settings.compare.strategy {
            StrategyKind::Set => CompareStrategy::SetBased,
            StrategyKind::Vectorized => CompareStrategy::Vectorized,
            StrategyKind::Chunked => CompareStrategy::Chunked {
                chunk_size: self.settings.compare.chunk_size,
            },
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::health_routes())
        .merge(api::process_routes())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
