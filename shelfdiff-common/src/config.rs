//! Configuration loading for the shelfdiff reconciler
//!
//! All tunables live in an explicit `Settings` structure that is loaded
//! once at startup and passed into the collaborators that need it. Source
//! URLs are configuration, never compile-time constants.
//!
//! Resolution priority per field: environment variable, then TOML config
//! file, then compiled default.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default upstream endpoints, overridable via TOML or environment
const DEFAULT_STOCK_FEED_URL: &str =
    "https://www.cobraside.com/catalog/instock/STK_With_QTY.xlsx";
const DEFAULT_CATALOG_API_URL: &str =
    "https://workflows.poptechstudio.ai/webhook/get-woo-data";

/// Comparison strategy selected by configuration
///
/// The engine never auto-selects; the caller picks one based on expected
/// input size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Per-row normalize + membership test (default, no extra memory)
    Set,
    /// Bulk column normalization, then one membership scan
    Vectorized,
    /// Vectorized pass applied per fixed-size batch to bound peak memory
    Chunked,
}

impl Default for StrategyKind {
    fn default() -> Self {
        StrategyKind::Set
    }
}

/// Stock feed (Excel workbook) fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StockFeedSettings {
    /// Workbook download URL
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Disable TLS certificate verification for the workbook host.
    /// Off by default; enabling it logs a warning at startup.
    pub accept_invalid_certs: bool,
}

impl Default for StockFeedSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_STOCK_FEED_URL.to_string(),
            timeout_secs: 30,
            accept_invalid_certs: false,
        }
    }
}

/// Catalog (storefront REST API) fetch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog endpoint returning a JSON array of {id, name} objects
    pub url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_CATALOG_API_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

/// Comparison engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareSettings {
    /// Which comparator strategy `/process` runs
    pub strategy: StrategyKind,
    /// Batch size for the chunked strategy (rows per batch)
    pub chunk_size: usize,
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::default(),
            chunk_size: 10_000,
        }
    }
}

/// Full service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP listen port
    pub listen_port: u16,
    /// Directory for date-stamped CSV artifacts of the fetched datasets.
    /// No artifacts are written when unset.
    pub artifact_dir: Option<PathBuf>,
    pub stock_feed: StockFeedSettings,
    pub catalog: CatalogSettings,
    pub compare: CompareSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            listen_port: 5760,
            artifact_dir: None,
            stock_feed: StockFeedSettings::default(),
            catalog: CatalogSettings::default(),
            compare: CompareSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from an optional TOML file, then apply environment
    /// overrides and validate.
    ///
    /// A missing explicit config path is an error; no path at all falls
    /// back to compiled defaults.
    pub fn load(config_path: Option<&Path>) -> Result<Settings> {
        let mut settings = match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::Config(format!("Read config {} failed: {}", path.display(), e))
                })?;
                toml::from_str(&content).map_err(|e| {
                    Error::Config(format!("Parse config {} failed: {}", path.display(), e))
                })?
            }
            None => Settings::default(),
        };

        settings.apply_env_overrides();
        settings.validate()?;
        Ok(settings)
    }

    /// Environment variables take priority over the TOML file
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("SHELFDIFF_STOCK_FEED_URL") {
            self.stock_feed.url = url;
        }
        if let Ok(url) = std::env::var("SHELFDIFF_CATALOG_API_URL") {
            self.catalog.url = url;
        }
        if let Ok(dir) = std::env::var("SHELFDIFF_ARTIFACT_DIR") {
            self.artifact_dir = Some(PathBuf::from(dir));
        }
    }

    fn validate(&self) -> Result<()> {
        if self.stock_feed.url.trim().is_empty() {
            return Err(Error::Config("stock_feed.url must not be empty".to_string()));
        }
        if self.catalog.url.trim().is_empty() {
            return Err(Error::Config("catalog.url must not be empty".to_string()));
        }
        if self.compare.chunk_size == 0 {
            return Err(Error::Config(
                "compare.chunk_size must be at least 1".to_string(),
            ));
        }
        if self.stock_feed.accept_invalid_certs {
            warn!(
                "TLS certificate verification DISABLED for stock feed host {}",
                self.stock_feed.url
            );
        }
        Ok(())
    }
}
