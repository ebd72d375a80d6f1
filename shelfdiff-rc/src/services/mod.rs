//! Upstream dataset collaborators
//!
//! Fetch-and-parse wrappers around the two external sources plus optional
//! CSV artifact persistence. Everything algorithmic lives in `engine`.

pub mod artifact;
pub mod catalog_client;
pub mod stock_feed;

pub use catalog_client::{Catalog, CatalogClient};
pub use stock_feed::{StockFeed, StockFeedClient};
