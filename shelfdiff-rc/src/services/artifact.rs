//! CSV artifact persistence
//!
//! When an artifact directory is configured, both fetched datasets are
//! written out as date-stamped CSV files for offline inspection. Artifact
//! failures never fail the request; the caller logs and moves on.

use chrono::Local;
use shelfdiff_common::{Error, Result};
use std::path::{Path, PathBuf};

use crate::engine::LabeledRecord;

/// Write the stock labels as `stock_DDMMYY.csv` (single column).
pub fn write_stock_labels(dir: &Path, labels: &[String]) -> Result<PathBuf> {
    let path = dated_path(dir, "stock");
    std::fs::create_dir_all(dir)?;

    let mut writer = csv::Writer::from_path(&path).map_err(csv_error)?;
    writer.write_record(["artist_title"]).map_err(csv_error)?;
    for label in labels {
        writer.write_record([label.as_str()]).map_err(csv_error)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = labels.len(), "Stock artifact written");
    Ok(path)
}

/// Write the catalog records as `catalog_DDMMYY.csv` (id, name columns).
pub fn write_catalog_records(dir: &Path, records: &[LabeledRecord]) -> Result<PathBuf> {
    let path = dated_path(dir, "catalog");
    std::fs::create_dir_all(dir)?;

    let mut writer = csv::Writer::from_path(&path).map_err(csv_error)?;
    writer.write_record(["id", "name"]).map_err(csv_error)?;
    for record in records {
        writer
            .write_record([record.id.to_string().as_str(), record.label.as_str()])
            .map_err(csv_error)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = records.len(), "Catalog artifact written");
    Ok(path)
}

fn csv_error(e: csv::Error) -> Error {
    Error::Internal(format!("CSV write failed: {}", e))
}

/// `<dir>/<prefix>_DDMMYY.csv`, stamped with the local date
fn dated_path(dir: &Path, prefix: &str) -> PathBuf {
    let stamp = Local::now().format("%d%m%y");
    dir.join(format!("{}_{}.csv", prefix, stamp))
}
