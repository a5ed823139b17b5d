//! Pipeline orchestration - extract, clean, load, log, backup

use crate::etl::artifacts::{write_backup, write_quality_log};
use crate::etl::clean::clean_batch;
use crate::etl::error::EtlError;
use crate::etl::extract::extract_raw_reservations;
use crate::etl::load::load_cleaned_reservations;
use crate::etl::types::RunReport;
use anyhow::{Context, Result};
use sqlx::PgPool;
use std::path::PathBuf;
use tracing::info;

/// Runtime configuration, read from the environment
pub struct Config {
    pub database_url: String,
    pub extract_window_days: i64,
    pub log_dir: PathBuf,
    pub backup_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Config {
            database_url: std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            extract_window_days: std::env::var("EXTRACT_WINDOW_DAYS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("EXTRACT_WINDOW_DAYS must be a valid number of days")?,
            log_dir: std::env::var("LOG_DIR")
                .unwrap_or_else(|_| "logs".to_string())
                .into(),
            backup_dir: std::env::var("BACKUP_DIR")
                .unwrap_or_else(|_| "backups".to_string())
                .into(),
        })
    }
}

/// Run the full ETL sequence once.
///
/// The five steps run strictly in order, each feeding the next: extract raw
/// reservations, clean them, load the accepted subset, write the quality
/// log, write the backup snapshot. The first failing step aborts the rest
/// and propagates its error; artifacts written by earlier steps are left in
/// place.
pub async fn run_pipeline(db: &PgPool, config: &Config) -> Result<RunReport, EtlError> {
    info!("Step 1: Extracting raw reservations...");
    let raw = extract_raw_reservations(db, config.extract_window_days).await?;

    info!("Step 2: Cleaning and validating...");
    let (cleaned, metrics) = clean_batch(&raw);

    info!("Step 3: Loading cleaned reservations...");
    let stats = load_cleaned_reservations(db, &cleaned).await?;

    info!("Step 4: Writing quality log...");
    let log_file = write_quality_log(&config.log_dir, &metrics, stats.inserted)?;

    info!("Step 5: Writing backup snapshot...");
    let backup_file = write_backup(&config.backup_dir, &cleaned)?;

    Ok(RunReport {
        processed_records: metrics.records_cleaned,
        quality_score: metrics.data_quality_score,
        log_file,
        backup_file,
    })
}
