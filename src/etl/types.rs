//! Core data types for the reservation ETL pipeline
//! Pure data structures with no behavior

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Reservation row as stored by the booking system.
///
/// Dates arrive as free-form text because the upstream form does no
/// validation of its own; the cleaner is responsible for parsing them.
/// Immutable once extracted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RawReservation {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub checkin_date: String,
    pub checkout_date: String,
    pub guests: i32,
    pub room_type: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated, normalized reservation ready for the cleaned store.
///
/// `original_id` points back at the raw row; `data_quality_score` is the
/// batch-level score (0.0-1.0), shared by every record of the same run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanedReservation {
    pub original_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub checkin_date: NaiveDate,
    pub checkout_date: NaiveDate,
    pub guests: i32,
    pub room_type: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
    pub data_quality_score: f64,
    pub processed_at: DateTime<Utc>,
}

/// Per-run data quality metrics.
///
/// Rejection counters are not mutually exclusive in principle, but the
/// filters run in a fixed order and each record is counted at most once,
/// under the first filter it fails. `records_cleaned + records_removed`
/// always equals `records_initial`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QualityMetrics {
    pub records_initial: usize,
    pub records_with_null_names: usize,
    pub records_with_invalid_emails: usize,
    pub records_with_invalid_dates: usize,
    pub records_removed: usize,
    pub records_cleaned: usize,
    /// Percentage of the batch that survived all filters, rounded to 2 dp.
    pub data_quality_score: f64,
}

/// Load operation statistics
#[derive(Debug, Default, Clone)]
pub struct LoadStats {
    pub inserted: usize,
}

impl std::fmt::Display for LoadStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "inserted: {}", self.inserted)
    }
}

/// Summary returned by a successful pipeline run
#[derive(Debug)]
pub struct RunReport {
    pub processed_records: usize,
    pub quality_score: f64,
    pub log_file: PathBuf,
    pub backup_file: PathBuf,
}
