//! Artifact writers - quality log and backup snapshot
//!
//! Both artifacts carry a timestamp suffix so each run leaves its own audit
//! trail; nothing is overwritten between runs.

use crate::etl::error::EtlError;
use crate::etl::types::{CleanedReservation, QualityMetrics};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Serialize)]
struct QualityLog<'a> {
    timestamp: String,
    pipeline_run: &'static str,
    metrics: &'a QualityMetrics,
    loaded_records: usize,
    success: bool,
}

/// Write the per-run quality log as pretty-printed JSON to
/// `<dir>/etl_run_<YYYYmmdd_HHMMSS>.json`, creating the directory if needed.
pub fn write_quality_log(
    dir: &Path,
    metrics: &QualityMetrics,
    loaded_records: usize,
) -> Result<PathBuf, EtlError> {
    let now = Utc::now();
    let log = QualityLog {
        timestamp: now.to_rfc3339(),
        pipeline_run: "etl_reservations",
        metrics,
        loaded_records,
        success: true,
    };

    let path = dir.join(format!("etl_run_{}.json", artifact_suffix(now)));
    let body = serde_json::to_string_pretty(&log).map_err(EtlError::EncodeQualityLog)?;

    ensure_dir(dir)?;
    fs::write(&path, body).map_err(|source| EtlError::WriteArtifact {
        path: path.clone(),
        source,
    })?;

    info!("Quality log written: {:?}", path);

    Ok(path)
}

/// Column order of the backup snapshot, matching `CleanedReservation`.
const BACKUP_HEADER: [&str; 15] = [
    "original_id",
    "first_name",
    "last_name",
    "email",
    "phone",
    "country",
    "city",
    "checkin_date",
    "checkout_date",
    "guests",
    "room_type",
    "comments",
    "created_at",
    "data_quality_score",
    "processed_at",
];

/// Write the accepted batch as a flat CSV snapshot to
/// `<dir>/reservations_backup_<YYYYmmdd_HHMMSS>.csv`, one header row plus
/// one row per record. The header is written even for an empty batch.
pub fn write_backup(dir: &Path, records: &[CleanedReservation]) -> Result<PathBuf, EtlError> {
    let path = dir.join(format!(
        "reservations_backup_{}.csv",
        artifact_suffix(Utc::now())
    ));

    ensure_dir(dir)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(&path)
        .map_err(|source| EtlError::WriteBackup {
            path: path.clone(),
            source,
        })?;
    writer
        .write_record(BACKUP_HEADER)
        .map_err(|source| EtlError::WriteBackup {
            path: path.clone(),
            source,
        })?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|source| EtlError::WriteBackup {
                path: path.clone(),
                source,
            })?;
    }
    writer.flush().map_err(|source| EtlError::WriteArtifact {
        path: path.clone(),
        source,
    })?;

    info!("Backup written: {:?} ({} records)", path, records.len());

    Ok(path)
}

fn artifact_suffix(now: DateTime<Utc>) -> String {
    now.format("%Y%m%d_%H%M%S").to_string()
}

fn ensure_dir(dir: &Path) -> Result<(), EtlError> {
    fs::create_dir_all(dir).map_err(|source| EtlError::WriteArtifact {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn mock_cleaned(original_id: i64) -> CleanedReservation {
        CleanedReservation {
            original_id,
            first_name: "Maria".to_string(),
            last_name: "Gonzalez".to_string(),
            email: "maria@example.com".to_string(),
            phone: Some("+34 600 123 456".to_string()),
            country: Some("Spain".to_string()),
            city: Some("San Sebastian".to_string()),
            checkin_date: NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
            checkout_date: NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            guests: 2,
            room_type: Some("double".to_string()),
            comments: None,
            created_at: Utc::now(),
            data_quality_score: 1.0,
            processed_at: Utc::now(),
        }
    }

    #[test]
    fn test_quality_log_round_trips() {
        let temp = tempdir().unwrap();
        let metrics = QualityMetrics {
            records_initial: 3,
            records_with_invalid_dates: 1,
            records_removed: 2,
            records_cleaned: 1,
            data_quality_score: 33.33,
            ..Default::default()
        };

        let path = write_quality_log(temp.path(), &metrics, 1).unwrap();

        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("etl_run_"));
        let body = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["pipeline_run"], "etl_reservations");
        assert_eq!(parsed["success"], true);
        assert_eq!(parsed["loaded_records"], 1);
        assert_eq!(parsed["metrics"]["records_initial"], 3);
        assert_eq!(parsed["metrics"]["data_quality_score"], 33.33);
    }

    #[test]
    fn test_quality_log_creates_directory() {
        let temp = tempdir().unwrap();
        let nested = temp.path().join("logs");

        let path = write_quality_log(&nested, &QualityMetrics::default(), 0).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn test_backup_has_header_and_rows() {
        let temp = tempdir().unwrap();

        let path = write_backup(temp.path(), &[mock_cleaned(1), mock_cleaned(2)]).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3); // header + 2 records
        assert!(lines[0].starts_with("original_id,first_name,last_name,email"));
        assert!(lines[1].contains("maria@example.com"));
        assert!(lines[1].contains("2024-07-01"));
    }

    #[test]
    fn test_backup_of_empty_batch_keeps_header() {
        let temp = tempdir().unwrap();

        let path = write_backup(temp.path(), &[]).unwrap();

        let body = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 1); // header only
        assert!(lines[0].starts_with("original_id,first_name,last_name,email"));
    }
}
