//! Error taxonomy for the ETL pipeline
//!
//! Per-record validation failures never surface here; they are counted in
//! [`QualityMetrics`](crate::etl::types::QualityMetrics) and the batch keeps
//! going. These variants are the fatal kind: a failed stage aborts the rest
//! of the run, and artifacts written by earlier stages stay on disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EtlError {
    #[error("failed to extract raw reservations from the store")]
    Extract(#[source] sqlx::Error),

    #[error("failed to load cleaned reservations into the store")]
    Load(#[source] sqlx::Error),

    #[error("failed to encode the quality log")]
    EncodeQualityLog(#[source] serde_json::Error),

    #[error("failed to write artifact {path}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write backup snapshot {path}")]
    WriteBackup {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
