//! Reservation ETL module - functional pipeline for reservation data quality

pub mod artifacts;
pub mod clean;
pub mod error;
pub mod extract;
pub mod load;
pub mod run;
pub mod types;

pub use error::EtlError;
pub use types::*;
