//! Load functions - append cleaned reservations to the cleaned store

use crate::etl::error::EtlError;
use crate::etl::types::{CleanedReservation, LoadStats};
use sqlx::PgPool;
use tracing::{debug, info};

/// Append cleaned reservations to the `cleaned_reservations` table.
///
/// Rows are inserted one by one; the first failure aborts the load and is
/// returned as [`EtlError::Load`]. Rows already inserted stay committed,
/// there is no rollback.
pub async fn load_cleaned_reservations(
    db: &PgPool,
    records: &[CleanedReservation],
) -> Result<LoadStats, EtlError> {
    info!("Loading {} cleaned reservations", records.len());

    let mut stats = LoadStats::default();

    for record in records {
        insert_cleaned(db, record).await.map_err(EtlError::Load)?;
        debug!("Inserted cleaned reservation (original_id: {})", record.original_id);
        stats.inserted += 1;
    }

    info!("Load complete: {}", stats);

    Ok(stats)
}

async fn insert_cleaned(db: &PgPool, record: &CleanedReservation) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO cleaned_reservations (
            original_id, first_name, last_name, email, phone, country, city,
            checkin_date, checkout_date, guests, room_type, comments,
            created_at, data_quality_score, processed_at
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15
        )
        "#,
    )
    .bind(record.original_id)
    .bind(&record.first_name)
    .bind(&record.last_name)
    .bind(&record.email)
    .bind(&record.phone)
    .bind(&record.country)
    .bind(&record.city)
    .bind(record.checkin_date)
    .bind(record.checkout_date)
    .bind(record.guests)
    .bind(&record.room_type)
    .bind(&record.comments)
    .bind(record.created_at)
    .bind(record.data_quality_score)
    .bind(record.processed_at)
    .execute(db)
    .await?;

    Ok(())
}
