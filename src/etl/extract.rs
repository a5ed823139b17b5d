//! Extract functions - read raw reservations from the record store

use crate::etl::error::EtlError;
use crate::etl::types::RawReservation;
use chrono::{Duration, Utc};
use sqlx::PgPool;
use tracing::info;

/// Read raw reservations created within the last `window_days` days,
/// oldest first.
///
/// A store failure is returned as [`EtlError::Extract`]; an empty window is
/// a normal `Ok(vec![])`, so callers can tell "nothing to do" apart from
/// "store unavailable".
pub async fn extract_raw_reservations(
    db: &PgPool,
    window_days: i64,
) -> Result<Vec<RawReservation>, EtlError> {
    let cutoff = Utc::now() - Duration::days(window_days);
    info!("Extracting raw reservations created since {}", cutoff);

    let rows = sqlx::query_as::<_, RawReservation>(
        r#"
        SELECT id, first_name, last_name, email, phone, country, city,
               checkin_date, checkout_date, guests, room_type, comments, created_at
        FROM reservations
        WHERE created_at >= $1
        ORDER BY created_at
        "#,
    )
    .bind(cutoff)
    .fetch_all(db)
    .await
    .map_err(EtlError::Extract)?;

    info!("Extracted {} raw reservations", rows.len());

    Ok(rows)
}
