//! Cleaning functions - validate, normalize and score raw reservations
//!
//! Pure transform: no I/O, no error return. A malformed record is dropped
//! and counted, never allowed to abort the batch.

use crate::etl::types::{CleanedReservation, QualityMetrics, RawReservation};
use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

/// Validate and normalize a batch of raw reservations.
///
/// Filters are applied in a fixed order, and later filters only see records
/// that passed the earlier ones:
/// 1. missing first or last name (empty after trimming counts as missing)
/// 2. email without an '@' (a null email counts as invalid)
/// 3. unparseable check-in/check-out dates, or checkout not after check-in
/// 4. guests outside 1..=10 (no dedicated counter, folded into removed)
///
/// Survivors get trimmed/title-cased names and locations, a lowercased
/// email, and the batch quality score: the percentage of the batch that
/// survived, shared by every record of the run.
pub fn clean_batch(batch: &[RawReservation]) -> (Vec<CleanedReservation>, QualityMetrics) {
    info!("Cleaning batch of {} raw reservations", batch.len());

    let mut metrics = QualityMetrics {
        records_initial: batch.len(),
        ..Default::default()
    };

    let mut survivors = Vec::new();

    for raw in batch {
        if !has_complete_name(raw) {
            metrics.records_with_null_names += 1;
            debug!("Rejected reservation {}: missing name", raw.id);
            continue;
        }

        if !has_plausible_email(raw) {
            metrics.records_with_invalid_emails += 1;
            debug!("Rejected reservation {}: invalid email", raw.id);
            continue;
        }

        let Some((checkin, checkout)) = parse_stay_dates(&raw.checkin_date, &raw.checkout_date)
        else {
            metrics.records_with_invalid_dates += 1;
            debug!("Rejected reservation {}: invalid dates", raw.id);
            continue;
        };

        if !(1..=10).contains(&raw.guests) {
            debug!("Rejected reservation {}: {} guests", raw.id, raw.guests);
            continue;
        }

        survivors.push((raw, checkin, checkout));
    }

    metrics.records_cleaned = survivors.len();
    metrics.records_removed = metrics.records_initial - metrics.records_cleaned;
    metrics.data_quality_score = if metrics.records_initial > 0 {
        round2(100.0 * metrics.records_cleaned as f64 / metrics.records_initial as f64)
    } else {
        0.0
    };

    let record_score = metrics.data_quality_score / 100.0;
    let processed_at = Utc::now();

    let cleaned = survivors
        .into_iter()
        .map(|(raw, checkin, checkout)| CleanedReservation {
            original_id: raw.id,
            first_name: title_case(raw.first_name.as_deref().unwrap_or_default()),
            last_name: title_case(raw.last_name.as_deref().unwrap_or_default()),
            email: raw
                .email
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            phone: raw.phone.clone(),
            country: raw.country.as_deref().map(title_case),
            city: raw.city.as_deref().map(title_case),
            checkin_date: checkin,
            checkout_date: checkout,
            guests: raw.guests,
            room_type: raw.room_type.clone(),
            comments: raw.comments.clone(),
            created_at: raw.created_at,
            data_quality_score: record_score,
            processed_at,
        })
        .collect();

    info!(
        "Cleaning complete: {}/{} records valid ({}%)",
        metrics.records_cleaned, metrics.records_initial, metrics.data_quality_score
    );

    (cleaned, metrics)
}

fn has_complete_name(raw: &RawReservation) -> bool {
    let present = |field: &Option<String>| {
        field
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    };
    present(&raw.first_name) && present(&raw.last_name)
}

fn has_plausible_email(raw: &RawReservation) -> bool {
    raw.email.as_deref().is_some_and(|email| email.contains('@'))
}

/// Parse both stay dates; `None` if either fails or the stay is not at
/// least one night long.
fn parse_stay_dates(checkin: &str, checkout: &str) -> Option<(NaiveDate, NaiveDate)> {
    let checkin = parse_date(checkin)?;
    let checkout = parse_date(checkout)?;
    if checkout > checkin {
        Some((checkin, checkout))
    } else {
        None
    }
}

/// Parse a date in ISO `YYYY-MM-DD` or `DD/MM/YYYY` format
fn parse_date(date_str: &str) -> Option<NaiveDate> {
    let trimmed = date_str.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d/%m/%Y"))
        .ok()
}

/// Trim and title-case free-form text: first letter of each word upper,
/// the rest lower. Idempotent.
fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
