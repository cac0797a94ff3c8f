use chrono::{NaiveDate, NaiveDateTime, Utc};
use tracing::debug;

use shared_config::AppConfig;

/// Reads the wall clock once and expresses it in the clinic's local time.
pub fn clinic_now(config: &AppConfig) -> NaiveDateTime {
    let now = Utc::now()
        .with_timezone(&config.clinic_offset())
        .naive_local();
    debug!("Clinic clock reading: {}", now);
    now
}

pub fn clinic_today(config: &AppConfig) -> NaiveDate {
    clinic_now(config).date()
}

/// Uses the caller-supplied instant when present, otherwise takes a single
/// clinic clock reading.
pub fn resolve_now(requested: Option<NaiveDateTime>, config: &AppConfig) -> NaiveDateTime {
    match requested {
        Some(now) => {
            debug!("Using caller-supplied clock reading: {}", now);
            now
        }
        None => clinic_now(config),
    }
}
