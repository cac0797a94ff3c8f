use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::clock::resolve_now;

use crate::models::{AppointmentError, PrepareBookingRequest};
use crate::services::booking::AppointmentBookingService;

#[axum::debug_handler]
pub async fn prepare_booking(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<PrepareBookingRequest>,
) -> Result<Json<Value>, AppError> {
    let now = resolve_now(request.now, &state);
    let booking_service = AppointmentBookingService::new();

    let booking = booking_service
        .prepare_at(&request.doctor, now, &request.selection, request.consultation.as_ref())
        .map_err(|e| match e {
            AppointmentError::SlotUnavailable { .. } => AppError::Conflict(e.to_string()),
            _ => AppError::ValidationError(e.to_string()),
        })?;

    Ok(Json(json!(booking)))
}
