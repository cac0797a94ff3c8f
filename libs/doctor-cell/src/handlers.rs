use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};
use tracing::info;

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::clock::resolve_now;

use crate::models::{RecommendationRequest, SlotQueryRequest};
use crate::services::{
    availability::SlotGenerator,
    matching::DoctorMatchingService,
};

#[axum::debug_handler]
pub async fn get_available_slots(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<SlotQueryRequest>,
) -> Result<Json<Value>, AppError> {
    if request.doctor.id.trim().is_empty() {
        return Err(AppError::BadRequest("Doctor id is required".to_string()));
    }

    let now = resolve_now(request.now, &state);
    let days = SlotGenerator::new().generate(now, &request.doctor.slots_booked);
    let total_slots: usize = days.iter().map(|day| day.slots.len()).sum();

    info!("Generated {} slots for doctor {}", total_slots, request.doctor.id);

    Ok(Json(json!({
        "doctor_id": request.doctor.id,
        "days": days,
        "total_slots": total_slots
    })))
}

#[axum::debug_handler]
pub async fn get_recommended_doctors(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<Value>, AppError> {
    let now = resolve_now(request.now, &state);
    let recommendations = DoctorMatchingService::new()
        .recommend_alternatives(&request.doctor, &request.candidates, now);

    Ok(Json(json!({
        "doctor_id": request.doctor.id,
        "total": recommendations.len(),
        "recommendations": recommendations
    })))
}
