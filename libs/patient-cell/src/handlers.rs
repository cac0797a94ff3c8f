use std::sync::Arc;
use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::clock::clinic_today;

use crate::models::{PatientSummaryRequest, ProfileForm};
use crate::services::ProfileService;

#[axum::debug_handler]
pub async fn get_profile_options() -> Result<Json<Value>, AppError> {
    let service = ProfileService::new();

    Ok(Json(json!(service.profile_options())))
}

#[axum::debug_handler]
pub async fn get_profile_completion(
    State(_config): State<Arc<AppConfig>>,
    Json(form): Json<ProfileForm>,
) -> Result<Json<Value>, AppError> {
    let service = ProfileService::new();

    service.validate_form(&form)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    Ok(Json(json!({
        "completion": service.completion_percentage(&form)
    })))
}

#[axum::debug_handler]
pub async fn get_patient_summary(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<PatientSummaryRequest>,
) -> Result<Json<Value>, AppError> {
    let service = ProfileService::new();
    let today = request.today.unwrap_or_else(|| clinic_today(&config));

    Ok(Json(json!(service.summarize(&request.patient, today))))
}
