use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::AssessmentRequest;
use crate::services::{advisory_for, questionnaire, TriageScorer};

#[axum::debug_handler]
pub async fn get_questionnaire() -> Result<Json<Value>, AppError> {
    Ok(Json(json!({
        "questions": questionnaire()
    })))
}

#[axum::debug_handler]
pub async fn assess_consultation(
    State(_state): State<Arc<AppConfig>>,
    Json(request): Json<AssessmentRequest>,
) -> Result<Json<Value>, AppError> {
    let scorer = TriageScorer::new();
    let answers = scorer.parse_answers(request.answers);

    let result = scorer.score(&answers)
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let advisory = advisory_for(result.severity);

    Ok(Json(json!({
        "result": result,
        "advisory": advisory
    })))
}
