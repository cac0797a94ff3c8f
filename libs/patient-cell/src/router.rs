use std::sync::Arc;
use axum::{routing::{get, post}, Router};
use shared_config::AppConfig;

use crate::handlers::*;

pub fn patient_routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/profile/options", get(get_profile_options))
        .route("/profile/completion", post(get_profile_completion))
        .route("/summary", post(get_patient_summary))
        .with_state(config)
}
