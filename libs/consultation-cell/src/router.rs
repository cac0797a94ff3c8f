use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use shared_config::AppConfig;

use crate::handlers;

pub fn consultation_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/questionnaire", get(handlers::get_questionnaire))
        .route("/assess", post(handlers::assess_consultation))
        .with_state(state)
}
