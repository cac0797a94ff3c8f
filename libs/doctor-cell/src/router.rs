use std::sync::Arc;

use axum::{
    Router,
    routing::post,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/slots", post(handlers::get_available_slots))
        .route("/recommendations", post(handlers::get_recommended_doctors))
        .with_state(state)
}
