use crate::handlers::{health_check, process_handler};
use axum::{Router, routing::get, routing::post};

/// Creates and configures all application routes
pub fn create_routes() -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/process", post(process_handler))
}
