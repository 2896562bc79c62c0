pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::course::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/generate-course", post(handlers::handle_generate_course))
        .route(
            "/generate-proficiency-assessment",
            post(handlers::handle_generate_assessment),
        )
        .route(
            "/generate-module-content",
            post(handlers::handle_generate_module_content),
        )
        .route(
            "/generate-remedial-suggestion",
            post(handlers::handle_generate_remedial_suggestion),
        )
        .route(
            "/generate-full-course-content",
            post(handlers::handle_generate_full_course_content),
        )
        .with_state(state)
}
