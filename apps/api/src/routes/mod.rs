pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::content::handlers as content;
use crate::cv::handlers as cv;
use crate::session::handlers as session;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Session lifecycle
        .route(
            "/api/v1/session",
            get(session::handle_session_status).delete(session::handle_logout),
        )
        .route(
            "/api/v1/session/profile/refresh",
            post(session::handle_profile_refresh),
        )
        // Content API
        .route("/api/v1/content/:category", get(content::handle_get_content))
        .route(
            "/api/v1/content/:category/refresh",
            post(content::handle_refresh_content),
        )
        .route(
            "/api/v1/content/:category/freshness",
            get(content::handle_content_freshness),
        )
        // CV generation
        .route("/api/v1/cv", post(cv::handle_generate_cv))
        .with_state(state)
}
