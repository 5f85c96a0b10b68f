//! Axum route handlers for session lifecycle.

use axum::{extract::State, http::HeaderMap, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::profile::UserProfile;
use crate::state::AppState;

use super::{bearer_token, resolve, Session};

#[derive(Debug, Serialize)]
pub struct SessionStatusResponse {
    pub profile: Option<UserProfile>,
    pub error: Option<String>,
    pub loading: bool,
    pub started_at: DateTime<Utc>,
}

async fn status_of(session: &Session) -> SessionStatusResponse {
    SessionStatusResponse {
        profile: session.orchestrator.profile().await,
        error: session.orchestrator.session_error().await,
        loading: session.orchestrator.is_loading(),
        started_at: session.created_at,
    }
}

/// GET /api/v1/session
///
/// Ensures a session exists for the caller's token (fetching the profile on
/// first use) and returns its status.
pub async fn handle_session_status(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionStatusResponse>, AppError> {
    let session = resolve(&state, &headers).await?;
    Ok(Json(status_of(&session).await))
}

/// POST /api/v1/session/profile/refresh
///
/// Re-fetches the stored profile so edits made elsewhere are picked up
/// without logging out.
pub async fn handle_profile_refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionStatusResponse>, AppError> {
    let session = resolve(&state, &headers).await?;
    let token = bearer_token(&headers)?;
    session
        .orchestrator
        .load_profile(&state.profile_api, token)
        .await;

    Ok(Json(status_of(&session).await))
}

/// DELETE /api/v1/session
///
/// Logout: destroys the session, dropping the profile and every cached
/// category.
pub async fn handle_logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>, AppError> {
    let token = bearer_token(&headers)?;
    let removed = state.sessions.remove(token).await;
    Ok(Json(json!({ "logged_out": removed })))
}
