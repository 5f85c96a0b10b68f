//! Axum route handlers for the content API.
//!
//! Generation and parse failures do not become HTTP errors: they surface in
//! the response's `error` field next to whatever cached records survive, so
//! a failed refresh never hides stale-but-usable data.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Json,
};
use serde::Serialize;

use crate::content::category::ContentCategory;
use crate::content::records::ContentRecord;
use crate::errors::AppError;
use crate::session::{self, Session};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TabContentResponse {
    pub category: ContentCategory,
    pub records: Vec<ContentRecord>,
    pub freshness: String,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FreshnessResponse {
    pub category: ContentCategory,
    pub freshness: String,
}

fn parse_category(raw: &str) -> Result<ContentCategory, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Unknown content category '{raw}'")))
}

async fn tab_response(category: ContentCategory, session: &Session) -> TabContentResponse {
    TabContentResponse {
        category,
        records: session.orchestrator.records(category).await,
        freshness: session.orchestrator.data_freshness(category).await,
        error: session.orchestrator.session_error().await,
    }
}

/// GET /api/v1/content/:category
///
/// Loads the category unless a fresh cache entry exists, then returns the
/// cached records.
pub async fn handle_get_content(
    State(state): State<AppState>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> Result<Json<TabContentResponse>, AppError> {
    let category = parse_category(&category)?;
    let session = session::resolve(&state, &headers).await?;
    session.orchestrator.load_tab_data(category).await;
    Ok(Json(tab_response(category, &session).await))
}

/// POST /api/v1/content/:category/refresh
///
/// Clears the category's cache entry and reloads it, bypassing freshness.
pub async fn handle_refresh_content(
    State(state): State<AppState>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> Result<Json<TabContentResponse>, AppError> {
    let category = parse_category(&category)?;
    let session = session::resolve(&state, &headers).await?;
    session.orchestrator.refresh_tab_data(category).await;
    Ok(Json(tab_response(category, &session).await))
}

/// GET /api/v1/content/:category/freshness
pub async fn handle_content_freshness(
    State(state): State<AppState>,
    Path(category): Path<String>,
    headers: HeaderMap,
) -> Result<Json<FreshnessResponse>, AppError> {
    let category = parse_category(&category)?;
    let session = session::resolve(&state, &headers).await?;
    Ok(Json(FreshnessResponse {
        category,
        freshness: session.orchestrator.data_freshness(category).await,
    }))
}
