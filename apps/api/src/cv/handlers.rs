//! CV generation endpoint: compiled PDF on success, editor fallback on
//! compile failure — never a silent failure.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::session;
use crate::state::AppState;

use super::latex;

#[derive(Debug, Serialize)]
pub struct CvFallbackResponse {
    pub status: &'static str,
    pub message: String,
    pub editor_url: String,
    pub latex: String,
}

/// POST /api/v1/cv
///
/// Builds the LaTeX résumé from the session profile and compiles it
/// remotely. Success is an `application/pdf` attachment; a compile failure
/// is a structured fallback pointing at the external editor pre-loaded with
/// the same source.
pub async fn handle_generate_cv(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let session = session::resolve(&state, &headers).await?;
    let Some(profile) = session.orchestrator.profile().await else {
        return Err(AppError::Validation(
            "Profile is not loaded; complete your profile before generating a CV".to_string(),
        ));
    };

    let latex = latex::build_document(&profile)?;

    match state.compiler.compile(&latex).await {
        Ok(pdf) => {
            let filename = format!("{}_resume.pdf", profile.name);
            let headers = [
                (header::CONTENT_TYPE, "application/pdf".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ];
            Ok((headers, pdf).into_response())
        }
        Err(e) => {
            warn!("remote LaTeX compilation failed: {e}");
            let fallback = CvFallbackResponse {
                status: "fallback",
                message: "Automatic PDF compilation failed. Open the document in the external \
                    editor, recompile it there, and download the PDF."
                    .to_string(),
                editor_url: state.compiler.editor_fallback_url(&latex),
                latex,
            };
            Ok(Json(fallback).into_response())
        }
    }
}
