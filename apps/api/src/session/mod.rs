//! Per-token session registry.
//!
//! A session owns one `ContentOrchestrator`; it is created on the first
//! authenticated request (the profile is fetched at creation) and destroyed
//! on logout. Session state lives only in memory — ending the process ends
//! every session.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{header, HeaderMap};
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::info;

use crate::content::orchestrator::ContentOrchestrator;
use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::profile::ProfileApiClient;
use crate::state::AppState;

pub struct Session {
    pub orchestrator: ContentOrchestrator,
    pub created_at: DateTime<Utc>,
}

#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the session for the token, creating it (and fetching the
    /// profile) on first use.
    pub async fn get_or_create(
        &self,
        token: &str,
        profile_api: &ProfileApiClient,
        generator: Arc<dyn TextGenerator>,
    ) -> Arc<Session> {
        if let Some(session) = self.sessions.read().await.get(token) {
            return Arc::clone(session);
        }

        let session = Arc::new(Session {
            orchestrator: ContentOrchestrator::new(generator),
            created_at: Utc::now(),
        });
        session.orchestrator.load_profile(profile_api, token).await;

        // If another request created a session for this token while the
        // profile fetch was in flight, keep the existing one.
        let mut sessions = self.sessions.write().await;
        Arc::clone(
            sessions
                .entry(token.to_string())
                .or_insert_with(|| Arc::clone(&session)),
        )
    }

    /// Destroys the token's session: profile and cache are gone.
    pub async fn remove(&self, token: &str) -> bool {
        let removed = self.sessions.write().await.remove(token).is_some();
        if removed {
            info!("session destroyed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Extracts the bearer token that keys the session and is forwarded to the
/// profile API.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AppError::Unauthorized)
}

/// Resolves the caller's session from request headers.
pub async fn resolve(state: &AppState, headers: &HeaderMap) -> Result<Arc<Session>, AppError> {
    let token = bearer_token(headers)?;
    Ok(state
        .sessions
        .get_or_create(token, &state.profile_api, Arc::clone(&state.generator))
        .await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::GenError;
    use async_trait::async_trait;

    struct NoopGenerator;

    #[async_trait]
    impl TextGenerator for NoopGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenError> {
            Err(GenError::EmptyContent)
        }
    }

    fn auth_headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(
            bearer_token(&auth_headers("Bearer abc123")).unwrap(),
            "abc123"
        );
        assert!(bearer_token(&auth_headers("Basic abc123")).is_err());
        assert!(bearer_token(&auth_headers("Bearer ")).is_err());
        assert!(bearer_token(&HeaderMap::new()).is_err());
    }

    #[tokio::test]
    async fn test_same_token_reuses_the_session() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"user": {"first_name": "A", "last_name": "B"}, "profile": {}}"#)
            .expect(1)
            .create_async()
            .await;

        let store = SessionStore::new();
        let api = ProfileApiClient::new(server.url());
        let generator: Arc<dyn TextGenerator> = Arc::new(NoopGenerator);

        let first = store.get_or_create("tok", &api, Arc::clone(&generator)).await;
        let second = store.get_or_create("tok", &api, Arc::clone(&generator)).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len().await, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_distinct_tokens_get_distinct_sessions() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"user": {"first_name": "A", "last_name": "B"}, "profile": {}}"#)
            .expect(2)
            .create_async()
            .await;

        let store = SessionStore::new();
        let api = ProfileApiClient::new(server.url());
        let generator: Arc<dyn TextGenerator> = Arc::new(NoopGenerator);

        let first = store.get_or_create("tok-1", &api, Arc::clone(&generator)).await;
        let second = store.get_or_create("tok-2", &api, Arc::clone(&generator)).await;

        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_remove_destroys_the_session() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .create_async()
            .await;

        let store = SessionStore::new();
        let api = ProfileApiClient::new(server.url());
        let generator: Arc<dyn TextGenerator> = Arc::new(NoopGenerator);

        store.get_or_create("tok", &api, generator).await;
        assert!(store.remove("tok").await);
        assert!(!store.remove("tok").await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_profile_failure_still_creates_the_session_with_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(401)
            .with_body(r#"{"error": "Token has expired"}"#)
            .create_async()
            .await;

        let store = SessionStore::new();
        let api = ProfileApiClient::new(server.url());
        let generator: Arc<dyn TextGenerator> = Arc::new(NoopGenerator);

        let session = store.get_or_create("tok", &api, generator).await;
        assert!(session.orchestrator.profile().await.is_none());
        assert_eq!(
            session.orchestrator.session_error().await.as_deref(),
            Some("Token has expired")
        );
    }
}
