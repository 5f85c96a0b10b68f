//! Profile Loader — fetches the authenticated user's stored profile from the
//! external profile API.

use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::models::{ProfileEnvelope, UserProfile};

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Human-readable failure, taken from the API error body when present.
    #[error("{0}")]
    Api(String),
}

/// Wire shape of a profile API failure.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
}

#[derive(Clone)]
pub struct ProfileApiClient {
    client: Client,
    base_url: String,
}

impl std::fmt::Debug for ProfileApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl ProfileApiClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
        }
    }

    /// Fetches the stored profile with the caller's bearer token and maps it
    /// into a `UserProfile`, defaulting missing list fields to empty.
    pub async fn fetch_profile(&self, token: &str) -> Result<UserProfile, ProfileError> {
        let response = self
            .client
            .get(&self.base_url)
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| {
                    format!("Failed to load profile (status {})", status.as_u16())
                });
            return Err(ProfileError::Api(message));
        }

        let envelope: ProfileEnvelope = response.json().await?;
        let profile = UserProfile::from(envelope);
        debug!(
            "profile loaded: {} skills, {} industries",
            profile.skills.len(),
            profile.industries.len()
        );
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_profile_maps_envelope() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/")
            .match_header("authorization", "Bearer token-1")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "user": {
                        "first_name": "Asha",
                        "last_name": "Verma",
                        "phone_number": "+91-9876543210",
                        "email": "asha@example.com"
                    },
                    "profile": {
                        "qualification": "B.Tech",
                        "skills": ["Python"],
                        "industries": ["Fintech", "Healthcare"]
                    }
                }"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = ProfileApiClient::new(server.url());
        let profile = client.fetch_profile("token-1").await.unwrap();

        assert_eq!(profile.name, "Asha Verma");
        assert_eq!(profile.skills, vec!["Python"]);
        assert_eq!(profile.industries.len(), 2);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_profile_surfaces_api_error_field() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error": "Token has expired"}"#)
            .create_async()
            .await;

        let client = ProfileApiClient::new(server.url());
        let err = client.fetch_profile("stale").await.unwrap_err();
        match err {
            ProfileError::Api(message) => assert_eq!(message, "Token has expired"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_profile_falls_back_to_status_message() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/")
            .with_status(500)
            .with_body("<html>boom</html>")
            .create_async()
            .await;

        let client = ProfileApiClient::new(server.url());
        let err = client.fetch_profile("t").await.unwrap_err();
        match err {
            ProfileError::Api(message) => {
                assert!(message.contains("500"), "unexpected message: {message}")
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }
}
