//! Remote LaTeX compilation client.
//!
//! The compile endpoint takes the document as a `text` query parameter and
//! answers with PDF bytes on success. There is no local TeX toolchain; when
//! the remote compile fails the caller falls back to an external editor
//! pre-loaded with the same source.

use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum CompileError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("compiler returned status {status}: {message}")]
    Failed { status: u16, message: String },
}

#[derive(Clone)]
pub struct LatexCompiler {
    client: Client,
    compile_url: String,
    editor_url: String,
}

impl std::fmt::Debug for LatexCompiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LatexCompiler")
            .field("compile_url", &self.compile_url)
            .field("editor_url", &self.editor_url)
            .finish()
    }
}

impl LatexCompiler {
    pub fn new(compile_url: String, editor_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            compile_url,
            editor_url,
        }
    }

    /// Submits the document and returns the compiled PDF bytes.
    pub async fn compile(&self, latex: &str) -> Result<Bytes, CompileError> {
        let response = self
            .client
            .post(&self.compile_url)
            .query(&[("text", latex)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CompileError::Failed {
                status: status.as_u16(),
                message,
            });
        }

        let pdf = response.bytes().await?;
        debug!("compiled PDF: {} bytes", pdf.len());
        Ok(pdf)
    }

    /// Manual-compile fallback: the external editor pre-loaded with the
    /// document source.
    pub fn editor_fallback_url(&self, latex: &str) -> String {
        match reqwest::Url::parse_with_params(&self.editor_url, [("snip", latex)]) {
            Ok(url) => url.to_string(),
            Err(_) => self.editor_url.clone(),
        }
    }
}
