//! Client contract for the remote feedback API.
//!
//! ARCHITECTURE
//! ============
//! [`FeedbackClient`] owns endpoint construction, status checks, and body
//! decoding. The actual HTTP exchange sits behind [`FeedbackTransport`] so the
//! browser (`gloo-net`) and native (`reqwest`) clients share one code path,
//! and tests can substitute a recording transport.
//!
//! ERROR HANDLING
//! ==============
//! Only transport-level problems surface as [`ApiError`]. A body with an
//! unexpected shape still decodes (see [`FeedbackResponse::Verbatim`]).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::response::FeedbackResponse;
use crate::upload::SelectedFile;

/// Raw-text feedback endpoint.
pub const FEEDBACK_PATH: &str = "/feedback";
/// Document upload endpoint.
pub const FILE_UPLOAD_PATH: &str = "/fileupload";
/// Content type declared for raw-text submissions.
pub const TEXT_CONTENT_TYPE: &str = "text/plain";
/// Shown in place of feedback whenever a request fails.
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Failure talking to the feedback API.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS, ...).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
    /// This build has no HTTP transport (non-browser build of the web client).
    #[error("feedback API is not available in this build")]
    Unavailable,
}

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One HTTP round trip to the feedback API.
///
/// Futures are not required to be `Send`: the browser implementation holds
/// JS handles across await points.
#[async_trait::async_trait(?Send)]
pub trait FeedbackTransport {
    /// `POST` `text` as the body with `Content-Type: text/plain`.
    async fn post_text(&self, url: &str, text: &str) -> Result<RawResponse, ApiError>;

    /// `POST` a multipart form whose single `file` field carries `file`.
    async fn post_file(&self, url: &str, file: &SelectedFile) -> Result<RawResponse, ApiError>;
}

/// A request ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Text(String),
    File(SelectedFile),
}

impl Submission {
    /// Endpoint path this submission is posted to.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Text(_) => FEEDBACK_PATH,
            Self::File(_) => FILE_UPLOAD_PATH,
        }
    }
}

/// Join a base URL and an endpoint path. An empty base gives a relative path.
#[must_use]
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

/// Typed client for the two feedback endpoints.
#[derive(Clone, Debug)]
pub struct FeedbackClient<T> {
    base_url: String,
    transport: T,
}

impl<T: FeedbackTransport> FeedbackClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Request feedback on raw text via `POST /feedback`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not 2xx.
    pub async fn submit_text(&self, text: &str) -> Result<FeedbackResponse, ApiError> {
        let url = endpoint_url(&self.base_url, FEEDBACK_PATH);
        log::debug!("POST {url} ({} chars)", text.chars().count());
        let raw = self.transport.post_text(&url, text).await?;
        decode(&url, raw)
    }

    /// Request feedback on a document via `POST /fileupload`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not 2xx.
    pub async fn submit_file(&self, file: &SelectedFile) -> Result<FeedbackResponse, ApiError> {
        let url = endpoint_url(&self.base_url, FILE_UPLOAD_PATH);
        log::debug!("POST {url} ({}, {} bytes)", file.name, file.size());
        let raw = self.transport.post_file(&url, file).await?;
        decode(&url, raw)
    }

    /// Dispatch a [`Submission`] to its endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the status is not 2xx.
    pub async fn submit(&self, submission: &Submission) -> Result<FeedbackResponse, ApiError> {
        match submission {
            Submission::Text(text) => self.submit_text(text).await,
            Submission::File(file) => self.submit_file(file).await,
        }
    }
}

fn decode(url: &str, raw: RawResponse) -> Result<FeedbackResponse, ApiError> {
    if !raw.is_success() {
        log::warn!("POST {url} returned status {}", raw.status);
        return Err(ApiError::Status(raw.status));
    }
    Ok(FeedbackResponse::parse_body(&raw.body))
}
