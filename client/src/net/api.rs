//! Browser transport for the feedback API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call fails with
//! [`ApiError::Unavailable`], which the page treats like any other failure.
//!
//! ERROR HANDLING
//! ==============
//! Errors come back as [`ApiError`] values; the session turns them into the
//! fixed error message so a failed request never breaks the page.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use feedback::{ApiError, FeedbackClient, FeedbackTransport, RawResponse, SelectedFile};

use crate::util::config::api_base_url;

/// `FeedbackTransport` backed by the browser's `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

/// Client pointed at the build-time base URL.
pub fn feedback_client() -> FeedbackClient<BrowserTransport> {
    FeedbackClient::new(api_base_url(), BrowserTransport)
}

#[async_trait::async_trait(?Send)]
impl FeedbackTransport for BrowserTransport {
    async fn post_text(&self, url: &str, text: &str) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(url)
                .header("Content-Type", feedback::TEXT_CONTENT_TYPE)
                .body(text.to_owned())
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, text);
            Err(ApiError::Unavailable)
        }
    }

    async fn post_file(&self, url: &str, file: &SelectedFile) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            // The browser writes the multipart boundary into Content-Type itself.
            let form = crate::util::file::upload_form_data(file).map_err(ApiError::Transport)?;
            let resp = gloo_net::http::Request::post(url)
                .body(form)
                .map_err(transport_error)?
                .send()
                .await
                .map_err(transport_error)?;
            read_response(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, file);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
fn transport_error(error: gloo_net::Error) -> ApiError {
    ApiError::Transport(error.to_string())
}

#[cfg(feature = "csr")]
async fn read_response(resp: gloo_net::http::Response) -> Result<RawResponse, ApiError> {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .map_err(|e| ApiError::Body(e.to_string()))?;
    Ok(RawResponse { status, body })
}
