//! Shared feedback model and API client for the writing assistant.
//!
//! This crate owns everything that does not depend on where it runs: the
//! decoded response union, the pure renderer, upload packaging, and the
//! transport-agnostic client for the `/feedback` and `/fileupload` endpoints.
//! The browser `client` and the native `cli` each plug in their own
//! [`FeedbackTransport`].

pub mod api;
pub mod render;
pub mod response;
pub mod upload;

pub use api::{
    ApiError, ERROR_MESSAGE, FeedbackClient, FeedbackTransport, RawResponse, Submission,
    TEXT_CONTENT_TYPE, endpoint_url,
};
pub use render::{RenderedView, render_response};
pub use response::{CorrectionRow, FeedbackResponse, SectionCategory};
pub use upload::SelectedFile;
