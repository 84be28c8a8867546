//! Networking for the feedback API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` provides the browser transport behind `feedback::FeedbackClient`.

pub mod api;
