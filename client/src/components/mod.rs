//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feedback page chrome and read/write the shared
//! `FeedbackSession` from Leptos context.

pub mod banner;
pub mod feedback_output;
pub mod submit_panel;
