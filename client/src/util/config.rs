//! Build-time configuration for the web client.
//!
//! `build.rs` forwards `WRITING_ASSISTANT_API_BASE_URL` (from the environment
//! or a `.env` file) to the compiler, so the value is fixed per build.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL baked in at build time. Empty when unset, which makes requests
/// relative to the page origin.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("WRITING_ASSISTANT_API_BASE_URL").unwrap_or_default())
}

fn normalize_base_url(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}
