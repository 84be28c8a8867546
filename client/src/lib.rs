//! # client
//!
//! Leptos + WASM frontend for the AI writing assistant. Renders a single
//! page where text or a document is sent to the feedback API and the reply is
//! shown as categorized feedback or a correction table.
//!
//! Response decoding and rendering rules come from the `feedback` crate; this
//! crate owns the page, its components, the session state, and the browser
//! transport. Build with the `csr` feature (e.g. via `trunk`) for the browser;
//! without it everything compiles natively for tests.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Install browser logging and mount [`app::App`] on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
