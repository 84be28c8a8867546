//! Build-time settings and document-picker helpers.
//!
//! `config` exposes the API base URL baked in by `build.rs`; `file` turns a
//! browser `File` into a [`feedback::SelectedFile`] and back into `FormData`.

pub mod config;
pub mod file;
