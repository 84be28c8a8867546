//! Bakes the feedback API base URL into the web client at build time.
//!
//! `WRITING_ASSISTANT_API_BASE_URL` is taken from the environment, falling
//! back to the nearest `.env` file (this crate, then its parents).

use std::env;
use std::path::Path;

const BASE_URL_VAR: &str = "WRITING_ASSISTANT_API_BASE_URL";

fn main() {
    println!("cargo:rerun-if-env-changed={BASE_URL_VAR}");
    // Watch only files that exist; a missing path reruns the script every build.
    for env_file in [".env", "../.env"] {
        if Path::new(env_file).exists() {
            println!("cargo:rerun-if-changed={env_file}");
        }
    }

    // Values already in the environment win; dotenvy never overrides them.
    let _ = dotenvy::dotenv();

    match env::var(BASE_URL_VAR) {
        Ok(url) => println!("cargo:rustc-env={BASE_URL_VAR}={url}"),
        Err(_) => println!(
            "cargo:warning={BASE_URL_VAR} is not set; the client will call the feedback API on its own origin"
        ),
    }
}
