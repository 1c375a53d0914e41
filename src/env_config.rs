//! Shared environment configuration for the service binary.
//!
//! Consolidates the `PORT`, `SELF_URL`, `TAIXIU_SOURCE_URL` and
//! `TAIXIU_HISTORY_FILE` reads.

use crate::constants::{DEFAULT_HISTORY_FILE, DEFAULT_SOURCE_URL};

/// Read `PORT` (default 5000).
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000)
}

/// Read `SELF_URL` (default `http://localhost:<port>`), the base URL the
/// keep-alive pinger calls back into.
pub fn self_url(port: u16) -> String {
    std::env::var("SELF_URL").unwrap_or_else(|_| format!("http://localhost:{}", port))
}

/// Read `TAIXIU_SOURCE_URL` (default the public feed).
pub fn source_url() -> String {
    std::env::var("TAIXIU_SOURCE_URL").unwrap_or_else(|_| DEFAULT_SOURCE_URL.to_string())
}

/// Read `TAIXIU_HISTORY_FILE` (default `history.json`).
pub fn history_file() -> String {
    std::env::var("TAIXIU_HISTORY_FILE").unwrap_or_else(|_| DEFAULT_HISTORY_FILE.to_string())
}
