//! Configuration management for Coverlight.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default so the tool works without
//! any configuration; the variables exist to point the clients at other hosts
//! (mirrors, local test servers) and to identify the client to MusicBrainz.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

pub const DEFAULT_MUSICBRAINZ_API_URL: &str = "https://musicbrainz.org/ws/2";
pub const DEFAULT_COVERART_API_URL: &str = "https://coverartarchive.org";
pub const DEFAULT_DEEZER_API_URL: &str = "https://api.deezer.com";
pub const DEFAULT_LYRICS_API_URL: &str = "https://api.lyrics.ovh";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:3000";
pub const DEFAULT_PROBE_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/coverlight/.env`
/// - macOS: `~/Library/Application Support/coverlight/.env`
/// - Windows: `%LOCALAPPDATA%/coverlight/.env`
///
/// A missing file is not an error since every setting has a default.
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("coverlight/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Returns the address the relay server binds to, e.g. `127.0.0.1:3000`.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the MusicBrainz web service base URL (without trailing slash).
pub fn musicbrainz_apiurl() -> String {
    var_or("MUSICBRAINZ_API_URL", DEFAULT_MUSICBRAINZ_API_URL)
}

/// Returns the Cover Art Archive base URL.
pub fn coverart_apiurl() -> String {
    var_or("COVERART_API_URL", DEFAULT_COVERART_API_URL)
}

/// Returns the Deezer API base URL.
pub fn deezer_apiurl() -> String {
    var_or("DEEZER_API_URL", DEFAULT_DEEZER_API_URL)
}

/// Returns the lyrics.ovh API base URL.
pub fn lyrics_apiurl() -> String {
    var_or("LYRICS_API_URL", DEFAULT_LYRICS_API_URL)
}

/// Returns the User-Agent sent to MusicBrainz.
///
/// MusicBrainz rejects anonymous clients, so the header is sent on every
/// request. The recommended format is `AppName/Version (contact)`; set
/// `COVERLIGHT_USER_AGENT` to include your own contact address.
pub fn user_agent() -> String {
    var_or(
        "COVERLIGHT_USER_AGENT",
        concat!("coverlight/", env!("CARGO_PKG_VERSION")),
    )
}

/// Returns the per-probe timeout for Cover Art Archive requests.
///
/// Read from `PROBE_TIMEOUT_SECS`; unparsable or zero values fall back to the
/// default of 10 seconds.
pub fn probe_timeout() -> Duration {
    let secs = env::var("PROBE_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|v| *v > 0)
        .unwrap_or(DEFAULT_PROBE_TIMEOUT_SECS);
    Duration::from_secs(secs)
}
