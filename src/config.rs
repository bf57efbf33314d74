//! Configuration management for the playlist rebuilder.
//!
//! Configuration is read once at process start into an immutable [`Config`]
//! struct that is passed by reference to everything that needs it. There is
//! no ambient global state; a missing required variable is reported as a
//! descriptive error before any network call happens.
//!
//! Values come from the process environment, optionally seeded from a `.env`
//! file in the working directory (convenient both for local runs and for
//! scheduled serverless deployments that inject plain environment variables).

use std::env;

/// Default base URL for the Spotify Web API.
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Default URL of the OAuth token endpoint.
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Immutable runtime configuration, constructed once at process entry.
#[derive(Debug, Clone)]
pub struct Config {
    /// Spotify application client id.
    pub client_id: String,
    /// Spotify application client secret.
    pub client_secret: String,
    /// Long-lived refresh token used to mint access tokens.
    pub refresh_token: String,
    /// Playlist id of the source Top 50 charts.
    pub source_playlist: String,
    /// Playlist id that gets overwritten on every run.
    pub target_playlist: String,
    /// Playlist id of the backfill pool.
    pub complement_playlist: String,
    /// Path to the background image the artist art is composited onto.
    pub cover_background: String,
    /// Base URL of the Spotify Web API.
    pub api_url: String,
    /// URL of the OAuth token endpoint.
    pub token_url: String,
}

/// Loads environment variables from a `.env` file in the working directory.
///
/// The file is optional: when it is absent the process environment is used
/// as-is, which is the normal situation under a scheduler that injects the
/// variables directly.
pub fn load_env() {
    let _ = dotenv::dotenv();
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first missing required variable. The
    /// API URLs are the only optional values and fall back to the public
    /// Spotify endpoints.
    ///
    /// # Example
    ///
    /// ```
    /// use gyakubari::config::Config;
    ///
    /// let config = Config::from_env().expect("incomplete configuration");
    /// ```
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            refresh_token: required("SPOTIFY_REFRESH_TOKEN")?,
            source_playlist: required("SPOTIFY_SOURCE_PLAYLIST")?,
            target_playlist: required("SPOTIFY_TARGET_PLAYLIST")?,
            complement_playlist: required("SPOTIFY_COMPLEMENT_PLAYLIST")?,
            cover_background: required("COVER_BACKGROUND")?,
            api_url: env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            token_url: env::var("SPOTIFY_API_TOKEN_URL")
                .unwrap_or_else(|_| DEFAULT_TOKEN_URL.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(format!("{} must be set", name)),
    }
}
