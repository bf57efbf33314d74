//! # Spotify Integration Module
//!
//! This module is the integration layer between the rebalancer and the
//! Spotify Web API. It handles all HTTP communication and JSON decoding and
//! exposes plain async functions for the handful of endpoints the update
//! sequence needs.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Rebalancer)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (refresh-token grant)
//!     ├── Playlist Operations (read, replace, details, cover)
//!     └── Artist Lookup (name, image set)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! [`auth`] - Mints a short-lived access token from the long-lived refresh
//! token stored in the configuration. The refresh-token grant authenticates
//! with HTTP Basic auth (client id and secret), so no interactive OAuth flow
//! or local callback server is involved.
//!
//! [`playlist`] - Playlist reads and writes:
//! - **Item Retrieval**: Ordered track items with URI and artist information
//! - **Item Replacement**: Full overwrite of the target playlist's contents
//! - **Metadata Update**: Playlist name and description
//! - **Cover Upload**: Base64 JPEG custom cover image
//!
//! [`artist`] - Single-artist lookup for the dominant artist's display name
//! and cover image set.
//!
//! ## Error Handling Philosophy
//!
//! Deliberately fail-fast: every function returns the first error it hits
//! (`reqwest::Error` for API calls, `String` for token handling) and nothing
//! in this layer retries, backs off, or caches. Each invocation of the tool
//! is independent and fully overwrites the target playlist, so a failed run
//! simply leaves the previous state in place until the next trigger.
//!
//! ## API Coverage
//!
//! - `POST {token_url}` - Access token from refresh token
//! - `GET /playlists/{id}/tracks` - Ordered playlist items
//! - `PUT /playlists/{id}/tracks` - Replace playlist items
//! - `PUT /playlists/{id}` - Change playlist details
//! - `PUT /playlists/{id}/images` - Upload custom cover image
//! - `GET /artists/{id}` - Artist metadata
//!
//! ## Thread Safety
//!
//! The module is designed for async single-threaded use: the update sequence
//! awaits every call before issuing the next, and there is no shared mutable
//! state between calls.

pub mod artist;
pub mod auth;
pub mod playlist;
