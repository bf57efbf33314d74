use reqwest::Client;

use crate::{config::Config, types::Artist};

/// Retrieves a single artist's metadata.
///
/// Used after rebalancing to resolve the dominant artist's display name for
/// the playlist title and its image set for the cover composite. The image
/// list comes back widest first, so callers wanting the smallest resolution
/// take the last entry.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `artist_id` - Id of the artist to look up
/// * `config` - Runtime configuration carrying the API base URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Artist)` - Artist id, display name, and cover image set
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
pub async fn get_artist(
    token: &str,
    artist_id: &str,
    config: &Config,
) -> Result<Artist, reqwest::Error> {
    let api_url = format!(
        "{uri}/artists/{id}",
        uri = &config.api_url,
        id = artist_id
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    response.json::<Artist>().await
}
