use reqwest::Client;

use crate::{
    config::Config,
    rebalance::PLAYLIST_CAPACITY,
    types::{
        PlaylistDetailsRequest, PlaylistItem, PlaylistItemsResponse, ReplaceItemsRequest,
        SnapshotResponse,
    },
};

/// Retrieves the ordered items of a playlist.
///
/// Fetches up to one page of [`PLAYLIST_CAPACITY`] items; both the source
/// charts and the complement pool fit in a single page by design, so no
/// pagination is performed. Entries are returned in playlist order, which
/// for the source charts is the ranking order.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Id of the playlist to read
/// * `config` - Runtime configuration carrying the API base URL
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(Vec<PlaylistItem>)` - Ordered playlist entries; the track of an
///   entry may be null when the API cannot resolve it
/// - `Err(reqwest::Error)` - Network error, API error, or other HTTP-related error
pub async fn get_items(
    token: &str,
    playlist_id: &str,
    config: &Config,
) -> Result<Vec<PlaylistItem>, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks?limit={limit}",
        uri = &config.api_url,
        id = playlist_id,
        limit = PLAYLIST_CAPACITY
    );

    let client = Client::new();
    let response = client
        .get(&api_url)
        .bearer_auth(token)
        .send()
        .await?
        .error_for_status()?;

    let res = response.json::<PlaylistItemsResponse>().await?;
    Ok(res.items)
}

/// Replaces the full contents of a playlist with the given track URIs.
///
/// This is a destructive overwrite: after the call the playlist contains
/// exactly `uris`, in order. Returns the snapshot id of the new playlist
/// revision.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Id of the playlist to overwrite
/// * `uris` - Ordered track URIs forming the new contents
/// * `config` - Runtime configuration carrying the API base URL
pub async fn replace_items(
    token: &str,
    playlist_id: &str,
    uris: Vec<String>,
    config: &Config,
) -> Result<SnapshotResponse, reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = &config.api_url,
        id = playlist_id
    );

    let client = Client::new();
    let response = client
        .put(&api_url)
        .bearer_auth(token)
        .json(&ReplaceItemsRequest { uris })
        .send()
        .await?
        .error_for_status()?;

    response.json::<SnapshotResponse>().await
}

/// Updates a playlist's name and description.
pub async fn update_details(
    token: &str,
    playlist_id: &str,
    name: String,
    description: String,
    config: &Config,
) -> Result<(), reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}",
        uri = &config.api_url,
        id = playlist_id
    );

    let client = Client::new();
    client
        .put(&api_url)
        .bearer_auth(token)
        .json(&PlaylistDetailsRequest { name, description })
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}

/// Uploads a custom cover image for a playlist.
///
/// The Web API expects the raw base64 string of a JPEG (no data-URL prefix)
/// as the request body, with an `image/jpeg` content type. Requires the
/// `ugc-image-upload` scope on the token.
///
/// # Arguments
///
/// * `token` - Valid access token for Spotify API authentication
/// * `playlist_id` - Id of the playlist whose cover is replaced
/// * `jpeg_base64` - Base64-encoded JPEG payload, at most 256 KB decoded
/// * `config` - Runtime configuration carrying the API base URL
pub async fn upload_cover(
    token: &str,
    playlist_id: &str,
    jpeg_base64: String,
    config: &Config,
) -> Result<(), reqwest::Error> {
    let api_url = format!(
        "{uri}/playlists/{id}/images",
        uri = &config.api_url,
        id = playlist_id
    );

    let client = Client::new();
    client
        .put(&api_url)
        .bearer_auth(token)
        .header("Content-Type", "image/jpeg")
        .body(jpeg_base64)
        .send()
        .await?
        .error_for_status()?;

    Ok(())
}
