use std::time::Duration;

use chrono::Utc;
use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    artwork,
    config::Config,
    error, info, rebalance, spotify, success,
    types::{PlaylistItem, Track},
    utils, warning,
};

/// Runs the complete playlist rebuild sequence once.
///
/// In order: refresh the access token, fetch the source and complement
/// playlists, rebalance, overwrite the target playlist's items, update its
/// name and description, and upload a freshly composited cover. Every step
/// is awaited before the next begins and any failure terminates the
/// invocation with a descriptive error.
///
/// The run is idempotent with respect to upstream data: unchanged source and
/// complement playlists produce an identical target playlist, except for the
/// timestamp embedded in the description.
pub async fn update(config: &Config) {
    let token = match spotify::auth::refresh_access_token(config).await {
        Ok(t) => t,
        Err(e) => error!("Failed to refresh access token: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlists...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let source = match spotify::playlist::get_items(
        &token.access_token,
        &config.source_playlist,
        config,
    )
    .await
    {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch source playlist: {}", e);
        }
    };

    let complement = match spotify::playlist::get_items(
        &token.access_token,
        &config.complement_playlist,
        config,
    )
    .await
    {
        Ok(items) => items,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch complement playlist: {}", e);
        }
    };
    pb.finish_and_clear();

    let source_tracks = usable_tracks(source, "source");
    let complement_tracks = usable_tracks(complement, "complement");

    if source_tracks.is_empty() {
        error!(
            "Source playlist {} is empty, nothing to rebalance",
            config.source_playlist
        );
    }

    let rebalanced = rebalance::rebalance(&source_tracks, &complement_tracks);
    let Some(dominant_id) = rebalanced.dominant_artist else {
        error!(
            "Source playlist {} carries no primary-artist information",
            config.source_playlist
        );
    };

    info!(
        "Dominant artist {} suppressed, writing {} tracks",
        dominant_id,
        rebalanced.uris.len()
    );

    match spotify::playlist::replace_items(
        &token.access_token,
        &config.target_playlist,
        rebalanced.uris,
        config,
    )
    .await
    {
        Ok(snapshot) => success!("Target playlist overwritten (snapshot {})", snapshot.snapshot_id),
        Err(e) => error!("Failed to replace target playlist items: {}", e),
    }

    let artist = match spotify::artist::get_artist(&token.access_token, &dominant_id, config).await
    {
        Ok(artist) => artist,
        Err(e) => error!("Failed to look up artist {}: {}", dominant_id, e),
    };

    let updated_at = utils::format_updated_at(Utc::now());
    if let Err(e) = spotify::playlist::update_details(
        &token.access_token,
        &config.target_playlist,
        utils::playlist_name(&artist.name),
        utils::playlist_description(&updated_at),
        config,
    )
    .await
    {
        error!("Failed to update playlist details: {}", e);
    }
    success!("Playlist name and description updated");

    update_cover(config, &token.access_token, &artist).await;

    success!("Playlist updated");
}

/// Drops playlist entries whose track the API could not resolve.
fn usable_tracks(items: Vec<PlaylistItem>, label: &str) -> Vec<Track> {
    let total = items.len();
    let tracks: Vec<Track> = items.into_iter().filter_map(|i| i.track).collect();
    if tracks.len() < total {
        warning!(
            "Skipped {} unresolvable entries in the {} playlist",
            total - tracks.len(),
            label
        );
    }
    tracks
}

/// Composites and uploads the target playlist's cover.
///
/// A missing artist image only skips this step: items and metadata were
/// already written, and a stale cover is preferable to a half-updated
/// playlist that aborts here.
async fn update_cover(config: &Config, token: &str, artist: &crate::types::Artist) {
    // Smallest resolution: the image list comes back widest first.
    let Some(art_image) = artist.images.last() else {
        warning!(
            "Artist {} has no images, skipping cover update",
            artist.name
        );
        return;
    };

    let background = match artwork::load_background(&config.cover_background) {
        Ok(img) => img,
        Err(e) => error!(
            "Failed to load background image {}: {}",
            config.cover_background, e
        ),
    };

    let art = match artwork::fetch_cover_art(&art_image.url).await {
        Ok(img) => img,
        Err(e) => error!("Failed to fetch artist image: {}", e),
    };

    let payload = match artwork::compose_cover(&background, &art) {
        Ok(payload) => payload,
        Err(e) => error!("Failed to compose cover image: {}", e),
    };

    match spotify::playlist::upload_cover(token, &config.target_playlist, payload, config).await {
        Ok(()) => success!("Cover image uploaded"),
        Err(e) => error!("Failed to upload cover image: {}", e),
    }
}
