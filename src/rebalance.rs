//! The playlist-rebalancing core.
//!
//! Pure decision logic with no I/O: given the source charts and a complement
//! pool it decides which track URIs end up in the target playlist and which
//! artist counts as dominant. Everything network-related lives in
//! [`crate::spotify`]; this module is fully covered by offline tests.

use std::collections::{HashMap, HashSet};

use crate::types::Track;

/// Nominal capacity of the target playlist. The source charts never carry
/// more entries than this, and backfill tops the result up to it.
pub const PLAYLIST_CAPACITY: usize = 50;

/// Outcome of a rebalancing run.
#[derive(Debug, Clone)]
pub struct Rebalanced {
    /// Ordered track URIs to write to the target playlist.
    pub uris: Vec<String>,
    /// Id of the dominant artist, `None` when the source carried no usable
    /// primary-artist information.
    pub dominant_artist: Option<String>,
}

/// Returns the artist id with the highest occurrence count.
///
/// Ties are broken deterministically: the winner is the first artist,
/// scanning the sequence in its original order, whose count equals the
/// maximum. Returns `None` for an empty sequence.
///
/// # Example
///
/// ```
/// let ids = ["a", "a", "b", "a", "c"];
/// assert_eq!(dominant_artist(&ids), Some("a"));
/// ```
pub fn dominant_artist<'a>(artist_ids: &[&'a str]) -> Option<&'a str> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in artist_ids {
        *counts.entry(id).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max()?;
    artist_ids
        .iter()
        .copied()
        .find(|id| counts[id] == max_count)
}

/// Computes the target playlist contents from the source charts and the
/// complement pool.
///
/// The dominant artist keeps exactly one track: the first of its entries in
/// source order (its highest-ranked one). Every other track of that artist
/// is dropped, the relative order of the remainder is preserved, and the
/// freed slots are backfilled from `complement` with tracks whose primary
/// artist appears nowhere in the source charts. Backfill never pushes the
/// result past [`PLAYLIST_CAPACITY`], and an oversized source is passed
/// through without truncation.
///
/// Tracks without any artist entry are kept as-is but contribute nothing to
/// the frequency count; complement tracks without an artist are never used
/// for backfill.
///
/// An empty source (or one without a single primary artist) yields an empty
/// result with `dominant_artist == None`; the caller decides whether that is
/// fatal before writing anything.
pub fn rebalance(source: &[Track], complement: &[Track]) -> Rebalanced {
    let artist_ids: Vec<&str> = source.iter().filter_map(Track::primary_artist).collect();

    let Some(dominant) = dominant_artist(&artist_ids).map(str::to_string) else {
        return Rebalanced {
            uris: Vec::new(),
            dominant_artist: None,
        };
    };

    // Index of the representative track: the dominant artist's first entry.
    let representative = source
        .iter()
        .position(|t| t.primary_artist() == Some(dominant.as_str()));

    let mut uris: Vec<String> = source
        .iter()
        .enumerate()
        .filter(|(i, t)| {
            Some(*i) == representative || t.primary_artist() != Some(dominant.as_str())
        })
        .map(|(_, t)| t.uri.clone())
        .collect();

    // Backfill pool: complement tracks by artists wholly absent from the
    // source charts (which also rules out the dominant artist itself).
    let source_artists: HashSet<&str> = artist_ids.iter().copied().collect();
    if uris.len() <= PLAYLIST_CAPACITY {
        let deficit = PLAYLIST_CAPACITY - uris.len();
        uris.extend(
            complement
                .iter()
                .filter(|t| {
                    t.primary_artist()
                        .is_some_and(|a| !source_artists.contains(a))
                })
                .take(deficit)
                .map(|t| t.uri.clone()),
        );
    }

    Rebalanced {
        uris,
        dominant_artist: Some(dominant),
    }
}
