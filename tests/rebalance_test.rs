use gyakubari::rebalance::{PLAYLIST_CAPACITY, dominant_artist, rebalance};
use gyakubari::types::{Track, TrackArtist};

// Helper function to create a test track with a single primary artist
fn create_test_track(uri: &str, artist_id: &str) -> Track {
    Track {
        uri: uri.to_string(),
        name: format!("{}_name", uri),
        artists: vec![TrackArtist {
            id: artist_id.to_string(),
            name: format!("{}_artist_name", artist_id),
        }],
    }
}

// Helper function to create a test track without any artist entry
fn create_artistless_track(uri: &str) -> Track {
    Track {
        uri: uri.to_string(),
        name: format!("{}_name", uri),
        artists: Vec::new(),
    }
}

#[test]
fn test_dominant_artist_highest_count() {
    let ids = ["a", "a", "b", "a", "c"];
    assert_eq!(dominant_artist(&ids), Some("a"));
}

#[test]
fn test_dominant_artist_tie_break_is_first_in_order() {
    // b and a both reach count 2; b reaches it first in source order
    let ids = ["b", "a", "a", "b"];
    assert_eq!(dominant_artist(&ids), Some("b"));

    // Reversed roles to make sure the result is not accidental
    let ids = ["a", "b", "b", "a"];
    assert_eq!(dominant_artist(&ids), Some("a"));
}

#[test]
fn test_dominant_artist_empty_input() {
    let ids: [&str; 0] = [];
    assert_eq!(dominant_artist(&ids), None);
}

#[test]
fn test_suppression_keeps_only_the_representative_track() {
    // Artists [A, B, A, A]: dominant is A, representative is index 0
    let source = vec![
        create_test_track("uri:1", "a"),
        create_test_track("uri:2", "b"),
        create_test_track("uri:3", "a"),
        create_test_track("uri:4", "a"),
    ];

    let result = rebalance(&source, &[]);

    assert_eq!(result.dominant_artist.as_deref(), Some("a"));
    assert_eq!(result.uris, vec!["uri:1", "uri:2"]);
}

#[test]
fn test_exactly_one_dominant_track_remains() {
    let source = vec![
        create_test_track("uri:1", "b"),
        create_test_track("uri:2", "a"),
        create_test_track("uri:3", "a"),
        create_test_track("uri:4", "c"),
        create_test_track("uri:5", "a"),
    ];

    let result = rebalance(&source, &[]);

    assert_eq!(result.dominant_artist.as_deref(), Some("a"));
    // The representative is the dominant artist's first (highest-ranked) track
    let dominant_uris: Vec<&String> = result
        .uris
        .iter()
        .filter(|u| u.as_str() == "uri:2" || u.as_str() == "uri:3" || u.as_str() == "uri:5")
        .collect();
    assert_eq!(dominant_uris, vec!["uri:2"]);
    assert_eq!(result.uris, vec!["uri:1", "uri:2", "uri:4"]);
}

// Builds a 50-track source where artist "dom" holds `dom_count` slots at the
// front and every other slot belongs to a distinct artist.
fn full_charts(dom_count: usize) -> Vec<Track> {
    let mut source = Vec::new();
    for i in 0..dom_count {
        source.push(create_test_track(&format!("uri:dom{}", i), "dom"));
    }
    for i in dom_count..PLAYLIST_CAPACITY {
        source.push(create_test_track(
            &format!("uri:{}", i),
            &format!("artist{}", i),
        ));
    }
    source
}

#[test]
fn test_backfill_fills_exactly_the_deficit_in_complement_order() {
    // 3 dominant tracks reduced to 1: 48 remain, deficit of 2
    let source = full_charts(3);
    let complement = vec![
        create_test_track("uri:c1", "fresh1"),
        create_test_track("uri:c2", "fresh2"),
        create_test_track("uri:c3", "fresh3"),
    ];

    let result = rebalance(&source, &complement);

    assert_eq!(result.uris.len(), PLAYLIST_CAPACITY);
    // Exactly two appended, preserving complement order
    assert_eq!(result.uris[48], "uri:c1");
    assert_eq!(result.uris[49], "uri:c2");
    assert!(!result.uris.contains(&"uri:c3".to_string()));
}

#[test]
fn test_backfill_pool_excludes_every_source_artist() {
    let source = full_charts(3);
    // artist5 appears in the source even though it is not dominant
    let complement = vec![
        create_test_track("uri:c1", "artist5"),
        create_test_track("uri:c2", "dom"),
        create_test_track("uri:c3", "fresh1"),
        create_test_track("uri:c4", "fresh2"),
    ];

    let result = rebalance(&source, &complement);

    assert_eq!(result.uris.len(), PLAYLIST_CAPACITY);
    assert!(!result.uris.contains(&"uri:c1".to_string()));
    assert!(!result.uris.contains(&"uri:c2".to_string()));
    assert_eq!(result.uris[48], "uri:c3");
    assert_eq!(result.uris[49], "uri:c4");
}

#[test]
fn test_backfill_skips_artistless_complement_tracks() {
    let source = full_charts(2);
    let complement = vec![
        create_artistless_track("uri:c1"),
        create_test_track("uri:c2", "fresh1"),
    ];

    let result = rebalance(&source, &complement);

    // Deficit of 1, filled by the only usable complement track
    assert_eq!(result.uris.len(), PLAYLIST_CAPACITY);
    assert_eq!(result.uris[49], "uri:c2");
}

#[test]
fn test_no_backfill_when_nothing_was_suppressed() {
    // 50 distinct artists: the dominant has a single occurrence, so nothing
    // is removed and the complement is never touched
    let source = full_charts(1);
    let complement = vec![create_test_track("uri:c1", "fresh1")];

    let result = rebalance(&source, &complement);

    assert_eq!(result.uris.len(), PLAYLIST_CAPACITY);
    assert!(!result.uris.contains(&"uri:c1".to_string()));
}

#[test]
fn test_oversized_source_is_not_truncated() {
    // 52 distinct artists: more than capacity remains after suppression
    let mut source = Vec::new();
    for i in 0..(PLAYLIST_CAPACITY + 2) {
        source.push(create_test_track(
            &format!("uri:{}", i),
            &format!("artist{}", i),
        ));
    }
    let complement = vec![create_test_track("uri:c1", "fresh1")];

    let result = rebalance(&source, &complement);

    assert_eq!(result.uris.len(), PLAYLIST_CAPACITY + 2);
    assert!(!result.uris.contains(&"uri:c1".to_string()));
}

#[test]
fn test_short_source_is_topped_up_to_capacity() {
    // A 4-track source with no repeats: deficit of 46, complement has 2
    let source = vec![
        create_test_track("uri:1", "a"),
        create_test_track("uri:2", "b"),
        create_test_track("uri:3", "c"),
        create_test_track("uri:4", "d"),
    ];
    let complement = vec![
        create_test_track("uri:c1", "e"),
        create_test_track("uri:c2", "f"),
    ];

    let result = rebalance(&source, &complement);

    assert_eq!(
        result.uris,
        vec!["uri:1", "uri:2", "uri:3", "uri:4", "uri:c1", "uri:c2"]
    );
}

#[test]
fn test_empty_source_yields_empty_result_without_panicking() {
    let complement = vec![create_test_track("uri:c1", "fresh1")];

    let result = rebalance(&[], &complement);

    assert_eq!(result.dominant_artist, None);
    assert!(result.uris.is_empty());
}

#[test]
fn test_source_without_primary_artists_yields_no_dominant() {
    let source = vec![
        create_artistless_track("uri:1"),
        create_artistless_track("uri:2"),
    ];

    let result = rebalance(&source, &[]);

    assert_eq!(result.dominant_artist, None);
    assert!(result.uris.is_empty());
}

#[test]
fn test_artistless_source_tracks_survive_suppression() {
    let source = vec![
        create_test_track("uri:1", "a"),
        create_artistless_track("uri:2"),
        create_test_track("uri:3", "a"),
    ];

    let result = rebalance(&source, &[]);

    assert_eq!(result.dominant_artist.as_deref(), Some("a"));
    // The artistless track never matches the dominant artist, so it is kept
    assert_eq!(result.uris, vec!["uri:1", "uri:2"]);
}
