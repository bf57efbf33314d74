use chrono::{TimeZone, Utc};
use gyakubari::utils::{format_updated_at, playlist_description, playlist_name};

#[test]
fn test_format_updated_at_converts_to_tokyo_time() {
    // Asia/Tokyo is UTC+9 with no daylight saving
    let instant = Utc.with_ymd_and_hms(2024, 1, 2, 0, 5, 0).unwrap();
    assert_eq!(format_updated_at(instant), "2024/01/02 09:05");
}

#[test]
fn test_format_updated_at_rolls_over_the_date() {
    let instant = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
    assert_eq!(format_updated_at(instant), "2025/01/01 05:00");
}

#[test]
fn test_playlist_name_template() {
    assert_eq!(playlist_name("Ado"), "トップ50 - 日本 (Ado少なめ)");
}

#[test]
fn test_playlist_description_template() {
    assert_eq!(
        playlist_description("2024/01/02 09:05"),
        "逆張りトップ50 bot (更新日時: 2024/01/02 09:05)"
    );
}
