use chrono::{DateTime, Utc};
use chrono_tz::Asia::Tokyo;

/// The playlist name and description carry a timestamp in this time zone,
/// matching the audience of the Japanese Top 50 charts.
pub const DISPLAY_TZ: chrono_tz::Tz = Tokyo;

/// Formats an instant as `YYYY/MM/DD HH:MM` in the display time zone.
pub fn format_updated_at(now: DateTime<Utc>) -> String {
    now.with_timezone(&DISPLAY_TZ)
        .format("%Y/%m/%d %H:%M")
        .to_string()
}

/// Name template for the target playlist.
pub fn playlist_name(artist_name: &str) -> String {
    format!("トップ50 - 日本 ({artist_name}少なめ)")
}

/// Description template for the target playlist.
pub fn playlist_description(updated_at: &str) -> String {
    format!("逆張りトップ50 bot (更新日時: {updated_at})")
}
