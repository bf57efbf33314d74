//! Cover artwork generation.
//!
//! The target playlist's cover is the dominant artist's image composited
//! onto a fixed background at a fixed offset, re-encoded as JPEG and
//! base64-encoded the way the cover-upload endpoint expects it.

use std::io::Cursor;

use base64::{Engine, engine::general_purpose::STANDARD};
use image::{DynamicImage, ImageFormat, imageops};

use crate::Res;

/// Horizontal offset of the artist image on the background.
pub const ART_OFFSET_X: i64 = 20;

/// Vertical offset of the artist image on the background.
pub const ART_OFFSET_Y: i64 = 100;

/// Loads the background image from the configured path.
pub fn load_background(path: &str) -> Res<DynamicImage> {
    Ok(image::open(path)?)
}

/// Downloads and decodes the artist's cover image.
///
/// The format is whatever the CDN serves (in practice JPEG); decoding is
/// format-sniffed rather than assumed.
pub async fn fetch_cover_art(url: &str) -> Res<DynamicImage> {
    let bytes = reqwest::get(url)
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(image::load_from_memory(&bytes)?)
}

/// Composites the artist image onto the background and returns the result as
/// a base64-encoded JPEG payload (no data-URL prefix).
///
/// The background's dimensions are kept; the artist image is placed at
/// ([`ART_OFFSET_X`], [`ART_OFFSET_Y`]) and clipped at the background's
/// edges if it does not fit.
pub fn compose_cover(background: &DynamicImage, art: &DynamicImage) -> Res<String> {
    let mut canvas = background.clone();
    imageops::overlay(&mut canvas, art, ART_OFFSET_X, ART_OFFSET_Y);

    // JPEG has no alpha channel, so flatten before encoding.
    let canvas = DynamicImage::ImageRgb8(canvas.to_rgb8());
    let mut buf = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)?;

    Ok(STANDARD.encode(buf))
}
