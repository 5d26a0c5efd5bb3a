// SPDX-License-Identifier: MPL-2.0
//! Thumbnail loading service.
//!
//! Turns a photo path plus a target pixel size into a displayable
//! [`image::Handle`]. Decoding happens on a blocking worker so the UI loop
//! never stalls on large files. Decoded thumbnails are kept in a shared LRU
//! cache so revisiting a folder does not re-decode everything.

use crate::error::{Error, Result};
use iced::widget::image;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Edge length in pixels thumbnails are decoded at.
pub const THUMBNAIL_SIZE: u32 = 256;

/// Number of decoded thumbnails retained in the cache.
const CACHE_CAPACITY: usize = 512;

/// Shared thumbnail cache, keyed by source path.
pub type SharedThumbnailCache = Arc<Mutex<LruCache<PathBuf, image::Handle>>>;

/// Creates the process-wide thumbnail cache.
pub fn create_thumbnail_cache() -> SharedThumbnailCache {
    Arc::new(Mutex::new(LruCache::new(
        NonZeroUsize::new(CACHE_CAPACITY).expect("cache capacity is non-zero"),
    )))
}

/// Loads a thumbnail for `path`, decoding at most `size`x`size` pixels.
///
/// Cache hits return immediately; misses decode on a blocking task and
/// populate the cache on the way out.
pub async fn load_thumbnail(
    path: PathBuf,
    size: u32,
    cache: SharedThumbnailCache,
) -> Result<image::Handle> {
    if let Some(handle) = cache.lock().ok().and_then(|mut c| c.get(&path).cloned()) {
        return Ok(handle);
    }

    let decode_path = path.clone();
    let handle = tokio::task::spawn_blocking(move || decode_thumbnail(&decode_path, size))
        .await
        .map_err(|e| Error::Image(e.to_string()))??;

    if let Ok(mut cache) = cache.lock() {
        cache.put(path, handle.clone());
    }

    Ok(handle)
}

/// Decodes `path` and downscales it to fit in a `size`x`size` box,
/// preserving aspect ratio.
pub fn decode_thumbnail(path: &std::path::Path, size: u32) -> Result<image::Handle> {
    let decoded = image_rs::open(path)?;
    let thumbnail = decoded.thumbnail(size, size).to_rgba8();
    let (width, height) = thumbnail.dimensions();

    Ok(image::Handle::from_rgba(
        width,
        height,
        thumbnail.into_raw(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_test_png(path: &std::path::Path, width: u32, height: u32) {
        let buffer = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 20, 30, 255]));
        buffer.save(path).expect("failed to write test png");
    }

    #[test]
    fn decode_thumbnail_downscales_large_images() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("big.png");
        write_test_png(&path, 640, 320);

        let handle = decode_thumbnail(&path, 64);
        assert!(handle.is_ok());
    }

    #[test]
    fn decode_thumbnail_fails_on_missing_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = decode_thumbnail(&dir.path().join("missing.png"), 64);
        assert!(matches!(result, Err(Error::Image(_)) | Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn load_thumbnail_populates_the_cache() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("small.png");
        write_test_png(&path, 32, 32);

        let cache = create_thumbnail_cache();
        let handle = load_thumbnail(path.clone(), 64, cache.clone()).await;
        assert!(handle.is_ok());

        let cached = cache.lock().expect("cache poisoned").contains(&path);
        assert!(cached);
    }
}
