// SPDX-License-Identifier: MPL-2.0
//! Directory scanner module for finding and ordering photos.
//!
//! Scans a directory (non-recursively) for supported image formats and
//! returns them as an ordered photo list, sorted alphabetically by file
//! name. Identifiers are assigned sequentially in sort order.

use crate::error::Result;
use crate::media::{self, Photo, PhotoId};
use std::path::Path;

/// Scans `directory` for supported images.
///
/// Subdirectories are ignored. Unsupported files are skipped silently. An
/// empty directory yields an empty list, not an error.
pub fn scan_directory(directory: &Path) -> Result<Vec<Photo>> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && media::is_supported_image(&path) {
            paths.push(path);
        }
    }

    paths.sort_by_key(|path| {
        path.file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    });

    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| Photo::new(PhotoId(index as u64), path))
        .collect())
}
