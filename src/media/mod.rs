// SPDX-License-Identifier: MPL-2.0
//! Photo identity and supported image formats.
//!
//! A [`Photo`] is an identity-bearing handle over a file on disk. Equality
//! and hashing go through the identifier only, so a photo stays "the same"
//! across re-scans even if ancillary data attached to it changes.

use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

/// Image file extensions the gallery knows how to display.
pub const SUPPORTED_EXTENSIONS: [&str; 9] = [
    "jpg", "jpeg", "png", "gif", "tiff", "tif", "webp", "bmp", "ico",
];

/// Stable unique identifier for a photo, assigned at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhotoId(pub u64);

/// A photo known to the gallery.
#[derive(Debug, Clone)]
pub struct Photo {
    pub id: PhotoId,
    pub path: PathBuf,
}

impl Photo {
    pub fn new(id: PhotoId, path: PathBuf) -> Self {
        Self { id, path }
    }

    /// File name for display purposes; empty string when the path has none.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl PartialEq for Photo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Photo {}

impl Hash for Photo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Returns `true` if the path has a supported image extension.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}
