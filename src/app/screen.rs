// SPDX-License-Identifier: MPL-2.0
use crate::media::PhotoId;

/// Top-level screens the application can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Gallery,
    Viewer(PhotoId),
    Settings,
}
