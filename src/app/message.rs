// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::{Photo, PhotoId};
use crate::ui::gallery;
use crate::ui::settings;
use crate::ui::viewer;
use iced::widget::image;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Viewer(viewer::Message),
    Settings(settings::Message),
    /// Open the settings screen from the toolbar.
    OpenSettings,
    /// Toolbar action: exit selection mode and clear the selection set.
    ClearSelection,
    /// Trigger the folder picker dialog.
    OpenFolderDialog,
    /// Result from the folder picker dialog.
    OpenFolderDialogResult(Option<PathBuf>),
    /// Result from async directory scanning.
    DirectoryScanCompleted(Result<Vec<Photo>, Error>),
    /// Result from loading one photo's thumbnail in the background.
    ThumbnailLoaded {
        id: PhotoId,
        result: Result<image::Handle, Error>,
    },
    /// Periodic poll of the host appearance for `System` preference.
    HostAppearanceTick,
    /// Deferred window-chrome repaint after a theme change.
    ChromeRepaint,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional folder to scan for photos on startup.
    pub folder: Option<String>,
}
