// SPDX-License-Identifier: MPL-2.0
//! Main update loop: translates top-level messages into state changes and
//! follow-up tasks.

use super::{scan_folder, App, Message, Screen};
use crate::image_handler::{self, THUMBNAIL_SIZE};
use crate::ui::gallery;
use crate::ui::settings;
use crate::ui::viewer;
use iced::Task;

impl App {
    pub(crate) fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(msg) => {
                match gallery::update(&mut self.gallery, msg) {
                    gallery::Effect::OpenPhoto(id) => {
                        self.screen = Screen::Viewer(id);
                    }
                    gallery::Effect::None => {}
                }
                Task::none()
            }

            Message::Viewer(viewer::Message::BackToGallery) => {
                self.screen = Screen::Gallery;
                Task::none()
            }

            Message::Settings(msg) => match settings::update(msg) {
                settings::Event::ThemeSelected(mode) => {
                    // Repaint regardless of whether the mode changed; the
                    // repaint itself is idempotent.
                    self.theme.set_mode(mode);
                    schedule_chrome_repaint()
                }
                settings::Event::BackToGallery => {
                    self.screen = Screen::Gallery;
                    Task::none()
                }
            },

            Message::OpenSettings => {
                self.screen = Screen::Settings;
                Task::none()
            }

            Message::ClearSelection => {
                // Exiting selection mode and clearing the set is the
                // caller's responsibility, paired here.
                let selection = self.gallery.selection_mut();
                selection.deactivate();
                selection.clear();
                Task::none()
            }

            Message::OpenFolderDialog => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Open Folder")
                        .pick_folder()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                Message::OpenFolderDialogResult,
            ),

            Message::OpenFolderDialogResult(Some(folder)) => scan_folder(folder),
            Message::OpenFolderDialogResult(None) => Task::none(),

            Message::DirectoryScanCompleted(Ok(photos)) => {
                let thumbnail_tasks: Vec<Task<Message>> = photos
                    .iter()
                    .map(|photo| {
                        let id = photo.id;
                        Task::perform(
                            image_handler::load_thumbnail(
                                photo.path.clone(),
                                THUMBNAIL_SIZE,
                                self.thumbnail_cache.clone(),
                            ),
                            move |result| Message::ThumbnailLoaded { id, result },
                        )
                    })
                    .collect();

                self.gallery.set_photos(photos);
                self.screen = Screen::Gallery;
                Task::batch(thumbnail_tasks)
            }
            Message::DirectoryScanCompleted(Err(error)) => {
                eprintln!("Failed to scan folder: {}", error);
                Task::none()
            }

            Message::ThumbnailLoaded { id, result } => {
                match result {
                    Ok(handle) => self.gallery.set_thumbnail(id, handle),
                    Err(error) => eprintln!("Failed to load thumbnail: {}", error),
                }
                Task::none()
            }

            Message::HostAppearanceTick => {
                if self.theme.host_appearance_changed() {
                    schedule_chrome_repaint()
                } else {
                    Task::none()
                }
            }

            // The theme is re-derived by `App::theme` during this update
            // cycle; the message only exists to run after the current one.
            Message::ChromeRepaint => Task::none(),
        }
    }
}

/// Defers the window-chrome repaint to the next tick of the event loop so
/// it runs after the current update cycle completes.
fn schedule_chrome_repaint() -> Task<Message> {
    Task::perform(async {}, |()| Message::ChromeRepaint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{Photo, PhotoId};
    use std::path::PathBuf;

    fn photos(n: u64) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo::new(PhotoId(i), PathBuf::from(format!("/pics/{i}.jpg"))))
            .collect()
    }

    #[test]
    fn scan_completion_replaces_the_photo_list() {
        let mut app = App::default();
        let _ = app.update(Message::DirectoryScanCompleted(Ok(photos(4))));

        assert_eq!(app.gallery.photos().len(), 4);
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn clear_selection_exits_mode_and_empties_the_set() {
        let mut app = App::default();
        let _ = app.update(Message::DirectoryScanCompleted(Ok(photos(4))));
        app.gallery.selection_mut().activate(PhotoId(1));
        app.gallery.selection_mut().insert(PhotoId(2));

        let _ = app.update(Message::ClearSelection);

        assert!(!app.gallery.selection().is_active());
        assert!(app.gallery.selection().is_empty());
    }

    #[test]
    fn back_from_viewer_returns_to_gallery() {
        let mut app = App::default();
        app.screen = Screen::Viewer(PhotoId(0));

        let _ = app.update(Message::Viewer(viewer::Message::BackToGallery));
        assert_eq!(app.screen, Screen::Gallery);
    }

    #[test]
    fn open_settings_switches_screen() {
        let mut app = App::default();
        let _ = app.update(Message::OpenSettings);
        assert_eq!(app.screen, Screen::Settings);
    }
}
