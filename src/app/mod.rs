// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery, viewer and
//! settings screens.
//!
//! The `App` struct wires together the gallery component, the theme
//! controller and the thumbnail cache, and translates messages into side
//! effects like config persistence or directory scanning. Policy decisions
//! (window sizing, when the selection set is cleared, how the chrome
//! repaint is deferred) live close to the main update loop so user-facing
//! behavior is easy to audit.

mod message;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::directory_scanner;
use crate::image_handler::{self, SharedThumbnailCache};
use crate::ui::gallery;
use crate::ui::theming::ThemeController;
use iced::{window, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state bridging UI components and persisted
/// preferences.
pub struct App {
    screen: Screen,
    gallery: gallery::State,
    theme: ThemeController,
    thumbnail_cache: SharedThumbnailCache,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("photo_count", &self.gallery.photos().len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Gallery,
            gallery: gallery::State::new(),
            theme: ThemeController::from_system(),
            thumbnail_cache: image_handler::create_thumbnail_cache(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and optionally kicks off an
    /// asynchronous folder scan based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = App::default();

        let task = match flags.folder {
            Some(folder) => scan_folder(PathBuf::from(folder)),
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        String::from("Iced Gallery")
    }

    /// Window chrome follows the effective appearance. Re-derived on every
    /// update cycle, so the deferred repaint message only has to force a
    /// cycle, making redundant repaints harmless.
    fn theme(&self) -> Theme {
        if self.theme.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(self.screen, self.gallery.awaiting_long_press())
    }
}

/// Scans `folder` off the UI thread and reports back as a message.
pub(crate) fn scan_folder(folder: PathBuf) -> Task<Message> {
    Task::perform(
        async move { directory_scanner::scan_directory(&folder) },
        Message::DirectoryScanCompleted,
    )
}
