// SPDX-License-Identifier: MPL-2.0
//! Theme preference management.
//!
//! [`ThemeController`] owns the persisted light/dark/system preference and
//! the effective appearance derived from it. Collaborators are injected:
//! the host appearance is read through an [`AppearanceSource`] and the
//! preference is persisted through a [`PreferenceStore`], so the controller
//! is fully exercisable in tests without touching the OS or the disk.
//!
//! Views never reach for an ambient theme singleton; they receive a
//! [`ColorScheme`] snapshot from the controller at render time.

use crate::config;
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};

/// User-facing theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// All modes in display order, for the settings screen.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Resolves the effective appearance. `host_is_dark` is only consulted
    /// for [`ThemeMode::System`].
    #[must_use]
    pub fn resolve(self, host_is_dark: bool) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => host_is_dark,
        }
    }

    /// Human-readable label for the settings screen.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::System => "System",
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }
}

/// Source of the host platform's current appearance.
pub trait AppearanceSource {
    fn is_dark(&self) -> bool;
}

/// Reads the host appearance via the `dark-light` crate.
///
/// Defaults to dark when detection fails or reports no preference.
#[derive(Debug, Default)]
pub struct SystemAppearance;

impl AppearanceSource for SystemAppearance {
    fn is_dark(&self) -> bool {
        !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
    }
}

/// Durable storage for the theme preference.
pub trait PreferenceStore {
    fn load(&self) -> ThemeMode;
    fn save(&mut self, mode: ThemeMode);
}

/// Persists the preference inside `settings.toml`.
///
/// Read failures degrade to [`ThemeMode::System`]; write failures are
/// reported on stderr and otherwise ignored, keeping theme handling total.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl PreferenceStore for ConfigStore {
    fn load(&self) -> ThemeMode {
        config::load().theme_mode
    }

    fn save(&mut self, mode: ThemeMode) {
        let mut cfg = config::load();
        cfg.theme_mode = mode;
        if let Err(error) = config::save(&cfg) {
            eprintln!("Failed to save theme preference: {:?}", error);
        }
    }
}

/// Snapshot delivered to observers on every effective change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub is_dark: bool,
}

type Observer = Box<dyn FnMut(ThemeSnapshot)>;

/// Holds the current preference and derived appearance, persists changes,
/// and notifies subscribers.
///
/// Observers are invoked synchronously, in registration order, exactly when
/// the preference or the derived appearance actually changed. They live as
/// long as the controller; dropping the controller deregisters everything.
pub struct ThemeController {
    mode: ThemeMode,
    is_dark: bool,
    source: Box<dyn AppearanceSource>,
    store: Box<dyn PreferenceStore>,
    observers: Vec<Observer>,
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("mode", &self.mode)
            .field("is_dark", &self.is_dark)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ThemeController {
    /// Loads the persisted preference and computes the initial appearance.
    pub fn new(store: Box<dyn PreferenceStore>, source: Box<dyn AppearanceSource>) -> Self {
        let mode = store.load();
        let is_dark = mode.resolve(source.is_dark());

        Self {
            mode,
            is_dark,
            source,
            store,
            observers: Vec::new(),
        }
    }

    /// Production controller backed by `settings.toml` and the OS appearance.
    pub fn from_system() -> Self {
        Self::new(Box::new(ConfigStore), Box::new(SystemAppearance))
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.is_dark
    }

    /// Color scheme for the current effective appearance.
    pub fn colors(&self) -> ColorScheme {
        ColorScheme::for_appearance(self.is_dark)
    }

    /// Registers an observer. Delivery order matches registration order.
    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    /// Stores and persists `mode`, recomputes the effective appearance and
    /// notifies observers when either actually changed.
    ///
    /// Returns `true` when a change was propagated; redundant sets return
    /// `false` and notify nobody.
    pub fn set_mode(&mut self, mode: ThemeMode) -> bool {
        let new_dark = mode.resolve(self.source.is_dark());
        let changed = mode != self.mode || new_dark != self.is_dark;

        self.mode = mode;
        self.is_dark = new_dark;
        self.store.save(mode);

        if changed {
            self.notify();
        }
        changed
    }

    /// Re-reads the host appearance after a change notification.
    ///
    /// Only a `System` preference can be affected; explicit `Light`/`Dark`
    /// preferences ignore the host. Returns `true` when the effective
    /// appearance flipped.
    pub fn host_appearance_changed(&mut self) -> bool {
        let new_dark = self.mode.resolve(self.source.is_dark());
        if new_dark == self.is_dark {
            return false;
        }

        self.is_dark = new_dark;
        self.notify();
        true
    }

    fn notify(&mut self) {
        let snapshot = ThemeSnapshot {
            mode: self.mode,
            is_dark: self.is_dark,
        };
        for observer in &mut self.observers {
            observer(snapshot);
        }
    }
}

/// Semantic color roles for one effective appearance.
///
/// Pure data: [`ColorScheme::for_appearance`] is deterministic and
/// side-effect free, so styling code stays trivially testable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub background: Color,
    pub background_secondary: Color,
    pub card: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub border: Color,
    pub shadow: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::BLACK,
            background_secondary: palette::GRAY_900,
            card: palette::GRAY_800,
            text_primary: palette::WHITE,
            text_secondary: palette::GRAY_200,
            accent: palette::WHITE,
            border: palette::GRAY_700,
            shadow: palette::BLACK,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::WHITE,
            background_secondary: palette::GRAY_50,
            card: palette::GRAY_100,
            text_primary: palette::BLACK,
            text_secondary: palette::GRAY_700,
            accent: palette::BLACK,
            border: palette::GRAY_200,
            shadow: palette::GRAY_400,
        }
    }

    #[must_use]
    pub fn for_appearance(is_dark: bool) -> Self {
        if is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}
