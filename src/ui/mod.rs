// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`gallery`] - Multi-select photo grid with drag-to-select
//! - [`viewer`] - Single photo display
//! - [`settings`] - Theme preference selection
//!
//! # Shared Infrastructure
//!
//! - [`theming`] - Light/Dark/System theme management and color schemes
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`widgets`] - Custom Iced widgets (bounds-reporting cell wrapper)

pub mod design_tokens;
pub mod gallery;
pub mod settings;
pub mod theming;
pub mod viewer;
pub mod widgets;
