// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a photo-gallery application built with the Iced GUI framework.
//!
//! It renders a folder of photos as a three-column grid with multi-select
//! (tap to toggle, long-press to enter selection mode, drag to select) and
//! manages a persisted light/dark/system theme preference.

pub mod app;
pub mod config;
pub mod directory_scanner;
pub mod error;
pub mod image_handler;
pub mod media;
pub mod ui;
