// SPDX-License-Identifier: MPL-2.0
//! Multi-select state for the gallery grid.
//!
//! Selection mode is entered by a long-press and owns a set of photo
//! identifiers. Taps toggle membership, drag traversal only ever inserts.
//! Exiting selection mode does not clear the set here: the owning caller
//! decides when to clear, which allows pre-seeded selections.

use crate::media::PhotoId;
use std::collections::HashSet;

/// Tracks the selected photos and whether selection mode is active.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: HashSet<PhotoId>,
    active: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_selected(&self, id: PhotoId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// The current selection set.
    pub fn selected(&self) -> &HashSet<PhotoId> {
        &self.selected
    }

    /// Long-press entry point: activates selection mode with exactly `id`
    /// selected. No-op when mode is already active.
    pub fn activate(&mut self, id: PhotoId) {
        if self.active {
            return;
        }
        self.active = true;
        self.selected.clear();
        self.selected.insert(id);
    }

    /// Flips the mode flag off. Deliberately leaves the set untouched.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Empties the selection set without touching the mode flag.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Tap while selection mode is active: toggles membership of `id`.
    pub fn toggle(&mut self, id: PhotoId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Drag traversal: inserts `id`. Idempotent, never removes.
    ///
    /// Returns `true` when the photo was newly selected.
    pub fn insert(&mut self, id: PhotoId) -> bool {
        self.selected.insert(id)
    }
}
