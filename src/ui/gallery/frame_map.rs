// SPDX-License-Identifier: MPL-2.0
//! Cell frame tracking for drag hit-testing.
//!
//! Every rendered cell reports its rectangle in the unscrolled grid layout
//! space whenever its layout changes; the map keeps the latest report per
//! photo. Callers hit-testing window-space cursor positions must translate
//! them by the current scroll offset first. Reports arrive asynchronously
//! relative to gesture handling, so a cell that has not reported yet
//! simply cannot be hit.
//!
//! Hit-testing is a linear scan. Grids are bounded by the visible
//! viewport, so no spatial index is warranted; `benches/hit_testing.rs`
//! documents the cost envelope.

use crate::media::PhotoId;
use iced::{Point, Rectangle};
use std::collections::HashMap;

/// Latest known rectangle per photo cell.
#[derive(Debug, Clone, Default)]
pub struct CellFrameMap {
    frames: HashMap<PhotoId, Rectangle>,
}

impl CellFrameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the rectangle for `id`, overwriting any previous report.
    pub fn report(&mut self, id: PhotoId, bounds: Rectangle) {
        self.frames.insert(id, bounds);
    }

    /// All photos whose rectangle contains `point`.
    pub fn hits(&self, point: Point) -> impl Iterator<Item = PhotoId> + '_ {
        self.frames
            .iter()
            .filter(move |(_, bounds)| bounds.contains(point))
            .map(|(id, _)| *id)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Drops all reports, e.g. when the photo list is replaced.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Size;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rectangle {
        Rectangle::new(Point::new(x, y), Size::new(w, h))
    }

    #[test]
    fn empty_map_yields_no_hits() {
        let map = CellFrameMap::new();
        assert_eq!(map.hits(Point::new(10.0, 10.0)).count(), 0);
    }

    #[test]
    fn point_inside_a_frame_hits_its_photo() {
        let mut map = CellFrameMap::new();
        map.report(PhotoId(1), rect(0.0, 0.0, 100.0, 100.0));
        map.report(PhotoId(2), rect(110.0, 0.0, 100.0, 100.0));

        let hits: Vec<_> = map.hits(Point::new(150.0, 50.0)).collect();
        assert_eq!(hits, vec![PhotoId(2)]);
    }

    #[test]
    fn point_outside_all_frames_misses() {
        let mut map = CellFrameMap::new();
        map.report(PhotoId(1), rect(0.0, 0.0, 100.0, 100.0));

        assert_eq!(map.hits(Point::new(500.0, 500.0)).count(), 0);
    }

    #[test]
    fn duplicate_reports_overwrite() {
        let mut map = CellFrameMap::new();
        map.report(PhotoId(1), rect(0.0, 0.0, 100.0, 100.0));
        map.report(PhotoId(1), rect(200.0, 200.0, 100.0, 100.0));

        assert_eq!(map.len(), 1);
        assert_eq!(map.hits(Point::new(50.0, 50.0)).count(), 0);
        assert_eq!(map.hits(Point::new(250.0, 250.0)).count(), 1);
    }

    #[test]
    fn overlapping_frames_all_hit() {
        // Overlap is not expected from real layouts, but the scan must
        // tolerate it and report every containing cell.
        let mut map = CellFrameMap::new();
        map.report(PhotoId(1), rect(0.0, 0.0, 100.0, 100.0));
        map.report(PhotoId(2), rect(50.0, 50.0, 100.0, 100.0));

        let mut hits: Vec<_> = map.hits(Point::new(75.0, 75.0)).collect();
        hits.sort();
        assert_eq!(hits, vec![PhotoId(1), PhotoId(2)]);
    }

    #[test]
    fn clear_forgets_all_reports() {
        let mut map = CellFrameMap::new();
        map.report(PhotoId(1), rect(0.0, 0.0, 100.0, 100.0));
        map.clear();
        assert!(map.is_empty());
    }
}
