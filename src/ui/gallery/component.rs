// SPDX-License-Identifier: MPL-2.0
//! Gallery grid component encapsulating state and gesture logic.
//!
//! The grid interprets three inputs from the raw event stream:
//!
//! - **Tap** on a cell: toggles membership while selection mode is active,
//!   otherwise asks the parent to open the photo.
//! - **Long-press** (150 ms) on a cell: enters selection mode with exactly
//!   that photo selected.
//! - **Drag**: while selection mode is active, every reported cursor
//!   position is hit-tested against the frame map and every containing
//!   cell is added to the selection. Inserts only, never removes.
//!
//! Raw events are observed, never consumed, so the surrounding scrollable
//! keeps recognizing scroll gestures simultaneously.
//!
//! Cell frames are keyed in the unscrolled grid layout space while raw
//! cursor positions are window-space; hit-testing translates the cursor by
//! the scroll offset the scrollable reports via [`Message::Scrolled`].

use crate::media::{Photo, PhotoId};
use crate::ui::gallery::frame_map::CellFrameMap;
use crate::ui::gallery::selection::SelectionState;
use iced::widget::image;
use iced::widget::scrollable::AbsoluteOffset;
use iced::{mouse, Event, Point, Rectangle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Number of grid columns.
pub const COLUMNS: usize = 3;

/// Press duration after which selection mode is entered.
pub const LONG_PRESS_THRESHOLD: Duration = Duration::from_millis(150);

/// Messages emitted by gallery widgets and the event subscription.
#[derive(Debug, Clone)]
pub enum Message {
    /// A cell reported its laid-out bounds.
    CellMeasured { id: PhotoId, bounds: Rectangle },
    /// The surrounding scrollable reported its absolute offset.
    Scrolled(AbsoluteOffset),
    /// Raw window event routed in by the application subscription.
    RawEvent(Event),
    /// Periodic tick used to fire long-presses without pointer movement.
    Tick(Instant),
}

/// Side effects the application should perform after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Single tap outside selection mode: open the photo.
    OpenPhoto(PhotoId),
}

/// An in-flight press on a cell.
#[derive(Debug, Clone, Copy)]
struct Press {
    id: PhotoId,
    started: Instant,
    /// Whether the cursor moved while pressed; movement turns the press
    /// into a drag and suppresses the tap on release.
    moved: bool,
    /// Whether the long-press threshold already fired for this press.
    long_press_fired: bool,
}

/// Gallery state: the photo list, selection, frame map and gesture state.
#[derive(Debug, Clone, Default)]
pub struct State {
    photos: Vec<Photo>,
    selection: SelectionState,
    frames: CellFrameMap,
    thumbnails: HashMap<PhotoId, image::Handle>,
    press: Option<Press>,
    cursor: Point,
    scroll_offset: AbsoluteOffset,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn photo(&self, id: PhotoId) -> Option<&Photo> {
        self.photos.iter().find(|p| p.id == id)
    }

    /// Live selection binding exposed to the owning caller.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Mutable selection binding; the caller uses this to exit selection
    /// mode and clear the set (the component never auto-clears).
    pub fn selection_mut(&mut self) -> &mut SelectionState {
        &mut self.selection
    }

    pub fn thumbnail(&self, id: PhotoId) -> Option<&image::Handle> {
        self.thumbnails.get(&id)
    }

    /// Replaces the photo list, dropping stale frames, thumbnails,
    /// selection and any in-flight gesture.
    pub fn set_photos(&mut self, photos: Vec<Photo>) {
        self.photos = photos;
        self.frames.clear();
        self.thumbnails.clear();
        self.selection = SelectionState::new();
        self.press = None;
    }

    pub fn set_thumbnail(&mut self, id: PhotoId, handle: image::Handle) {
        self.thumbnails.insert(id, handle);
    }

    /// Whether the tick subscription is needed to arm a pending long-press.
    pub fn awaiting_long_press(&self) -> bool {
        self.press.is_some_and(|p| !p.long_press_fired)
    }

    fn fire_long_press_if_due(&mut self, now: Instant) {
        let Some(press) = &mut self.press else {
            return;
        };
        if press.long_press_fired || now.duration_since(press.started) < LONG_PRESS_THRESHOLD {
            return;
        }

        press.long_press_fired = true;
        // No-op when selection mode is already active.
        self.selection.activate(press.id);
    }

    /// Cursor position translated into the unscrolled grid layout space
    /// the frame map is keyed in. Raw events carry window coordinates; the
    /// scrollable's offset bridges the two.
    fn content_cursor(&self) -> Point {
        Point::new(
            self.cursor.x + self.scroll_offset.x,
            self.cursor.y + self.scroll_offset.y,
        )
    }

    /// Additive drag hit-test at the current cursor position.
    fn drag_select(&mut self) {
        let hits: Vec<PhotoId> = self.frames.hits(self.content_cursor()).collect();
        for id in hits {
            self.selection.insert(id);
        }
    }
}

/// Processes a gallery message and returns the effect for the parent.
pub fn update(state: &mut State, message: Message) -> Effect {
    match message {
        Message::CellMeasured { id, bounds } => {
            state.frames.report(id, bounds);
            Effect::None
        }
        Message::Scrolled(offset) => {
            state.scroll_offset = offset;
            Effect::None
        }
        Message::Tick(now) => {
            state.fire_long_press_if_due(now);
            Effect::None
        }
        Message::RawEvent(event) => handle_raw_event(state, &event),
    }
}

fn handle_raw_event(state: &mut State, event: &Event) -> Effect {
    match event {
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            state.cursor = *position;

            if state.press.is_some() {
                if let Some(press) = &mut state.press {
                    press.moved = true;
                }
                state.fire_long_press_if_due(Instant::now());
                if state.selection.is_active() {
                    state.drag_select();
                }
            }
            Effect::None
        }
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            let pressed_cell: Option<PhotoId> = state.frames.hits(state.content_cursor()).next();
            if let Some(id) = pressed_cell {
                state.press = Some(Press {
                    id,
                    started: Instant::now(),
                    moved: false,
                    long_press_fired: false,
                });
            }
            Effect::None
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            let Some(press) = state.press.take() else {
                return Effect::None;
            };

            let is_tap = !press.moved
                && !press.long_press_fired
                && press.started.elapsed() < LONG_PRESS_THRESHOLD;
            if !is_tap {
                return Effect::None;
            }

            if state.selection.is_active() {
                state.selection.toggle(press.id);
                Effect::None
            } else {
                Effect::OpenPhoto(press.id)
            }
        }
        _ => Effect::None,
    }
}
