// SPDX-License-Identifier: MPL-2.0
//! End-to-end exercises of the gallery gestures and the theme controller
//! through their public APIs only.

use iced::widget::scrollable::AbsoluteOffset;
use iced::{mouse, Event, Point, Rectangle, Size};
use iced_gallery::media::{Photo, PhotoId};
use iced_gallery::ui::gallery::{self, LONG_PRESS_THRESHOLD};
use iced_gallery::ui::theming::{
    AppearanceSource, ColorScheme, PreferenceStore, ThemeController, ThemeMode,
};
use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Instant;

fn gallery_with_grid(rows: u64) -> gallery::State {
    let mut state = gallery::State::new();
    let count = rows * 3;
    state.set_photos(
        (0..count)
            .map(|i| Photo::new(PhotoId(i), PathBuf::from(format!("/pics/{i:03}.jpg"))))
            .collect(),
    );

    // Report frames the way the measuring widgets would: 3 columns,
    // 100x100 cells on a 110px pitch.
    for i in 0..count {
        let col = (i % 3) as f32;
        let row = (i / 3) as f32;
        gallery::update(
            &mut state,
            gallery::Message::CellMeasured {
                id: PhotoId(i),
                bounds: Rectangle::new(
                    Point::new(col * 110.0, row * 110.0),
                    Size::new(100.0, 100.0),
                ),
            },
        );
    }
    state
}

fn cursor(state: &mut gallery::State, x: f32, y: f32) -> gallery::Effect {
    gallery::update(
        state,
        gallery::Message::RawEvent(Event::Mouse(mouse::Event::CursorMoved {
            position: Point::new(x, y),
        })),
    )
}

fn press(state: &mut gallery::State) -> gallery::Effect {
    gallery::update(
        state,
        gallery::Message::RawEvent(Event::Mouse(mouse::Event::ButtonPressed(
            mouse::Button::Left,
        ))),
    )
}

fn release(state: &mut gallery::State) -> gallery::Effect {
    gallery::update(
        state,
        gallery::Message::RawEvent(Event::Mouse(mouse::Event::ButtonReleased(
            mouse::Button::Left,
        ))),
    )
}

fn long_press_at(state: &mut gallery::State, x: f32, y: f32) {
    cursor(state, x, y);
    press(state);
    std::thread::sleep(LONG_PRESS_THRESHOLD + std::time::Duration::from_millis(30));
    gallery::update(state, gallery::Message::Tick(Instant::now()));
    release(state);
}

#[test]
fn long_press_then_drag_selects_a_path_of_cells() {
    let mut state = gallery_with_grid(3);

    // Long-press cell 0, keep the button down and sweep the first row,
    // then down into the second row.
    cursor(&mut state, 50.0, 50.0);
    press(&mut state);
    std::thread::sleep(LONG_PRESS_THRESHOLD + std::time::Duration::from_millis(30));
    gallery::update(&mut state, gallery::Message::Tick(Instant::now()));
    assert!(state.selection().is_active());

    let before: Vec<PhotoId> = state.selection().selected().iter().copied().collect();
    cursor(&mut state, 160.0, 50.0);
    cursor(&mut state, 270.0, 50.0);
    cursor(&mut state, 270.0, 160.0);
    release(&mut state);

    // Monotonic growth: everything selected before the drag is still there.
    for id in before {
        assert!(state.selection().is_selected(id));
    }
    for id in [0, 1, 2, 5] {
        assert!(state.selection().is_selected(PhotoId(id)), "cell {id}");
    }
    assert_eq!(state.selection().len(), 4);
}

#[test]
fn tap_sequence_in_selection_mode_follows_toggle_parity() {
    let mut state = gallery_with_grid(2);
    long_press_at(&mut state, 50.0, 50.0);

    let taps = [(160.0, 50.0), (270.0, 50.0), (160.0, 50.0)];
    for (x, y) in taps {
        cursor(&mut state, x, y);
        press(&mut state);
        release(&mut state);
    }

    // Cell 1 tapped twice (deselected), cell 2 once (selected),
    // cell 0 selected by the long press.
    assert!(state.selection().is_selected(PhotoId(0)));
    assert!(!state.selection().is_selected(PhotoId(1)));
    assert!(state.selection().is_selected(PhotoId(2)));
}

#[test]
fn drag_under_a_scroll_offset_selects_the_visually_hit_row() {
    let mut state = gallery_with_grid(3);

    // Scroll one row out of view; window y=50 now hovers the second row.
    gallery::update(
        &mut state,
        gallery::Message::Scrolled(AbsoluteOffset { x: 0.0, y: 110.0 }),
    );

    cursor(&mut state, 50.0, 50.0);
    press(&mut state);
    std::thread::sleep(LONG_PRESS_THRESHOLD + std::time::Duration::from_millis(30));
    gallery::update(&mut state, gallery::Message::Tick(Instant::now()));
    assert!(state.selection().is_selected(PhotoId(3)));

    cursor(&mut state, 160.0, 50.0);
    cursor(&mut state, 270.0, 50.0);
    release(&mut state);

    assert_eq!(state.selection().len(), 3);
    for id in [3, 4, 5] {
        assert!(state.selection().is_selected(PhotoId(id)), "cell {id}");
    }
}

#[test]
fn tap_outside_selection_mode_opens_instead_of_selecting() {
    let mut state = gallery_with_grid(1);

    cursor(&mut state, 160.0, 50.0);
    press(&mut state);
    let effect = release(&mut state);

    assert_eq!(effect, gallery::Effect::OpenPhoto(PhotoId(1)));
    assert!(!state.selection().is_active());
    assert!(state.selection().is_empty());
}

#[derive(Clone, Default)]
struct FakeAppearance {
    dark: Rc<Cell<bool>>,
}

impl AppearanceSource for FakeAppearance {
    fn is_dark(&self) -> bool {
        self.dark.get()
    }
}

#[derive(Default)]
struct NullStore;

impl PreferenceStore for NullStore {
    fn load(&self) -> ThemeMode {
        ThemeMode::default()
    }

    fn save(&mut self, _mode: ThemeMode) {}
}

#[test]
fn theme_flow_from_default_to_dark_and_back_to_system() {
    let appearance = FakeAppearance::default();
    let mut controller =
        ThemeController::new(Box::new(NullStore), Box::new(appearance.clone()));

    let notifications = Rc::new(Cell::new(0));
    let counter = notifications.clone();
    controller.subscribe(Box::new(move |_| counter.set(counter.get() + 1)));

    assert_eq!(controller.mode(), ThemeMode::System);
    assert!(!controller.is_dark());

    assert!(controller.set_mode(ThemeMode::Dark));
    assert!(controller.is_dark());

    // Host flips while an explicit preference is set: ignored.
    appearance.dark.set(true);
    assert!(!controller.host_appearance_changed());

    // Back to system under a dark host: preference change, appearance
    // already dark.
    assert!(controller.set_mode(ThemeMode::System));
    assert!(controller.is_dark());

    appearance.dark.set(false);
    assert!(controller.host_appearance_changed());
    assert!(!controller.is_dark());

    assert_eq!(notifications.get(), 3);
}

#[test]
fn color_schemes_track_the_controller_appearance() {
    let appearance = FakeAppearance::default();
    appearance.dark.set(true);
    let mut controller =
        ThemeController::new(Box::new(NullStore), Box::new(appearance.clone()));

    assert_eq!(controller.colors(), ColorScheme::dark());

    controller.set_mode(ThemeMode::Light);
    assert_eq!(controller.colors(), ColorScheme::light());
}
