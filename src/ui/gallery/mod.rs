// SPDX-License-Identifier: MPL-2.0
//! Multi-select photo grid.
//!
//! [`selection`] and [`frame_map`] hold the plain interaction state,
//! [`component`] interprets gestures, [`view`] renders.

pub mod component;
pub mod frame_map;
pub mod selection;
pub mod view;

pub use component::{update, Effect, Message, State, COLUMNS, LONG_PRESS_THRESHOLD};
pub use frame_map::CellFrameMap;
pub use selection::SelectionState;
pub use view::view;
