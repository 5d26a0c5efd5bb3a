// SPDX-License-Identifier: MPL-2.0
//! Custom Iced widgets.

pub mod measured;

pub use measured::{measured, Measured};
