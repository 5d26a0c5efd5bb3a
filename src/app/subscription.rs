// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes raw mouse events to the gallery while it is on screen, drives
//! the long-press timer only while a press is pending, and polls the host
//! appearance so a `System` theme preference tracks the OS.

use super::{Message, Screen};
use crate::ui::gallery;
use iced::{event, mouse, time, Subscription};
use std::time::Duration;

/// Tick interval while a long-press is being armed.
const LONG_PRESS_TICK: Duration = Duration::from_millis(25);

/// Poll interval for host appearance changes.
const APPEARANCE_POLL: Duration = Duration::from_secs(2);

/// Creates the combined subscription for the current application state.
pub fn create(screen: Screen, awaiting_long_press: bool) -> Subscription<Message> {
    let mut subscriptions = vec![appearance_subscription()];

    if screen == Screen::Gallery {
        subscriptions.push(gallery_event_subscription());
        if awaiting_long_press {
            subscriptions.push(long_press_tick_subscription());
        }
    }

    Subscription::batch(subscriptions)
}

/// Forwards the mouse events gesture handling needs. Events are observed,
/// not consumed, so scrollable widgets still see them.
fn gallery_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match &event {
        event::Event::Mouse(
            mouse::Event::CursorMoved { .. }
            | mouse::Event::ButtonPressed(mouse::Button::Left)
            | mouse::Event::ButtonReleased(mouse::Button::Left),
        ) => Some(Message::Gallery(gallery::Message::RawEvent(event.clone()))),
        _ => None,
    })
}

fn long_press_tick_subscription() -> Subscription<Message> {
    time::every(LONG_PRESS_TICK).map(|instant| Message::Gallery(gallery::Message::Tick(instant)))
}

fn appearance_subscription() -> Subscription<Message> {
    time::every(APPEARANCE_POLL).map(|_| Message::HostAppearanceTick)
}
