// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The keyboard listener and the playback tick are scoped to an open
//! session: when the session closes, `subscription()` stops returning
//! them and the runtime unsubscribes, so no document-wide key handling
//! outlives the player.

use super::{App, Message};
use crate::config::PLAYBACK_TICK_MS;
use iced::{event, keyboard, time, Subscription};
use std::time::Duration;

/// Creates the event subscription for the current application state.
pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![event::listen_with(window_events)];

    if app.session.is_some() {
        subscriptions.push(event::listen_with(keyboard_events));
        subscriptions.push(time::every(Duration::from_millis(PLAYBACK_TICK_MS)).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

/// Window lifecycle events are handled on every screen so bookmarks are
/// flushed before the process exits.
fn window_events(
    event: event::Event,
    _status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(iced::window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested)
        }
        _ => None,
    }
}

/// Key presses are forwarded with their captured status; the dispatcher
/// decides what a focused text input is allowed to swallow.
fn keyboard_events(
    event: event::Event,
    status: event::Status,
    _window: iced::window::Id,
) -> Option<Message> {
    match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed {
                key,
                modifiers,
                captured: status == event::Status::Captured,
            })
        }
        _ => None,
    }
}
