// SPDX-License-Identifier: MPL-2.0
//! Update loop: routes messages into the session controller and turns
//! session effects into shell side effects (storage flushes, preference
//! persistence, window mode changes, probe dispatch).

use super::{App, Message};
use crate::application::port::BookmarkStore;
use crate::config;
use crate::error::MediaError;
use crate::media::probe;
use crate::player::{session, shortcuts};
use iced::widget::image;
use iced::{window, Task};
use std::time::Instant;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Session(msg) => {
            let effect = match &mut app.session {
                Some(session) => session.handle(msg, &app.i18n, Instant::now()),
                None => session::Effect::None,
            };
            apply_effect(app, effect)
        }
        Message::KeyPressed {
            key,
            modifiers,
            captured,
        } => {
            let effect = match &mut app.session {
                Some(session) => {
                    let ctx = shortcuts::Context {
                        editor_open: session.is_editor_open(),
                        text_entry_focused: captured,
                    };
                    match shortcuts::dispatch(&key, modifiers, ctx) {
                        Some(shortcut) => {
                            session.apply_shortcut(shortcut, &app.i18n, Instant::now())
                        }
                        None => session::Effect::None,
                    }
                }
                None => session::Effect::None,
            };
            apply_effect(app, effect)
        }
        Message::Tick(now) => {
            let effect = match &mut app.session {
                Some(session) => session.handle(session::Message::Tick, &app.i18n, now),
                None => session::Effect::None,
            };
            apply_effect(app, effect)
        }
        Message::MediaProbed(result) => {
            let message = match result {
                Ok(intake) => {
                    app.poster = intake.poster.as_ref().map(|poster| {
                        image::Handle::from_rgba(poster.width, poster.height, poster.rgba.clone())
                    });
                    session::Message::MetadataLoaded {
                        duration_secs: intake.duration_secs,
                    }
                }
                Err(error) => session::Message::MediaFailed(error),
            };
            update(app, Message::Session(message))
        }
        Message::Reopen => app.reopen(),
        Message::WindowCloseRequested => {
            flush_bookmarks(app);
            window::latest().and_then(window::close)
        }
    }
}

/// Builds the one-shot metadata probe task for a source.
///
/// The probe is blocking (FFmpeg), so it runs on the blocking pool; the
/// result lands back in the update loop as a message.
pub fn probe_task(url: String) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || probe::load(&url))
                .await
                .unwrap_or_else(|_| Err(MediaError::Aborted))
        },
        Message::MediaProbed,
    )
}

fn apply_effect(app: &mut App, effect: session::Effect) -> Task<Message> {
    match effect {
        session::Effect::None => Task::none(),
        session::Effect::PersistBookmarks => {
            flush_bookmarks(app);
            Task::none()
        }
        session::Effect::PersistPreferences => persist_preferences(app),
        session::Effect::RetryProbe => {
            app.poster = None;
            match app.session.as_ref().and_then(|s| s.source().url()) {
                Some(url) => probe_task(url.to_string()),
                None => Task::none(),
            }
        }
        session::Effect::SetFullscreen(fullscreen) => set_window_mode(app, fullscreen),
        session::Effect::Close => {
            // Flush before reset: no bookmark loss on close.
            flush_bookmarks(app);
            app.session = None;
            app.poster = None;
            if app.fullscreen {
                set_window_mode(app, false)
            } else {
                Task::none()
            }
        }
    }
}

/// Writes the session's bookmark list through the store port.
fn flush_bookmarks(app: &mut App) {
    let Some(session) = &app.session else {
        return;
    };
    let title = session.title().to_string();
    let entries = session.bookmarks().entries().to_vec();
    if let Some(key) = app.store.save(&title, &entries) {
        eprintln!("Bookmark store warning: {key}");
    }
}

/// Persists the session's playback preferences to `settings.toml`.
///
/// Guarded during tests to keep isolation: unit tests exercise the logic
/// by calling the session handlers directly rather than through effects.
fn persist_preferences(app: &App) -> Task<Message> {
    if cfg!(test) {
        return Task::none();
    }

    let Some(session) = &app.session else {
        return Task::none();
    };

    let (mut cfg, _) = config::load();
    let transport = session.transport();
    cfg.playback.volume = Some(transport.volume().value());
    cfg.playback.muted = Some(transport.is_muted());
    cfg.playback.rate = Some(transport.rate().value());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {error:?}");
    }

    Task::none()
}

/// Applies the requested window mode and mirrors it in the app state.
fn set_window_mode(app: &mut App, fullscreen: bool) -> Task<Message> {
    app.fullscreen = fullscreen;
    let mode = if fullscreen {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::latest().and_then(move |id| window::set_mode(id, mode))
}
