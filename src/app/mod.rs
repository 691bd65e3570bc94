// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration around the playback session.
//!
//! The `App` struct wires together the session controller, localization,
//! the bookmark store, and persisted preferences, and it translates
//! session effects into side effects like storage flushes and window mode
//! changes. Policy decisions (window sizing, persistence format, probe
//! dispatch) stay close to the update loop so user-facing behavior is easy
//! to audit.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::I18n;
use crate::player::{session, PlaybackRate, Volume};
use crate::storage::FileBookmarkStore;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 680;
pub const MIN_WINDOW_WIDTH: u32 = 760;
pub const MIN_WINDOW_HEIGHT: u32 = 520;

/// The catalog record the player was launched with. Kept around so a
/// closed session can be reopened without restarting the binary.
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub title: String,
    pub video_url: String,
}

/// Root Iced application state bridging the session controller,
/// localization, and persistence.
pub struct App {
    pub i18n: I18n,
    pub(crate) store: FileBookmarkStore,
    pub(crate) request: LaunchRequest,
    pub(crate) session: Option<session::State>,
    /// Poster frame from the probe, for the player surface.
    pub(crate) poster: Option<image::Handle>,
    /// Mirror of the window fullscreen mode.
    pub(crate) fullscreen: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("title", &self.request.title)
            .field("session_open", &self.session.is_some())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the metadata probe for
    /// the requested source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            eprintln!("Config warning: {key}");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);

        let title = flags
            .title
            .clone()
            .or_else(|| {
                flags
                    .video_url
                    .as_deref()
                    .filter(|url| !url.trim().is_empty())
                    .map(derive_title)
            })
            .unwrap_or_else(|| i18n.tr("untitled-entry"));
        let request = LaunchRequest {
            title,
            video_url: flags.video_url.unwrap_or_default(),
        };

        let mut app = App {
            i18n,
            store: FileBookmarkStore::new(),
            request,
            session: None,
            poster: None,
            fullscreen: false,
        };

        let task = app.open_session(&config);
        (app, task)
    }

    /// Opens a session for the launch request, loading its persisted
    /// bookmarks and applying playback preferences. Returns the probe task
    /// when the source is playable.
    fn open_session(&mut self, config: &config::Config) -> Task<Message> {
        use crate::application::port::BookmarkStore;

        let source = session::Source::from_url(&self.request.video_url);

        let (bookmarks, warning) = self.store.load(&self.request.title);
        if let Some(key) = warning {
            eprintln!("Bookmark store warning: {}", self.i18n.tr(&key));
        }

        let mut session = session::State::open(self.request.title.clone(), source, bookmarks);

        let volume = Volume::new(config.playback.volume.unwrap_or(config::DEFAULT_VOLUME));
        let muted = config.playback.muted.unwrap_or(false);
        let rate = config
            .playback
            .rate
            .map(PlaybackRate::from_value)
            .unwrap_or_default();
        session.apply_preferences(volume, muted, rate, Instant::now());

        let task = match session.source() {
            session::Source::Url(url) => update::probe_task(url.clone()),
            session::Source::Missing => Task::none(),
        };

        self.session = Some(session);
        self.poster = None;
        task
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.session {
            Some(session) => format!("{} - {app_name}", session.title()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }

    /// Reopens a session for the stored launch request.
    pub(crate) fn reopen(&mut self) -> Task<Message> {
        let (config, _) = config::load();
        self.open_session(&config)
    }
}

/// Derives a display title from a media URL (final path segment without
/// its extension). Used when the catalog did not provide a title.
fn derive_title(url: &str) -> String {
    let segment = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(url);
    let stem = segment.split('.').next().unwrap_or(segment);
    if stem.is_empty() {
        url.to_string()
    } else {
        stem.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_title_strips_path_and_extension() {
        assert_eq!(
            derive_title("https://cdn.example.com/media/big_buck_bunny.mp4"),
            "big_buck_bunny"
        );
        assert_eq!(derive_title("/home/user/clip.webm"), "clip");
    }

    #[test]
    fn derive_title_survives_odd_urls() {
        assert_eq!(derive_title("trailer"), "trailer");
        assert_eq!(derive_title("https://example.com/"), "example");
    }
}
