// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::MediaError;
use crate::media::MediaIntake;
use crate::player::session;
use iced::keyboard;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// session messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// A message for the open playback session.
    Session(session::Message),
    /// A key went down somewhere in the window.
    ///
    /// `captured` is true when a focused widget (a text input) consumed
    /// the event; the shortcut dispatcher uses it to suppress the table
    /// while typing.
    KeyPressed {
        key: keyboard::Key,
        modifiers: keyboard::Modifiers,
        captured: bool,
    },
    /// Playback clock tick.
    Tick(Instant),
    /// Result of the media metadata probe.
    MediaProbed(Result<MediaIntake, MediaError>),
    /// Reopen the last closed session.
    Reopen,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Title of the catalog entry; doubles as the bookmark persistence key.
    pub title: Option<String>,
    /// Direct media resource locator. Empty or absent means "no playable
    /// source" and renders the dedicated empty state.
    pub video_url: Option<String>,
    /// Optional data directory override (for bookmark records).
    /// Takes precedence over `STREAMLENS_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `STREAMLENS_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
