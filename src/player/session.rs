// SPDX-License-Identifier: MPL-2.0
//! Playback session controller.
//!
//! One `State` per open player. It owns the transport, the loop engine,
//! the bookmark cache, the editor buffer, and the feedback channel, and it
//! translates messages into state transitions plus side effects for the
//! application shell (persistence flushes, fullscreen changes, probe
//! retries, close). All transitions are synchronous; the only asynchronous
//! collaborator is the metadata probe, whose result arrives as a message.

use super::bookmark::{Bookmark, BookmarkId, BookmarkList, EditBuffer};
use super::feedback::Feedback;
use super::loop_region::{LoopEngine, LoopEvent};
use super::rate::PlaybackRate;
use super::shortcuts::Shortcut;
use super::timecode::format_timecode;
use super::transport::Transport;
use super::volume::Volume;
use crate::config::{KEYBOARD_SEEK_STEP_SECS, QUICK_LOOP_RADIUS_SECS, VOLUME_STEP};
use crate::error::MediaError;
use crate::i18n::I18n;
use std::time::Instant;

/// Media source supplied by the catalog collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// No playable source; the session renders the dedicated empty state.
    Missing,
    /// A direct media resource locator.
    Url(String),
}

impl Source {
    /// Builds a source from the collaborator's URL string.
    ///
    /// An empty (or whitespace-only) string is a valid input meaning
    /// "no playable source".
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            Source::Missing
        } else {
            Source::Url(trimmed.to_string())
        }
    }

    /// Returns the URL when one is present.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Source::Missing => None,
            Source::Url(url) => Some(url),
        }
    }
}

/// Where the session stands with its media.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaPhase {
    /// No source was provided; a display state, not a failure.
    Missing,
    /// Waiting for metadata.
    Loading,
    /// Metadata loaded; playback available.
    Ready,
    /// Media failed; recoverable via retry or close.
    Failed(MediaError),
}

/// Messages consumed by [`State::handle`].
#[derive(Debug, Clone)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════
    // TRANSPORT
    // ═══════════════════════════════════════════════════════════════════
    /// Toggle play/pause.
    TogglePlayback,
    /// Preview seek position (during slider drag).
    SeekPreview(f64),
    /// Commit seek to preview position.
    SeekCommit,
    /// Seek relative to current position.
    SeekRelative(f64),
    /// Set volume from the slider.
    SetVolume(f32),
    /// Adjust volume by a delta (shortcut path).
    AdjustVolume(f32),
    /// Toggle mute.
    ToggleMute,
    /// Select a playback rate preset.
    SetRate(PlaybackRate),
    /// Toggle fullscreen.
    ToggleFullscreen,

    // ═══════════════════════════════════════════════════════════════════
    // LOOP
    // ═══════════════════════════════════════════════════════════════════
    /// Advance the loop arming state machine.
    AdvanceLoop,
    /// Abandon an in-progress loop definition.
    CancelLoop,
    /// Enable a loop around the current position in one action.
    QuickSetLoop,
    /// Clear the enabled loop region.
    ClearLoop,

    // ═══════════════════════════════════════════════════════════════════
    // BOOKMARKS
    // ═══════════════════════════════════════════════════════════════════
    /// Add a bookmark at the current position with an auto-generated title.
    QuickAddBookmark,
    /// Open the editor dialog; `None` adds, `Some` edits.
    OpenEditor(Option<BookmarkId>),
    /// Editor title field changed.
    EditorTitleChanged(String),
    /// Editor note field changed.
    EditorNoteChanged(String),
    /// Confirm the editor (save).
    ConfirmEditor,
    /// Dismiss the editor without saving.
    CancelEditor,
    /// Delete a bookmark (no confirmation step).
    DeleteBookmark(BookmarkId),
    /// Seek to a bookmark's timestamp.
    JumpToBookmark(BookmarkId),

    // ═══════════════════════════════════════════════════════════════════
    // PANELS
    // ═══════════════════════════════════════════════════════════════════
    /// Toggle the bookmarks sidebar.
    ToggleSidebar,
    /// Toggle the keyboard-shortcuts panel.
    ToggleShortcutsPanel,
    /// Toggle the rate picker panel.
    ToggleRatePanel,

    // ═══════════════════════════════════════════════════════════════════
    // MEDIA / LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════
    /// Metadata arrived from the probe.
    MetadataLoaded { duration_secs: f64 },
    /// The probe failed.
    MediaFailed(MediaError),
    /// Reload the same source after a failure.
    RetryMedia,
    /// Escape pressed; targets the innermost open sub-state.
    EscapePressed,
    /// Close button pressed.
    CloseRequested,
    /// Playback clock tick.
    Tick,
}

/// Side effects requested from the application shell.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// The bookmark list changed; flush it to the store.
    PersistBookmarks,
    /// A playback preference changed; persist settings.
    PersistPreferences,
    /// Re-run the metadata probe for the current source.
    RetryProbe,
    /// Apply the given window fullscreen state.
    SetFullscreen(bool),
    /// Tear the session down.
    Close,
}

/// Playback session state.
#[derive(Debug)]
pub struct State {
    title: String,
    source: Source,
    phase: MediaPhase,

    transport: Transport,
    loop_engine: LoopEngine,
    bookmarks: BookmarkList,
    editor: Option<EditBuffer>,
    feedback: Feedback,

    /// Preview position while the timeline slider is being dragged.
    seek_preview: Option<f64>,

    sidebar_open: bool,
    shortcuts_open: bool,
    rate_panel_open: bool,
    fullscreen: bool,
}

impl State {
    /// Opens a session for a title.
    ///
    /// `bookmarks` is the persisted list for this title, loaded once here;
    /// the in-memory copy is the cache of record from now on.
    #[must_use]
    pub fn open(title: String, source: Source, bookmarks: Vec<Bookmark>) -> Self {
        let phase = match source {
            Source::Missing => MediaPhase::Missing,
            Source::Url(_) => MediaPhase::Loading,
        };

        Self {
            title,
            source,
            phase,
            transport: Transport::new(),
            loop_engine: LoopEngine::new(),
            bookmarks: BookmarkList::from_entries(bookmarks),
            editor: None,
            feedback: Feedback::new(),
            seek_preview: None,
            sidebar_open: false,
            shortcuts_open: false,
            rate_panel_open: false,
            fullscreen: false,
        }
    }

    /// Applies persisted playback preferences to the fresh transport.
    pub fn apply_preferences(&mut self, volume: Volume, muted: bool, rate: PlaybackRate, now: Instant) {
        self.transport.set_volume(volume);
        if muted != self.transport.is_muted() {
            self.transport.toggle_mute();
        }
        self.transport.set_rate(rate, now);
    }

    // ═══════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn source(&self) -> &Source {
        &self.source
    }

    #[must_use]
    pub fn phase(&self) -> &MediaPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == MediaPhase::Ready
    }

    #[must_use]
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    #[must_use]
    pub fn loop_engine(&self) -> &LoopEngine {
        &self.loop_engine
    }

    #[must_use]
    pub fn bookmarks(&self) -> &BookmarkList {
        &self.bookmarks
    }

    #[must_use]
    pub fn editor(&self) -> Option<&EditBuffer> {
        self.editor.as_ref()
    }

    #[must_use]
    pub fn is_editor_open(&self) -> bool {
        self.editor.is_some()
    }

    #[must_use]
    pub fn feedback_text(&self) -> Option<&str> {
        self.feedback.visible()
    }

    #[must_use]
    pub fn seek_preview(&self) -> Option<f64> {
        self.seek_preview
    }

    /// Position shown on the timeline: the drag preview when present,
    /// otherwise the transport position.
    #[must_use]
    pub fn display_position(&self) -> f64 {
        self.seek_preview.unwrap_or(self.transport.position_secs())
    }

    #[must_use]
    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    #[must_use]
    pub fn is_shortcuts_open(&self) -> bool {
        self.shortcuts_open
    }

    #[must_use]
    pub fn is_rate_panel_open(&self) -> bool {
        self.rate_panel_open
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    // ═══════════════════════════════════════════════════════════════════
    // SHORTCUT ENTRY POINT
    // ═══════════════════════════════════════════════════════════════════

    /// Applies a dispatched shortcut by routing it onto the message it
    /// stands for.
    pub fn apply_shortcut(&mut self, shortcut: Shortcut, i18n: &I18n, now: Instant) -> Effect {
        let message = match shortcut {
            Shortcut::QuickBookmark => Message::QuickAddBookmark,
            Shortcut::AdvanceLoop => Message::AdvanceLoop,
            Shortcut::TogglePlayback => Message::TogglePlayback,
            Shortcut::SeekBackward => Message::SeekRelative(-KEYBOARD_SEEK_STEP_SECS),
            Shortcut::SeekForward => Message::SeekRelative(KEYBOARD_SEEK_STEP_SECS),
            Shortcut::VolumeUp => Message::AdjustVolume(VOLUME_STEP),
            Shortcut::VolumeDown => Message::AdjustVolume(-VOLUME_STEP),
            Shortcut::SetRate(rate) => Message::SetRate(rate),
            Shortcut::ToggleFullscreen => Message::ToggleFullscreen,
            Shortcut::ToggleMute => Message::ToggleMute,
            Shortcut::Escape => Message::EscapePressed,
            Shortcut::ConfirmEditor => Message::ConfirmEditor,
        };
        self.handle(message, i18n, now)
    }

    // ═══════════════════════════════════════════════════════════════════
    // UPDATE
    // ═══════════════════════════════════════════════════════════════════

    /// Handles a session message.
    #[allow(clippy::too_many_lines)]
    pub fn handle(&mut self, message: Message, i18n: &I18n, now: Instant) -> Effect {
        match message {
            // ═══════════════════════════════════════════════════════════
            // TRANSPORT
            // ═══════════════════════════════════════════════════════════
            Message::TogglePlayback => {
                if !self.is_ready() {
                    return Effect::None;
                }
                self.seek_preview = None;
                let playing = self.transport.toggle(now);
                let key = if playing {
                    "feedback-playing"
                } else {
                    "feedback-paused"
                };
                self.feedback.show(i18n.tr(key), now);
                Effect::None
            }
            Message::SeekPreview(position) => {
                if self.is_ready() {
                    self.seek_preview = Some(position);
                }
                Effect::None
            }
            Message::SeekCommit => {
                if let Some(target) = self.seek_preview.take() {
                    self.transport.seek_to(target, now);
                }
                Effect::None
            }
            Message::SeekRelative(delta_secs) => {
                if !self.is_ready() {
                    return Effect::None;
                }
                self.seek_preview = None;
                self.transport.seek_relative(delta_secs, now);
                let key = if delta_secs < 0.0 {
                    "feedback-seek-backward"
                } else {
                    "feedback-seek-forward"
                };
                let seconds = format!("{}", delta_secs.abs().round() as u64);
                self.feedback.show(i18n.tr_with(key, &[("seconds", seconds)]), now);
                Effect::None
            }
            Message::SetVolume(value) => {
                self.transport.set_volume(Volume::new(value));
                Effect::PersistPreferences
            }
            Message::AdjustVolume(delta) => {
                let volume = self.transport.adjust_volume(delta);
                let percent = format!("{}", volume.percent());
                self.feedback
                    .show(i18n.tr_with("feedback-volume", &[("percent", percent)]), now);
                Effect::PersistPreferences
            }
            Message::ToggleMute => {
                let muted = self.transport.toggle_mute();
                let key = if muted {
                    "feedback-muted"
                } else {
                    "feedback-unmuted"
                };
                self.feedback.show(i18n.tr(key), now);
                Effect::PersistPreferences
            }
            Message::SetRate(rate) => {
                self.transport.set_rate(rate, now);
                self.feedback.show(
                    i18n.tr_with("feedback-rate", &[("rate", rate.label().to_string())]),
                    now,
                );
                Effect::PersistPreferences
            }
            Message::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                let key = if self.fullscreen {
                    "feedback-fullscreen"
                } else {
                    "feedback-windowed"
                };
                self.feedback.show(i18n.tr(key), now);
                Effect::SetFullscreen(self.fullscreen)
            }

            // ═══════════════════════════════════════════════════════════
            // LOOP
            // ═══════════════════════════════════════════════════════════
            Message::AdvanceLoop => {
                if !self.is_ready() {
                    return Effect::None;
                }
                let event = self.loop_engine.advance(self.transport.position_secs());
                self.show_loop_feedback(event, i18n, now);
                Effect::None
            }
            Message::CancelLoop => {
                let event = self.loop_engine.cancel();
                self.show_loop_feedback(event, i18n, now);
                Effect::None
            }
            Message::QuickSetLoop => {
                if !self.is_ready() {
                    return Effect::None;
                }
                let event = self.loop_engine.quick_set(
                    self.transport.position_secs(),
                    self.transport.duration_secs(),
                    QUICK_LOOP_RADIUS_SECS,
                );
                match event {
                    LoopEvent::Activated(region) => {
                        self.feedback.show(
                            i18n.tr_with(
                                "feedback-loop-quick-set",
                                &[
                                    ("start", format_timecode(region.start_secs)),
                                    ("end", format_timecode(region.end_secs)),
                                ],
                            ),
                            now,
                        );
                    }
                    _ => {
                        self.feedback
                            .show(i18n.tr("feedback-loop-unavailable"), now);
                    }
                }
                Effect::None
            }
            Message::ClearLoop => {
                let event = self.loop_engine.clear();
                self.show_loop_feedback(event, i18n, now);
                Effect::None
            }

            // ═══════════════════════════════════════════════════════════
            // BOOKMARKS
            // ═══════════════════════════════════════════════════════════
            Message::QuickAddBookmark => {
                if !self.is_ready() {
                    return Effect::None;
                }
                let position = self.transport.position_secs();
                let title = i18n.tr_with(
                    "bookmark-quick-title",
                    &[("time", format_timecode(position))],
                );
                self.bookmarks.insert(Bookmark::new(position, title, None));
                self.feedback.show(i18n.tr("feedback-bookmark-added"), now);
                Effect::PersistBookmarks
            }
            Message::OpenEditor(target) => {
                if !self.is_ready() {
                    return Effect::None;
                }
                self.editor = match target {
                    Some(id) => self.bookmarks.get(id).map(EditBuffer::for_edit),
                    None => {
                        let default_title = i18n.tr_with(
                            "bookmark-default-title",
                            &[("time", format_timecode(self.transport.position_secs()))],
                        );
                        Some(EditBuffer::for_add(default_title))
                    }
                };
                Effect::None
            }
            Message::EditorTitleChanged(title) => {
                if let Some(editor) = &mut self.editor {
                    editor.title = title;
                }
                Effect::None
            }
            Message::EditorNoteChanged(note) => {
                if let Some(editor) = &mut self.editor {
                    editor.note = note;
                }
                Effect::None
            }
            Message::ConfirmEditor => {
                let Some(editor) = &self.editor else {
                    return Effect::None;
                };
                // Blank titles refuse the save silently; the dialog keeps
                // its confirm button disabled in that state.
                let Some(title) = editor.confirmable_title() else {
                    return Effect::None;
                };
                let note = editor.trimmed_note();
                match editor.editing {
                    Some(id) => {
                        self.bookmarks.update(id, title, note);
                    }
                    None => {
                        // New entries always take the current playback
                        // position; editing never changes a timestamp.
                        self.bookmarks
                            .insert(Bookmark::new(self.transport.position_secs(), title, note));
                    }
                }
                self.editor = None;
                self.feedback.show(i18n.tr("feedback-bookmark-saved"), now);
                Effect::PersistBookmarks
            }
            Message::CancelEditor => {
                self.editor = None;
                Effect::None
            }
            Message::DeleteBookmark(id) => {
                if self.bookmarks.remove(id).is_some() {
                    self.feedback.show(i18n.tr("feedback-bookmark-deleted"), now);
                    Effect::PersistBookmarks
                } else {
                    Effect::None
                }
            }
            Message::JumpToBookmark(id) => {
                // Seeks the transport only; the loop engine is untouched.
                if let Some(bookmark) = self.bookmarks.get(id) {
                    let target = bookmark.timestamp_secs;
                    self.seek_preview = None;
                    self.transport.seek_to(target, now);
                    self.feedback.show(
                        i18n.tr_with("feedback-jumped", &[("time", format_timecode(target))]),
                        now,
                    );
                }
                Effect::None
            }

            // ═══════════════════════════════════════════════════════════
            // PANELS
            // ═══════════════════════════════════════════════════════════
            Message::ToggleSidebar => {
                self.sidebar_open = !self.sidebar_open;
                Effect::None
            }
            Message::ToggleShortcutsPanel => {
                self.shortcuts_open = !self.shortcuts_open;
                Effect::None
            }
            Message::ToggleRatePanel => {
                self.rate_panel_open = !self.rate_panel_open;
                Effect::None
            }

            // ═══════════════════════════════════════════════════════════
            // MEDIA / LIFECYCLE
            // ═══════════════════════════════════════════════════════════
            Message::MetadataLoaded { duration_secs } => {
                if matches!(self.phase, MediaPhase::Missing) {
                    return Effect::None;
                }
                self.phase = MediaPhase::Ready;
                self.transport.set_duration(duration_secs, now);
                // Autoplay: a session with a playable source starts
                // immediately, feedback-free.
                self.transport.play(now);
                Effect::None
            }
            Message::MediaFailed(error) => {
                if matches!(self.phase, MediaPhase::Missing) {
                    return Effect::None;
                }
                self.transport.pause(now);
                self.phase = MediaPhase::Failed(error);
                Effect::None
            }
            Message::RetryMedia => match &self.phase {
                MediaPhase::Failed(_) => {
                    self.phase = MediaPhase::Loading;
                    Effect::RetryProbe
                }
                _ => Effect::None,
            },
            Message::EscapePressed => {
                // Single-level priority: bookmark editor, then loop
                // arming, then the session itself.
                if self.editor.is_some() {
                    self.editor = None;
                    self.feedback.show(i18n.tr("feedback-editor-cancelled"), now);
                    Effect::None
                } else if self.loop_engine.is_arming() {
                    let event = self.loop_engine.cancel();
                    self.show_loop_feedback(event, i18n, now);
                    Effect::None
                } else {
                    Effect::Close
                }
            }
            Message::CloseRequested => Effect::Close,
            Message::Tick => {
                let position = self.transport.tick(now);
                if let Some(target) = self.loop_engine.check(position) {
                    self.transport.seek_to(target, now);
                    self.feedback.show(
                        i18n.tr_with("feedback-looped", &[("time", format_timecode(target))]),
                        now,
                    );
                } else if self.transport.is_playing() && self.transport.at_end() {
                    self.transport.pause(now);
                }
                self.feedback.tick(now);
                Effect::None
            }
        }
    }

    fn show_loop_feedback(&mut self, event: LoopEvent, i18n: &I18n, now: Instant) {
        let text = match event {
            LoopEvent::Armed => i18n.tr("feedback-loop-armed"),
            LoopEvent::StartCaptured(start) => i18n.tr_with(
                "feedback-loop-start-set",
                &[("time", format_timecode(start))],
            ),
            LoopEvent::Activated(region) => i18n.tr_with(
                "feedback-loop-enabled",
                &[
                    ("start", format_timecode(region.start_secs)),
                    ("end", format_timecode(region.end_secs)),
                ],
            ),
            LoopEvent::EndNotAfterStart => i18n.tr("feedback-loop-end-before-start"),
            LoopEvent::Cleared => i18n.tr("feedback-loop-disabled"),
            LoopEvent::Cancelled => i18n.tr("feedback-loop-cancelled"),
            LoopEvent::NoOp => return,
        };
        self.feedback.show(text, now);
    }
}
