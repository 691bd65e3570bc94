// SPDX-License-Identifier: MPL-2.0
//! Ephemeral shortcut feedback.
//!
//! A single-slot channel: each new message preempts whatever is still
//! visible, and the slot auto-expires after a fixed delay. Expiry is
//! checked against the timestamp of the *current* message on every tick,
//! so a preempted message can never clear its successor.

use crate::config::FEEDBACK_TTL_MS;
use std::time::{Duration, Instant};

/// Single-slot auto-expiring feedback channel.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    current: Option<(String, Instant)>,
}

impl Feedback {
    /// Creates an empty channel.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows a message, preempting any message still visible.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.current = Some((text.into(), now));
    }

    /// Returns the visible message, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&str> {
        self.current.as_ref().map(|(text, _)| text.as_str())
    }

    /// Expires the message once its lifetime has elapsed.
    ///
    /// Called on every playback tick.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.current {
            if now.saturating_duration_since(*shown_at) >= Self::ttl() {
                self.current = None;
            }
        }
    }

    /// Clears the slot immediately (session close).
    pub fn clear(&mut self) {
        self.current = None;
    }

    fn ttl() -> Duration {
        Duration::from_millis(FEEDBACK_TTL_MS)
    }
}
