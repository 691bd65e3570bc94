// SPDX-License-Identifier: MPL-2.0
//! Rate-aware playback clock.
//!
//! The clock is the stand-in for the host media element's position counter:
//! it advances in wall-clock time scaled by the playback rate while running,
//! and holds its position while paused. The controller samples it on every
//! UI tick, so loop enforcement latency is bounded by the tick cadence.

use std::time::Instant;

/// Monotonic playback position source.
///
/// All methods take the sampling instant explicitly, which keeps the clock
/// deterministic under test (no hidden `Instant::now()` calls).
#[derive(Debug, Clone)]
pub struct PlaybackClock {
    /// Position at the last anchor point, in seconds.
    anchor_secs: f64,

    /// Wall-clock instant of the anchor point; `None` while paused.
    started_at: Option<Instant>,

    /// Rate multiplier applied to elapsed wall-clock time.
    rate: f64,
}

impl PlaybackClock {
    /// Creates a paused clock at position zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            anchor_secs: 0.0,
            started_at: None,
            rate: 1.0,
        }
    }

    /// Starts (or restarts) the clock from its current position.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    /// Pauses the clock, freezing the current position.
    pub fn pause(&mut self, now: Instant) {
        self.anchor_secs = self.position(now);
        self.started_at = None;
    }

    /// Moves the clock to a new position, preserving the running state.
    pub fn seek(&mut self, target_secs: f64, now: Instant) {
        let was_running = self.started_at.is_some();
        self.anchor_secs = target_secs.max(0.0);
        self.started_at = if was_running { Some(now) } else { None };
    }

    /// Changes the rate multiplier, re-anchoring so the position is continuous.
    pub fn set_rate(&mut self, rate: f64, now: Instant) {
        self.anchor_secs = self.position(now);
        if self.started_at.is_some() {
            self.started_at = Some(now);
        }
        self.rate = rate;
    }

    /// Returns the position at the given sampling instant.
    #[must_use]
    pub fn position(&self, now: Instant) -> f64 {
        match self.started_at {
            Some(started) => {
                let elapsed = now.saturating_duration_since(started).as_secs_f64();
                self.anchor_secs + elapsed * self.rate
            }
            None => self.anchor_secs,
        }
    }

    /// Returns true while the clock is advancing.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new()
    }
}
