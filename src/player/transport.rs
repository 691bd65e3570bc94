// SPDX-License-Identifier: MPL-2.0
//! Transport state mirrored from the underlying playback clock.
//!
//! The transport wraps play/pause/seek/volume/mute/rate operations and is
//! the single owner of the position/duration pair. Positions are clamped to
//! `[0, duration]` at every mutation, so the session invariant cannot be
//! violated from the outside.

use super::clock::PlaybackClock;
use super::rate::PlaybackRate;
use super::volume::Volume;
use std::time::Instant;

/// Tolerance used to detect "paused at the end" when resuming playback.
const END_TOLERANCE_SECS: f64 = 0.1;

/// Whether playback is advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    Playing,
    #[default]
    Paused,
}

/// Transport state for one media session.
#[derive(Debug, Clone)]
pub struct Transport {
    play_state: PlayState,

    /// Last sampled position in seconds. Always within `[0, duration]`.
    position_secs: f64,

    /// Media duration in seconds; 0 until metadata loads.
    duration_secs: f64,

    rate: PlaybackRate,
    volume: Volume,
    muted: bool,

    clock: PlaybackClock,
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport {
    /// Creates a paused transport at position zero with unknown duration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            play_state: PlayState::Paused,
            position_secs: 0.0,
            duration_secs: 0.0,
            rate: PlaybackRate::default(),
            volume: Volume::default(),
            muted: false,
            clock: PlaybackClock::new(),
        }
    }

    /// Returns true while playback is advancing.
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.play_state == PlayState::Playing
    }

    /// Returns the last sampled position in seconds.
    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    /// Returns the media duration in seconds (0 until metadata loads).
    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Returns the current playback rate.
    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    /// Returns the current volume.
    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    /// Returns whether audio is muted.
    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Returns true when the position has reached the end of known media.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.duration_secs > 0.0 && self.position_secs >= self.duration_secs - END_TOLERANCE_SECS
    }

    /// Records the duration reported by loaded metadata.
    ///
    /// The position is re-clamped in case metadata arrived after a seek.
    pub fn set_duration(&mut self, duration_secs: f64, now: Instant) {
        self.duration_secs = duration_secs.max(0.0);
        let clamped = self.clamp_position(self.position_secs);
        if (clamped - self.position_secs).abs() > f64::EPSILON {
            self.seek_to(clamped, now);
        }
    }

    /// Starts or resumes playback.
    ///
    /// Resuming from the end restarts from the beginning, matching the
    /// behavior of a media element replay.
    pub fn play(&mut self, now: Instant) {
        if self.at_end() {
            self.seek_to(0.0, now);
        }
        self.clock.start(now);
        self.play_state = PlayState::Playing;
    }

    /// Pauses playback at the current position.
    pub fn pause(&mut self, now: Instant) {
        self.position_secs = self.clamp_position(self.clock.position(now));
        self.clock.pause(now);
        self.play_state = PlayState::Paused;
    }

    /// Toggles play/pause; returns true when playing afterwards.
    pub fn toggle(&mut self, now: Instant) -> bool {
        if self.is_playing() {
            self.pause(now);
        } else {
            self.play(now);
        }
        self.is_playing()
    }

    /// Seeks to an absolute position, clamped to `[0, duration]`.
    pub fn seek_to(&mut self, target_secs: f64, now: Instant) {
        let clamped = self.clamp_position(target_secs);
        self.clock.seek(clamped, now);
        self.position_secs = clamped;
    }

    /// Seeks relative to the current position; returns the new position.
    pub fn seek_relative(&mut self, delta_secs: f64, now: Instant) -> f64 {
        self.seek_to(self.position_secs + delta_secs, now);
        self.position_secs
    }

    /// Changes the playback rate, keeping the position continuous.
    pub fn set_rate(&mut self, rate: PlaybackRate, now: Instant) {
        self.rate = rate;
        self.clock.set_rate(rate.value(), now);
    }

    /// Sets the volume directly (slider path).
    pub fn set_volume(&mut self, volume: Volume) {
        self.volume = volume;
    }

    /// Adjusts the volume by a delta (shortcut path); returns the new volume.
    /// The mute flag is orthogonal and left untouched.
    pub fn adjust_volume(&mut self, delta: f32) -> Volume {
        self.volume = self.volume.adjusted(delta);
        self.volume
    }

    /// Toggles the mute flag; returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Samples the playback clock, updating and returning the position.
    ///
    /// Called from the tick subscription; this is the position-update event
    /// that drives loop enforcement.
    pub fn tick(&mut self, now: Instant) -> f64 {
        if self.is_playing() {
            self.position_secs = self.clamp_position(self.clock.position(now));
        }
        self.position_secs
    }

    fn clamp_position(&self, position: f64) -> f64 {
        if self.duration_secs > 0.0 {
            position.clamp(0.0, self.duration_secs)
        } else {
            position.max(0.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use std::time::Duration;

    fn ready_transport(now: Instant) -> Transport {
        let mut transport = Transport::new();
        transport.set_duration(120.0, now);
        transport
    }

    #[test]
    fn new_transport_is_paused_at_zero() {
        let transport = Transport::new();
        assert!(!transport.is_playing());
        assert_abs_diff_eq!(transport.position_secs(), 0.0);
        assert_abs_diff_eq!(transport.duration_secs(), 0.0);
        assert!(!transport.is_muted());
    }

    #[test]
    fn seek_clamps_to_media_duration() {
        let now = Instant::now();
        let mut transport = ready_transport(now);

        transport.seek_to(200.0, now);
        assert_abs_diff_eq!(transport.position_secs(), 120.0);

        transport.seek_to(-10.0, now);
        assert_abs_diff_eq!(transport.position_secs(), 0.0);

        transport.seek_to(75.5, now);
        assert_abs_diff_eq!(transport.position_secs(), 75.5);
    }

    #[test]
    fn seek_relative_clamps_both_ends() {
        let now = Instant::now();
        let mut transport = ready_transport(now);

        transport.seek_to(5.0, now);
        assert_abs_diff_eq!(transport.seek_relative(-10.0, now), 0.0);

        transport.seek_to(115.0, now);
        assert_abs_diff_eq!(transport.seek_relative(10.0, now), 120.0);

        transport.seek_to(60.0, now);
        assert_abs_diff_eq!(transport.seek_relative(10.0, now), 70.0);
    }

    #[test]
    fn tick_advances_while_playing() {
        let t0 = Instant::now();
        let mut transport = ready_transport(t0);

        transport.play(t0);
        let t1 = t0 + Duration::from_secs(30);
        assert_abs_diff_eq!(transport.tick(t1), 30.0, epsilon = 1e-9);
    }

    #[test]
    fn tick_holds_position_while_paused() {
        let t0 = Instant::now();
        let mut transport = ready_transport(t0);

        transport.play(t0);
        let t1 = t0 + Duration::from_secs(10);
        transport.tick(t1);
        transport.pause(t1);

        let t2 = t1 + Duration::from_secs(60);
        assert_abs_diff_eq!(transport.tick(t2), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn tick_clamps_at_duration() {
        let t0 = Instant::now();
        let mut transport = ready_transport(t0);

        transport.play(t0);
        let t1 = t0 + Duration::from_secs(500);
        assert_abs_diff_eq!(transport.tick(t1), 120.0);
        assert!(transport.at_end());
    }

    #[test]
    fn play_from_end_restarts_at_beginning() {
        let t0 = Instant::now();
        let mut transport = ready_transport(t0);

        transport.seek_to(120.0, t0);
        assert!(transport.at_end());

        transport.play(t0);
        assert!(transport.is_playing());
        assert_abs_diff_eq!(transport.position_secs(), 0.0);
    }

    #[test]
    fn rate_scales_tick_progress() {
        let t0 = Instant::now();
        let mut transport = ready_transport(t0);

        transport.set_rate(PlaybackRate::X2_00, t0);
        transport.play(t0);
        let t1 = t0 + Duration::from_secs(10);
        assert_abs_diff_eq!(transport.tick(t1), 20.0, epsilon = 1e-9);
    }

    #[test]
    fn adjust_volume_clamps_and_ignores_mute() {
        let mut transport = Transport::new();
        transport.set_volume(Volume::new(0.95));
        transport.toggle_mute();
        assert!(transport.is_muted());

        let vol = transport.adjust_volume(0.1);
        assert_abs_diff_eq!(vol.value(), 1.0);
        // Mute flag untouched by volume adjustment
        assert!(transport.is_muted());

        transport.set_volume(Volume::new(0.05));
        let vol = transport.adjust_volume(-0.1);
        assert_abs_diff_eq!(vol.value(), 0.0);
    }

    #[test]
    fn toggle_mute_flips_state() {
        let mut transport = Transport::new();
        assert!(transport.toggle_mute());
        assert!(!transport.toggle_mute());
    }

    #[test]
    fn late_metadata_reclamps_position() {
        let now = Instant::now();
        let mut transport = Transport::new();

        // A seek before metadata cannot exceed zero-duration media;
        // position stays non-negative and unbounded seeks are permitted.
        transport.seek_to(50.0, now);
        assert_abs_diff_eq!(transport.position_secs(), 50.0);

        // Metadata arrives with a shorter duration
        transport.set_duration(30.0, now);
        assert_abs_diff_eq!(transport.position_secs(), 30.0);
    }

    #[test]
    fn toggle_reports_resulting_state() {
        let now = Instant::now();
        let mut transport = ready_transport(now);

        assert!(transport.toggle(now));
        assert!(!transport.toggle(now));
    }
}
