// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Volume**: Audio playback volume settings
//! - **Seek**: Keyboard seek step
//! - **Loop**: Quick-set loop radius
//! - **Feedback**: Shortcut feedback lifetime
//! - **Tick**: Playback clock sampling cadence

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;

/// Volume adjustment step per key press (10%).
pub const VOLUME_STEP: f32 = 0.1;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Seek step applied by the arrow-key shortcuts, in seconds.
pub const KEYBOARD_SEEK_STEP_SECS: f64 = 10.0;

// ==========================================================================
// Loop Defaults
// ==========================================================================

/// Radius of the quick-set loop region around the current position, in seconds.
/// Quick-set produces a region of up to twice this length.
pub const QUICK_LOOP_RADIUS_SECS: f64 = 15.0;

// ==========================================================================
// Feedback Defaults
// ==========================================================================

/// How long a shortcut feedback message stays visible, in milliseconds.
pub const FEEDBACK_TTL_MS: u64 = 2000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Cadence of the playback tick subscription, in milliseconds.
/// Loop enforcement latency is bounded by this value.
pub const PLAYBACK_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Volume validation
    assert!(MIN_VOLUME >= 0.0);
    assert!(MAX_VOLUME > MIN_VOLUME);
    assert!(DEFAULT_VOLUME >= MIN_VOLUME);
    assert!(DEFAULT_VOLUME <= MAX_VOLUME);
    assert!(VOLUME_STEP > 0.0);

    // Seek validation
    assert!(KEYBOARD_SEEK_STEP_SECS > 0.0);

    // Loop validation
    assert!(QUICK_LOOP_RADIUS_SECS > 0.0);

    // Feedback must outlive at least a few ticks so it is visible
    assert!(FEEDBACK_TTL_MS > PLAYBACK_TICK_MS);
    assert!(PLAYBACK_TICK_MS > 0);
};
