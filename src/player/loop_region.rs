// SPDX-License-Identifier: MPL-2.0
//! A/B loop-region engine.
//!
//! The engine is an explicit state machine:
//!
//! ```text
//! Idle --toggle--> AwaitingStart --toggle--> AwaitingEnd --toggle--> Active
//!                        |                        |  (position > start)   |
//!                        +--cancel--> Idle <--cancel+      toggle/clear --+
//! ```
//!
//! The tagged variants make the invalid flag combinations of an ad-hoc
//! `is_setting`/`start_set`/`enabled` encoding unrepresentable. While
//! `Active`, the invariant `0 <= start < end <= duration` holds.

/// An enabled loop region. `start_secs < end_secs` by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopRegion {
    pub start_secs: f64,
    pub end_secs: f64,
}

/// Loop engine states.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LoopState {
    /// No region, not arming.
    #[default]
    Idle,

    /// Region definition armed; next toggle captures the start point.
    AwaitingStart,

    /// Start point captured; next toggle captures the end point.
    AwaitingEnd { start_secs: f64 },

    /// Region enabled; playback is clamped back to `start` at `end`.
    Active(LoopRegion),
}

/// Outcome of a loop-engine operation, used to pick the feedback message.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopEvent {
    /// Arming started; next toggle records the start point.
    Armed,

    /// Start point recorded.
    StartCaptured(f64),

    /// Region recorded and enabled.
    Activated(LoopRegion),

    /// End candidate was not after the start; state unchanged.
    EndNotAfterStart,

    /// Active region cleared.
    Cleared,

    /// Arming abandoned.
    Cancelled,

    /// Cancel/quick-set requested with nothing to act on.
    NoOp,
}

/// A/B loop engine for one session.
#[derive(Debug, Clone, Default)]
pub struct LoopEngine {
    state: LoopState,
}

impl LoopEngine {
    /// Creates an idle engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Returns the enabled region, if any.
    #[must_use]
    pub fn region(&self) -> Option<LoopRegion> {
        match self.state {
            LoopState::Active(region) => Some(region),
            _ => None,
        }
    }

    /// Returns true while a region definition is in progress.
    #[must_use]
    pub fn is_arming(&self) -> bool {
        matches!(
            self.state,
            LoopState::AwaitingStart | LoopState::AwaitingEnd { .. }
        )
    }

    /// Returns true while a region is enabled.
    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, LoopState::Active(_))
    }

    /// Advances the arming state machine (the `L` shortcut).
    ///
    /// The end point is only accepted when it lies strictly after the start;
    /// otherwise the engine stays in `AwaitingEnd` and reports
    /// [`LoopEvent::EndNotAfterStart`]. Retries are unlimited.
    pub fn advance(&mut self, position_secs: f64) -> LoopEvent {
        match self.state {
            LoopState::Idle => {
                self.state = LoopState::AwaitingStart;
                LoopEvent::Armed
            }
            LoopState::AwaitingStart => {
                self.state = LoopState::AwaitingEnd {
                    start_secs: position_secs,
                };
                LoopEvent::StartCaptured(position_secs)
            }
            LoopState::AwaitingEnd { start_secs } => {
                if position_secs > start_secs {
                    let region = LoopRegion {
                        start_secs,
                        end_secs: position_secs,
                    };
                    self.state = LoopState::Active(region);
                    LoopEvent::Activated(region)
                } else {
                    LoopEvent::EndNotAfterStart
                }
            }
            LoopState::Active(_) => {
                self.state = LoopState::Idle;
                LoopEvent::Cleared
            }
        }
    }

    /// Abandons an in-progress region definition (Escape while arming).
    pub fn cancel(&mut self) -> LoopEvent {
        if self.is_arming() {
            self.state = LoopState::Idle;
            LoopEvent::Cancelled
        } else {
            LoopEvent::NoOp
        }
    }

    /// Clears an enabled region (the indicator's stop button).
    pub fn clear(&mut self) -> LoopEvent {
        if self.is_active() {
            self.state = LoopState::Idle;
            LoopEvent::Cleared
        } else {
            LoopEvent::NoOp
        }
    }

    /// Enables a region around the current position in one action,
    /// overriding whatever state the engine was in.
    ///
    /// With unknown duration there is no way to satisfy `start < end <=
    /// duration`, so the request is refused.
    pub fn quick_set(
        &mut self,
        position_secs: f64,
        duration_secs: f64,
        radius_secs: f64,
    ) -> LoopEvent {
        if duration_secs <= 0.0 {
            return LoopEvent::NoOp;
        }

        let start_secs = (position_secs - radius_secs).max(0.0);
        let end_secs = (position_secs + radius_secs).min(duration_secs);
        if end_secs <= start_secs {
            return LoopEvent::NoOp;
        }

        let region = LoopRegion {
            start_secs,
            end_secs,
        };
        self.state = LoopState::Active(region);
        LoopEvent::Activated(region)
    }

    /// Continuous enforcement check, called on every position update.
    ///
    /// Returns the position to jump back to when the region end has been
    /// reached.
    #[must_use]
    pub fn check(&self, position_secs: f64) -> Option<f64> {
        match self.state {
            LoopState::Active(region) if position_secs >= region.end_secs => {
                Some(region.start_secs)
            }
            _ => None,
        }
    }

    /// Resets the engine to idle (session close).
    pub fn reset(&mut self) {
        self.state = LoopState::Idle;
    }
}
