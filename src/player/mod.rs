// SPDX-License-Identifier: MPL-2.0
//! Playback session controller and its domain types.
//!
//! The controller is UI-framework-light by design: everything in this
//! module tree is driven through [`session::State::handle`] and testable
//! without a window. The iced shell in `crate::app` forwards events in and
//! renders the state out.

pub mod bookmark;
pub mod clock;
pub mod feedback;
pub mod loop_region;
pub mod rate;
pub mod session;
pub mod shortcuts;
pub mod timecode;
pub mod transport;
pub mod volume;

pub use bookmark::{Bookmark, BookmarkId, BookmarkList, EditBuffer};
pub use clock::PlaybackClock;
pub use feedback::Feedback;
pub use loop_region::{LoopEngine, LoopEvent, LoopRegion, LoopState};
pub use rate::PlaybackRate;
pub use session::{Effect, MediaPhase, Message, Source, State};
pub use shortcuts::{dispatch, Context, Shortcut};
pub use timecode::format_timecode;
pub use transport::Transport;
pub use volume::Volume;
