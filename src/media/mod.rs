// SPDX-License-Identifier: MPL-2.0
//! Media infrastructure: the one-shot metadata/poster probe.

pub mod probe;

pub use probe::{MediaIntake, PosterFrame};
