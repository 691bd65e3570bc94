// SPDX-License-Identifier: MPL-2.0
//! UI layer: design tokens, styles, and the player views.

pub mod design_tokens;
pub mod player;
pub mod styles;
