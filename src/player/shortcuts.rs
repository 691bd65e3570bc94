// SPDX-License-Identifier: MPL-2.0
//! Shortcut dispatcher: single key events to player operations.
//!
//! The dispatcher is a pure function so the whole key table is testable
//! without a window. Focus handling follows the session contract: while a
//! text-entry widget holds focus every shortcut is suppressed except the
//! save-confirmation key of the open bookmark editor.

use super::rate::PlaybackRate;
use iced::keyboard::{key, Key, Modifiers};

/// Player operation selected by a shortcut key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `B` - add a bookmark at the current position.
    QuickBookmark,
    /// `L` - advance the loop-arming state machine.
    AdvanceLoop,
    /// `Space` - toggle play/pause.
    TogglePlayback,
    /// `←` - seek backward one step.
    SeekBackward,
    /// `→` - seek forward one step.
    SeekForward,
    /// `↑` - raise volume one step.
    VolumeUp,
    /// `↓` - lower volume one step.
    VolumeDown,
    /// `1`-`5` - select a playback rate preset.
    SetRate(PlaybackRate),
    /// `F` - toggle fullscreen.
    ToggleFullscreen,
    /// `M` - toggle mute.
    ToggleMute,
    /// `Esc` - close the innermost open sub-state, else the player.
    Escape,
    /// `Enter` while the bookmark editor is open - confirm the save.
    ConfirmEditor,
}

/// Dispatch context derived from the session state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Context {
    /// The bookmark editor dialog is open.
    pub editor_open: bool,
    /// A text-entry widget captured the key event.
    pub text_entry_focused: bool,
}

/// Maps a key event onto a player operation.
///
/// Returns `None` for keys outside the table, for modifier-chorded keys,
/// and for everything except `Enter` while a text entry has focus.
#[must_use]
pub fn dispatch(key: &Key, modifiers: Modifiers, ctx: Context) -> Option<Shortcut> {
    // Chorded keys belong to the host shell, never to the player.
    if modifiers.command() || modifiers.alt() {
        return None;
    }

    // While typing, only the editor's save confirmation gets through.
    if ctx.text_entry_focused {
        return match key {
            Key::Named(key::Named::Enter) if ctx.editor_open => Some(Shortcut::ConfirmEditor),
            _ => None,
        };
    }

    match key {
        Key::Named(key::Named::Space) => Some(Shortcut::TogglePlayback),
        Key::Named(key::Named::ArrowLeft) => Some(Shortcut::SeekBackward),
        Key::Named(key::Named::ArrowRight) => Some(Shortcut::SeekForward),
        Key::Named(key::Named::ArrowUp) => Some(Shortcut::VolumeUp),
        Key::Named(key::Named::ArrowDown) => Some(Shortcut::VolumeDown),
        Key::Named(key::Named::Escape) => Some(Shortcut::Escape),
        Key::Named(key::Named::Enter) if ctx.editor_open => Some(Shortcut::ConfirmEditor),
        Key::Character(c) => match c.as_str() {
            "b" | "B" => Some(Shortcut::QuickBookmark),
            "l" | "L" => Some(Shortcut::AdvanceLoop),
            "f" | "F" => Some(Shortcut::ToggleFullscreen),
            "m" | "M" => Some(Shortcut::ToggleMute),
            digit => digit
                .parse::<u8>()
                .ok()
                .and_then(PlaybackRate::from_digit)
                .map(Shortcut::SetRate),
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(c: &str) -> Key {
        Key::Character(c.into())
    }

    fn plain(key: &Key) -> Option<Shortcut> {
        dispatch(key, Modifiers::empty(), Context::default())
    }

    #[test]
    fn letter_shortcuts_are_case_insensitive() {
        for (lower, upper, expected) in [
            ("b", "B", Shortcut::QuickBookmark),
            ("l", "L", Shortcut::AdvanceLoop),
            ("f", "F", Shortcut::ToggleFullscreen),
            ("m", "M", Shortcut::ToggleMute),
        ] {
            assert_eq!(plain(&character(lower)), Some(expected));
            assert_eq!(plain(&character(upper)), Some(expected));
        }
    }

    #[test]
    fn named_keys_map_to_transport_operations() {
        assert_eq!(
            plain(&Key::Named(key::Named::Space)),
            Some(Shortcut::TogglePlayback)
        );
        assert_eq!(
            plain(&Key::Named(key::Named::ArrowLeft)),
            Some(Shortcut::SeekBackward)
        );
        assert_eq!(
            plain(&Key::Named(key::Named::ArrowRight)),
            Some(Shortcut::SeekForward)
        );
        assert_eq!(
            plain(&Key::Named(key::Named::ArrowUp)),
            Some(Shortcut::VolumeUp)
        );
        assert_eq!(
            plain(&Key::Named(key::Named::ArrowDown)),
            Some(Shortcut::VolumeDown)
        );
        assert_eq!(
            plain(&Key::Named(key::Named::Escape)),
            Some(Shortcut::Escape)
        );
    }

    #[test]
    fn digits_map_to_rate_presets() {
        assert_eq!(
            plain(&character("1")),
            Some(Shortcut::SetRate(PlaybackRate::X0_50))
        );
        assert_eq!(
            plain(&character("2")),
            Some(Shortcut::SetRate(PlaybackRate::Normal))
        );
        assert_eq!(
            plain(&character("3")),
            Some(Shortcut::SetRate(PlaybackRate::X1_25))
        );
        assert_eq!(
            plain(&character("4")),
            Some(Shortcut::SetRate(PlaybackRate::X1_50))
        );
        assert_eq!(
            plain(&character("5")),
            Some(Shortcut::SetRate(PlaybackRate::X2_00))
        );
        assert_eq!(plain(&character("6")), None);
        assert_eq!(plain(&character("0")), None);
    }

    #[test]
    fn unmapped_keys_pass_through() {
        assert_eq!(plain(&character("q")), None);
        assert_eq!(plain(&Key::Named(key::Named::Tab)), None);
    }

    #[test]
    fn chorded_keys_are_ignored() {
        assert_eq!(
            dispatch(&character("b"), Modifiers::ALT, Context::default()),
            None
        );
        assert_eq!(
            dispatch(
                &Key::Named(key::Named::Space),
                Modifiers::ALT,
                Context::default()
            ),
            None
        );
    }

    #[test]
    fn text_entry_focus_suppresses_shortcuts() {
        let ctx = Context {
            editor_open: true,
            text_entry_focused: true,
        };
        assert_eq!(dispatch(&character("b"), Modifiers::empty(), ctx), None);
        assert_eq!(
            dispatch(&Key::Named(key::Named::Space), Modifiers::empty(), ctx),
            None
        );
        assert_eq!(
            dispatch(&Key::Named(key::Named::Escape), Modifiers::empty(), ctx),
            None
        );
    }

    #[test]
    fn enter_confirms_editor_regardless_of_focus() {
        let focused = Context {
            editor_open: true,
            text_entry_focused: true,
        };
        assert_eq!(
            dispatch(&Key::Named(key::Named::Enter), Modifiers::empty(), focused),
            Some(Shortcut::ConfirmEditor)
        );

        let unfocused = Context {
            editor_open: true,
            text_entry_focused: false,
        };
        assert_eq!(
            dispatch(
                &Key::Named(key::Named::Enter),
                Modifiers::empty(),
                unfocused
            ),
            Some(Shortcut::ConfirmEditor)
        );
    }

    #[test]
    fn enter_is_inert_without_an_open_editor() {
        assert_eq!(plain(&Key::Named(key::Named::Enter)), None);

        let typing = Context {
            editor_open: false,
            text_entry_focused: true,
        };
        assert_eq!(
            dispatch(&Key::Named(key::Named::Enter), Modifiers::empty(), typing),
            None
        );
    }
}
