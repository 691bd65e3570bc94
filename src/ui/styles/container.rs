// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The video surface behind the poster and overlays.
pub fn surface(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLACK)),
        text_color: Some(palette::GRAY_300),
        ..Default::default()
    }
}

/// Card-like panel (sidebar, shortcut list, rate picker).
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::GRAY_100),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Inset card inside a panel (a single bookmark row).
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_700)),
        text_color: Some(palette::GRAY_100),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Floating indicator badge over the video surface (feedback, rate).
pub fn indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::WHITE
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Loop status badge: like [`indicator`] but on the loop green.
pub fn loop_indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.9,
            ..palette::LOOP_600
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            color: palette::LOOP_400,
            width: 1.0,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Dimming backdrop behind the bookmark editor dialog.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// The editor dialog card.
pub fn dialog(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_800)),
        text_color: Some(palette::GRAY_100),
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
