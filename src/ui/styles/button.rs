// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

fn soft_shadow() -> Shadow {
    Shadow {
        color: BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    }
}

/// Primary action button: amber brand with dark text.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::BRAND_300,
        button::Status::Disabled => palette::GRAY_700,
        _ => palette::BRAND_500,
    };
    let text_color = match status {
        button::Status::Disabled => palette::GRAY_500,
        _ => palette::GRAY_900,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: palette::BRAND_600,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: soft_shadow(),
        snap: true,
    }
}

/// Quiet toolbar button: transparent until hovered.
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (Some(Background::Color(palette::GRAY_700)), WHITE)
        }
        button::Status::Disabled => (None, palette::GRAY_500),
        _ => (None, palette::GRAY_300),
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Toolbar button pinned into its active state (open panel toggles).
pub fn ghost_active(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::GRAY_700,
        _ => palette::GRAY_800,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::BRAND_300,
        border: Border {
            color: palette::GRAY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Selection chip for the quick rate strip.
pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color, border_color) = if selected {
            (palette::BRAND_500, palette::GRAY_900, palette::BRAND_600)
        } else {
            match status {
                button::Status::Hovered => (palette::GRAY_700, WHITE, palette::GRAY_500),
                _ => (palette::GRAY_800, palette::GRAY_300, palette::GRAY_700),
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

/// Button floating over the video surface (loop indicator actions).
pub fn overlay(text_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_STRONG,
            _ => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::BRAND_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn ghost_button_gains_background_on_hover() {
        let theme = Theme::Dark;
        let normal = ghost(&theme, button::Status::Active);
        let hover = ghost(&theme, button::Status::Hovered);
        assert!(normal.background.is_none());
        assert!(hover.background.is_some());
    }

    #[test]
    fn chip_selection_changes_background() {
        let theme = Theme::Dark;
        let selected = chip(true)(&theme, button::Status::Active);
        let unselected = chip(false)(&theme, button::Status::Active);
        assert_ne!(selected.background, unselected.background);
    }
}
