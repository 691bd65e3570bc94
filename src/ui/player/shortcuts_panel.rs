// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts panel: the full key table with badges.

use crate::i18n::I18n;
use crate::player::Message;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, row, Column, Row, Space, Text};
use iced::{alignment, Border, Element, Length};

/// Key badge plus description, one table entry.
const SHORTCUTS: [(&str, &str); 9] = [
    ("B", "shortcut-bookmark"),
    ("L", "shortcut-loop"),
    ("Space", "shortcut-playback"),
    ("←/→", "shortcut-seek"),
    ("↑/↓", "shortcut-volume"),
    ("1-5", "shortcut-rate"),
    ("F", "shortcut-fullscreen"),
    ("M", "shortcut-mute"),
    ("Esc", "shortcut-escape"),
];

/// Renders the shortcuts panel.
pub fn view<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let mut left = Column::new().spacing(spacing::XS);
    let mut right = Column::new().spacing(spacing::XS);

    for (index, (key, description_key)) in SHORTCUTS.iter().enumerate() {
        let entry = shortcut_row(key, i18n.tr(description_key));
        if index % 2 == 0 {
            left = left.push(entry);
        } else {
            right = right.push(entry);
        }
    }

    let table: Row<'a, Message> = row![left, right].spacing(spacing::LG);

    container(
        column![
            Text::new(i18n.tr("shortcuts-panel-title")).size(typography::TITLE_SM),
            table,
        ]
        .spacing(spacing::SM),
    )
    .style(styles::container::panel)
    .padding(spacing::MD)
    .width(Length::Fill)
    .into()
}

fn shortcut_row<'a>(key: &'a str, description: String) -> Element<'a, Message> {
    row![
        Text::new(description)
            .size(typography::CAPTION)
            .color(palette::GRAY_300),
        Space::new().width(Length::Fill),
        key_badge(key),
    ]
    .spacing(spacing::SM)
    .align_y(alignment::Vertical::Center)
    .width(Length::Fixed(260.0))
    .into()
}

fn key_badge<'a>(key: &'a str) -> Element<'a, Message> {
    container(Text::new(key).size(typography::CAPTION).color(palette::GRAY_100))
        .style(|_theme: &iced::Theme| iced::widget::container::Style {
            border: Border {
                color: palette::GRAY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            ..Default::default()
        })
        .padding([spacing::XXS, spacing::XS])
        .into()
}
