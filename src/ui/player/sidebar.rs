// SPDX-License-Identifier: MPL-2.0
//! Bookmarks sidebar: count, per-bookmark card with edit/delete/jump
//! actions, and an empty-state prompt.

use crate::i18n::I18n;
use crate::player::{format_timecode, Bookmark, Message, State};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, scrollable, text, Column, Space, Text};
use iced::{alignment, Element, Length};

/// Renders the sidebar for an open session.
pub fn view<'a>(session: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let count = session.bookmarks().len();

    let header = row![
        Text::new(i18n.tr("sidebar-title")).size(typography::TITLE_SM),
        Space::new().width(Length::Fill),
        Text::new(count.to_string())
            .size(typography::BODY)
            .color(palette::GRAY_300),
    ]
    .align_y(alignment::Vertical::Center);

    let hint = Text::new(i18n.tr("sidebar-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_500);

    let body: Element<'a, Message> = if session.bookmarks().is_empty() {
        empty_state(i18n)
    } else {
        let mut list = Column::new().spacing(spacing::XS);
        for bookmark in session.bookmarks().entries() {
            list = list.push(bookmark_card(bookmark, i18n));
        }
        scrollable(list.padding([0.0, spacing::XXS]))
            .height(Length::Fill)
            .into()
    };

    container(
        column![header, hint, body]
            .spacing(spacing::SM)
            .padding(spacing::MD),
    )
    .style(styles::container::panel)
    .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
    .height(Length::Fill)
    .into()
}

fn empty_state<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    container(
        column![
            Text::new(i18n.tr("sidebar-empty-title"))
                .size(typography::BODY)
                .color(palette::GRAY_300),
            Text::new(i18n.tr("sidebar-empty-hint"))
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
        ]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center),
    )
    .width(Length::Fill)
    .padding(spacing::LG)
    .align_x(alignment::Horizontal::Center)
    .into()
}

fn bookmark_card<'a>(bookmark: &'a Bookmark, i18n: &'a I18n) -> Element<'a, Message> {
    let title_row = row![
        Text::new(bookmark.title.as_str()).size(typography::BODY),
        Space::new().width(Length::Fill),
        button(Text::new(i18n.tr("sidebar-edit")).size(typography::CAPTION))
            .style(styles::button::ghost)
            .padding(spacing::XXS)
            .on_press(Message::OpenEditor(Some(bookmark.id))),
        button(Text::new(i18n.tr("sidebar-delete")).size(typography::CAPTION))
            .style(styles::button::ghost)
            .padding(spacing::XXS)
            .on_press(Message::DeleteBookmark(bookmark.id)),
    ]
    .spacing(spacing::XXS)
    .align_y(alignment::Vertical::Center);

    let action_row = row![
        Text::new(format_timecode(bookmark.timestamp_secs))
            .size(typography::CAPTION)
            .color(palette::BRAND_300),
        Space::new().width(Length::Fill),
        button(Text::new(i18n.tr("sidebar-jump")).size(typography::CAPTION))
            .style(styles::button::primary)
            .padding([spacing::XXS, spacing::XS])
            .on_press(Message::JumpToBookmark(bookmark.id)),
    ]
    .align_y(alignment::Vertical::Center);

    let mut card = column![title_row, action_row].spacing(spacing::XS);

    if let Some(note) = &bookmark.note {
        card = card.push(
            text(note.as_str())
                .size(typography::CAPTION)
                .color(palette::GRAY_300),
        );
    }

    container(card)
        .style(styles::container::card)
        .padding(spacing::SM)
        .width(Length::Fill)
        .into()
}
