// SPDX-License-Identifier: MPL-2.0
//! Add/edit bookmark dialog, rendered as a modal overlay.
//!
//! The dialog works on the session's pending edit buffer; the store is
//! only touched on confirm. The save button mirrors the controller
//! contract: it is disabled while the trimmed title is blank.

use crate::i18n::I18n;
use crate::player::{format_timecode, EditBuffer, Message, State};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text_input, Space, Text};
use iced::{alignment, Element, Length};

/// Renders the dialog overlay for the open edit buffer.
pub fn view<'a>(session: &'a State, editor: &'a EditBuffer, i18n: &'a I18n) -> Element<'a, Message> {
    let heading = if editor.editing.is_some() {
        i18n.tr("dialog-edit-title")
    } else {
        i18n.tr("dialog-add-title")
    };

    let title_input = text_input(&i18n.tr("dialog-title-placeholder"), &editor.title)
        .on_input(Message::EditorTitleChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    let note_input = text_input(&i18n.tr("dialog-note-placeholder"), &editor.note)
        .on_input(Message::EditorNoteChanged)
        .padding(spacing::XS)
        .size(typography::BODY);

    // Editing keeps the original timestamp; adding uses the live position
    let timestamp = match editor.editing {
        Some(id) => session
            .bookmarks()
            .get(id)
            .map(|b| b.timestamp_secs)
            .unwrap_or_else(|| session.transport().position_secs()),
        None => session.transport().position_secs(),
    };
    let timestamp_row = row![
        Text::new(i18n.tr("dialog-timestamp-label"))
            .size(typography::CAPTION)
            .color(palette::GRAY_300),
        Text::new(format_timecode(timestamp))
            .size(typography::CAPTION)
            .color(palette::BRAND_300),
    ]
    .spacing(spacing::XXS);

    let enter_hint = Text::new(i18n.tr("dialog-enter-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_500);

    let cancel_button = button(Text::new(i18n.tr("dialog-cancel")).size(typography::BODY))
        .style(styles::button::ghost)
        .padding([spacing::XS, spacing::MD])
        .on_press(Message::CancelEditor);

    let save_label = if editor.editing.is_some() {
        i18n.tr("dialog-save-update")
    } else {
        i18n.tr("dialog-save-new")
    };
    let save_button = button(Text::new(save_label).size(typography::BODY))
        .style(styles::button::primary)
        .padding([spacing::XS, spacing::MD]);
    // Blank titles cannot be saved; the button stays inert
    let save_button = if editor.confirmable_title().is_some() {
        save_button.on_press(Message::ConfirmEditor)
    } else {
        save_button
    };

    let buttons = row![
        Space::new().width(Length::Fill),
        cancel_button,
        save_button,
    ]
    .spacing(spacing::SM);

    let card = container(
        column![
            Text::new(heading).size(typography::TITLE),
            column![
                Text::new(i18n.tr("dialog-title-label")).size(typography::CAPTION),
                title_input,
            ]
            .spacing(spacing::XXS),
            column![
                Text::new(i18n.tr("dialog-note-label")).size(typography::CAPTION),
                note_input,
            ]
            .spacing(spacing::XXS),
            timestamp_row,
            enter_hint,
            buttons,
        ]
        .spacing(spacing::MD),
    )
    .style(styles::container::dialog)
    .padding(spacing::LG)
    .width(Length::Fixed(sizing::DIALOG_WIDTH));

    // Dimmed backdrop centering the card over the whole surface
    container(card)
        .style(styles::container::backdrop)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
