// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the player screen while a session is open, and a closed-state
//! panel (with a reopen action) otherwise.

use super::{App, Message};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::player::{self, ViewContext};
use crate::ui::styles;
use iced::widget::{button, column, container, Text};
use iced::{alignment, Element, Length};

/// Renders the current application view.
pub fn view(app: &App) -> Element<'_, Message> {
    match &app.session {
        Some(session) => player::view(ViewContext {
            i18n: &app.i18n,
            session,
            poster: app.poster.as_ref(),
        })
        .map(Message::Session),
        None => closed_view(app),
    }
}

/// The between-sessions panel: the player was closed but the catalog
/// record is still loaded, so it can be reopened in place.
fn closed_view(app: &App) -> Element<'_, Message> {
    let content = column![
        Text::new(app.i18n.tr("closed-title"))
            .size(typography::TITLE)
            .color(palette::GRAY_300),
        Text::new(app.request.title.as_str())
            .size(typography::BODY)
            .color(palette::GRAY_500),
        button(Text::new(app.i18n.tr("closed-reopen")).size(typography::BODY))
            .style(styles::button::primary)
            .padding([spacing::XS, spacing::LG])
            .on_press(Message::Reopen),
    ]
    .spacing(spacing::LG)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .style(styles::container::surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
