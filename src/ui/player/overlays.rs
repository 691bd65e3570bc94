// SPDX-License-Identifier: MPL-2.0
//! Floating indicators over the video surface: shortcut feedback, loop
//! status, rate badge, and the persistent shortcut hint.

use crate::i18n::I18n;
use crate::player::{format_timecode, LoopState, Message, State};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, row, Text};
use iced::{alignment, Element, Length};

/// Feedback badge, top-left. Present only while a message is visible.
pub fn feedback<'a>(session: &'a State) -> Option<Element<'a, Message>> {
    let text = session.feedback_text()?;
    Some(
        container(
            container(Text::new(text.to_string()).size(typography::BODY))
                .style(styles::container::indicator)
                .padding([spacing::XS, spacing::SM]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into(),
    )
}

/// Loop status badge, top-center. Present while arming or active.
pub fn loop_status<'a>(session: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    let content: Element<'a, Message> = match session.loop_engine().state() {
        LoopState::Idle => return None,
        LoopState::AwaitingStart => row![
            Text::new(i18n.tr("loop-awaiting-start")).size(typography::CAPTION),
            cancel_button(i18n.tr("loop-cancel"), Message::CancelLoop),
        ]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into(),
        LoopState::AwaitingEnd { start_secs } => row![
            Text::new(i18n.tr_with(
                "loop-awaiting-end",
                &[("start", format_timecode(start_secs))],
            ))
            .size(typography::CAPTION),
            cancel_button(i18n.tr("loop-cancel"), Message::CancelLoop),
        ]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into(),
        LoopState::Active(region) => row![
            Text::new(i18n.tr_with(
                "loop-active",
                &[
                    ("start", format_timecode(region.start_secs)),
                    ("end", format_timecode(region.end_secs)),
                ],
            ))
            .size(typography::CAPTION),
            cancel_button(i18n.tr("loop-clear"), Message::ClearLoop),
        ]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .into(),
    };

    Some(
        container(
            container(content)
                .style(styles::container::loop_indicator)
                .padding([spacing::XS, spacing::SM]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into(),
    )
}

/// Rate badge, top-right. Present while the rate differs from normal.
pub fn rate_badge<'a>(session: &'a State) -> Option<Element<'a, Message>> {
    let rate = session.transport().rate();
    if rate.is_normal() {
        return None;
    }
    Some(
        container(
            container(Text::new(rate.label()).size(typography::CAPTION))
                .style(styles::container::indicator)
                .padding([spacing::XXS, spacing::XS]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .padding(spacing::MD)
        .into(),
    )
}

/// One-line shortcut hint, bottom-right. Hidden while the full panel is open.
pub fn shortcut_hint<'a>(session: &'a State, i18n: &'a I18n) -> Option<Element<'a, Message>> {
    if session.is_shortcuts_open() {
        return None;
    }
    Some(
        container(
            container(
                Text::new(i18n.tr("shortcut-hint"))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_300),
            )
            .style(styles::container::indicator)
            .padding([spacing::XXS, spacing::XS]),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::MD)
        .into(),
    )
}

fn cancel_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(Text::new(label).size(typography::CAPTION))
        .style(styles::button::overlay(palette::WHITE))
        .padding(spacing::XXS)
        .on_press(message)
        .into()
}
