// SPDX-License-Identifier: MPL-2.0
//! Player screen: header, video surface with overlays, controls row,
//! bookmarks sidebar, and the modal bookmark editor.

pub mod controls;
pub mod dialog;
pub mod overlays;
pub mod shortcuts_panel;
pub mod sidebar;
pub mod timeline;

use crate::i18n::I18n;
use crate::player::{MediaPhase, Message, PlaybackRate, State};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{
    button, column, container, image, pick_list, row, Column, Row, Space, Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};

/// Context required to render the player screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a State,
    /// Poster frame from the probe, when one could be decoded.
    pub poster: Option<&'a image::Handle>,
}

/// Renders the player screen.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        session,
        poster,
    } = ctx;

    let surface = surface(session, poster, i18n);

    let main_row: Element<'_, Message> = if session.is_sidebar_open() && !session.is_fullscreen() {
        row![surface, sidebar::view(session, i18n)]
            .spacing(spacing::XS)
            .height(Length::Fill)
            .into()
    } else {
        surface
    };

    let mut page = Column::new().spacing(spacing::XS);

    // Fullscreen strips the chrome down to surface + controls
    if !session.is_fullscreen() {
        page = page.push(header(session, i18n));
        if session.is_shortcuts_open() {
            page = page.push(shortcuts_panel::view(i18n));
        }
        if session.is_rate_panel_open() {
            page = page.push(rate_panel(session, i18n));
        }
    }

    page = page.push(main_row);

    if session.is_ready() {
        page = page.push(controls::view(session, i18n));
    }

    container(page.padding(spacing::XS))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

// ════════════════════════════════════════════════════════════════════════
// Header
// ════════════════════════════════════════════════════════════════════════

fn header<'a>(session: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let ready = session.is_ready();

    let quick_loop = ghost_button(i18n.tr("header-quick-loop"), ready.then_some(Message::QuickSetLoop));
    let shortcuts = toggle_button(
        i18n.tr("header-shortcuts"),
        session.is_shortcuts_open(),
        Message::ToggleShortcutsPanel,
    );
    let bookmarks = toggle_button(
        i18n.tr_with(
            "header-bookmarks",
            &[("count", session.bookmarks().len().to_string())],
        ),
        session.is_sidebar_open(),
        Message::ToggleSidebar,
    );
    let add_bookmark = ghost_button(
        i18n.tr("header-add-bookmark"),
        ready.then_some(Message::OpenEditor(None)),
    );
    let rate = toggle_button(
        i18n.tr("header-rate"),
        session.is_rate_panel_open(),
        Message::ToggleRatePanel,
    );
    let close = ghost_button(i18n.tr("header-close"), Some(Message::CloseRequested));

    let title = Text::new(session.title().to_string())
        .size(typography::TITLE_SM)
        .color(palette::GRAY_100);

    let header_row: Row<'a, Message> = row![
        title,
        Space::new().width(Length::Fill),
        quick_loop,
        shortcuts,
        bookmarks,
        add_bookmark,
        rate,
        close,
    ]
    .spacing(spacing::XS)
    .align_y(alignment::Vertical::Center);

    container(header_row)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .into()
}

fn ghost_button<'a>(label: String, on_press: Option<Message>) -> Element<'a, Message> {
    let mut widget = button(Text::new(label).size(typography::CAPTION))
        .style(styles::button::ghost)
        .padding([spacing::XXS, spacing::XS]);
    if let Some(message) = on_press {
        widget = widget.on_press(message);
    }
    widget.into()
}

fn toggle_button<'a>(label: String, active: bool, message: Message) -> Element<'a, Message> {
    let style = if active {
        styles::button::ghost_active
    } else {
        styles::button::ghost
    };
    button(Text::new(label).size(typography::CAPTION))
        .style(style)
        .padding([spacing::XXS, spacing::XS])
        .on_press(message)
        .into()
}

// ════════════════════════════════════════════════════════════════════════
// Rate panel
// ════════════════════════════════════════════════════════════════════════

fn rate_panel<'a>(session: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let picker = pick_list(
        PlaybackRate::ALL,
        Some(session.transport().rate()),
        Message::SetRate,
    )
    .text_size(typography::BODY)
    .padding([spacing::XXS, spacing::XS]);

    container(
        row![
            Text::new(i18n.tr("rate-panel-label")).size(typography::BODY),
            Space::new().width(Length::Fill),
            picker,
        ]
        .align_y(alignment::Vertical::Center),
    )
    .style(styles::container::panel)
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .into()
}

// ════════════════════════════════════════════════════════════════════════
// Video surface
// ════════════════════════════════════════════════════════════════════════

fn surface<'a>(
    session: &'a State,
    poster: Option<&'a image::Handle>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = match session.phase() {
        MediaPhase::Missing => missing_panel(i18n),
        MediaPhase::Loading => loading_panel(i18n),
        MediaPhase::Failed(error) => error_panel(error.i18n_key(), &error.to_string(), i18n),
        MediaPhase::Ready => ready_surface(session, poster, i18n),
    };

    container(content)
        .style(styles::container::surface)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn ready_surface<'a>(
    session: &'a State,
    poster: Option<&'a image::Handle>,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let base: Element<'a, Message> = match poster {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => container(Space::new().width(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let mut stack = Stack::new().push(base);

    if let Some(overlay) = overlays::feedback(session) {
        stack = stack.push(overlay);
    }
    if let Some(overlay) = overlays::loop_status(session, i18n) {
        stack = stack.push(overlay);
    }
    if let Some(overlay) = overlays::rate_badge(session) {
        stack = stack.push(overlay);
    }
    if let Some(overlay) = overlays::shortcut_hint(session, i18n) {
        stack = stack.push(overlay);
    }
    if let Some(editor) = session.editor() {
        stack = stack.push(dialog::view(session, editor, i18n));
    }

    stack.width(Length::Fill).height(Length::Fill).into()
}

// ════════════════════════════════════════════════════════════════════════
// Empty / loading / error panels
// ════════════════════════════════════════════════════════════════════════

fn missing_panel<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    centered(
        column![
            Text::new(i18n.tr("missing-source-title"))
                .size(typography::TITLE_SM)
                .color(palette::GRAY_300),
            Text::new(i18n.tr("missing-source-body"))
                .size(typography::BODY)
                .color(palette::GRAY_500),
            button(Text::new(i18n.tr("missing-source-close")).size(typography::BODY))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::CloseRequested),
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into(),
    )
}

fn loading_panel<'a>(i18n: &'a I18n) -> Element<'a, Message> {
    centered(
        Text::new(i18n.tr("loading-media"))
            .size(typography::BODY)
            .color(palette::GRAY_300)
            .into(),
    )
}

fn error_panel<'a>(message_key: &str, details: &str, i18n: &'a I18n) -> Element<'a, Message> {
    centered(
        column![
            Text::new(i18n.tr("media-error-title"))
                .size(typography::TITLE_SM)
                .color(palette::ERROR_500),
            Text::new(i18n.tr(message_key))
                .size(typography::BODY)
                .color(palette::GRAY_300),
            Text::new(details.to_string())
                .size(typography::CAPTION)
                .color(palette::GRAY_500),
            row![
                button(Text::new(i18n.tr("media-error-retry")).size(typography::BODY))
                    .style(styles::button::ghost)
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::RetryMedia),
                button(Text::new(i18n.tr("media-error-close")).size(typography::BODY))
                    .style(styles::button::primary)
                    .padding([spacing::XS, spacing::MD])
                    .on_press(Message::CloseRequested),
            ]
            .spacing(spacing::SM),
        ]
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .into(),
    )
}

fn centered<'a>(content: Element<'a, Message>) -> Element<'a, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
