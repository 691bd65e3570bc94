// SPDX-License-Identifier: MPL-2.0
//! Transport controls row: play/pause, scrubber with marker strip, time
//! display, volume and rate controls.

use super::timeline::MarkerStrip;
use crate::i18n::I18n;
use crate::player::{format_timecode, Message, PlaybackRate, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, canvas, column, row, slider, text, tooltip, Column, Text};
use iced::{alignment, Element, Length};

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

/// Renders the controls row for a ready session.
pub fn view<'a>(session: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let transport = session.transport();

    let play_pause_label = if transport.is_playing() { "⏸" } else { "▶" };
    let play_pause_tooltip = if transport.is_playing() {
        i18n.tr("controls-pause-tooltip")
    } else {
        i18n.tr("controls-play-tooltip")
    };
    let play_pause = tooltip(
        button(Text::new(play_pause_label).size(typography::TITLE_SM))
            .style(styles::button::ghost)
            .padding(spacing::XS)
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .on_press(Message::TogglePlayback),
        Text::new(play_pause_tooltip).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(4);

    // Scrubber shows the drag preview while the slider is held
    let timeline = slider(
        0.0..=transport.duration_secs().max(SLIDER_STEP_SECS),
        session.display_position(),
        Message::SeekPreview,
    )
    .on_release(Message::SeekCommit)
    .step(SLIDER_STEP_SECS)
    .width(Length::Fill);

    let markers = canvas(MarkerStrip {
        duration_secs: transport.duration_secs(),
        loop_region: session
            .loop_engine()
            .region()
            .map(|r| (r.start_secs, r.end_secs)),
        bookmarks: session
            .bookmarks()
            .entries()
            .iter()
            .map(|b| b.timestamp_secs)
            .collect(),
    })
    .width(Length::Fill)
    .height(Length::Fixed(sizing::MARKER_STRIP_HEIGHT));

    let scrubber: Column<'a, Message> = column![timeline, markers].spacing(spacing::XXS);

    let time_display = text(format!(
        "{} / {}",
        format_timecode(session.display_position()),
        format_timecode(transport.duration_secs())
    ))
    .size(typography::CAPTION);

    let mute_label = if transport.is_muted() {
        i18n.tr("controls-unmute")
    } else {
        i18n.tr("controls-mute")
    };
    let mute_button = tooltip(
        button(Text::new(mute_label).size(typography::CAPTION))
            .style(styles::button::ghost)
            .padding(spacing::XS)
            .on_press(Message::ToggleMute),
        Text::new(i18n.tr("controls-mute-tooltip")).size(typography::CAPTION),
        tooltip::Position::Top,
    )
    .gap(4);

    let volume = slider(0.0..=1.0, transport.volume().value(), Message::SetVolume)
        .step(0.01)
        .width(Length::Fixed(90.0));

    let rate_strip = rate_chips(transport.rate());

    row![
        play_pause,
        scrubber,
        time_display,
        mute_button,
        volume,
        rate_strip,
    ]
    .spacing(spacing::SM)
    .padding([spacing::XS, spacing::SM])
    .align_y(alignment::Vertical::Center)
    .into()
}

/// The quick rate strip mirroring the digit shortcuts.
fn rate_chips<'a>(current: PlaybackRate) -> Element<'a, Message> {
    let mut strip = iced::widget::Row::new().spacing(spacing::XXS);
    for rate in PlaybackRate::QUICK {
        strip = strip.push(
            button(Text::new(rate.label()).size(typography::CAPTION))
                .style(styles::button::chip(rate == current))
                .padding([spacing::XXS, spacing::XS])
                .on_press(Message::SetRate(rate)),
        );
    }
    strip.into()
}
