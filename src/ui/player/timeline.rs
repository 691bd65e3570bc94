// SPDX-License-Identifier: MPL-2.0
//! Timeline marker strip rendered under the scrubber.
//!
//! Draws the active loop region as a translucent band with solid edge
//! ticks, and every bookmark as a small dot, all positioned proportionally
//! to the media duration.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Point, Rectangle, Size, Theme};

/// Radius of a bookmark dot, in logical pixels.
const DOT_RADIUS: f32 = 2.5;

/// Width of a loop boundary tick, in logical pixels.
const TICK_WIDTH: f32 = 2.0;

/// Marker strip widget state.
#[derive(Debug, Clone, Default)]
pub struct MarkerStrip {
    /// Media duration in seconds; nothing is drawn when zero.
    pub duration_secs: f64,
    /// Enabled loop region bounds, if any.
    pub loop_region: Option<(f64, f64)>,
    /// Bookmark positions in seconds.
    pub bookmarks: Vec<f64>,
}

impl MarkerStrip {
    fn x_for(&self, position_secs: f64, width: f32) -> f32 {
        ((position_secs / self.duration_secs) as f32).clamp(0.0, 1.0) * width
    }
}

impl<Message> canvas::Program<Message> for MarkerStrip {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.duration_secs <= 0.0 {
            return vec![frame.into_geometry()];
        }

        if let Some((start_secs, end_secs)) = self.loop_region {
            let x0 = self.x_for(start_secs, bounds.width);
            let x1 = self.x_for(end_secs, bounds.width);

            let band = canvas::Path::rectangle(
                Point::new(x0, 0.0),
                Size::new((x1 - x0).max(TICK_WIDTH), bounds.height),
            );
            frame.fill(
                &band,
                Color {
                    a: 0.5,
                    ..palette::LOOP_400
                },
            );

            for x in [x0, x1] {
                let tick = canvas::Path::rectangle(
                    Point::new(x - TICK_WIDTH / 2.0, 0.0),
                    Size::new(TICK_WIDTH, bounds.height),
                );
                frame.fill(&tick, palette::LOOP_400);
            }
        }

        let dot_y = bounds.height / 2.0;
        for &timestamp in &self.bookmarks {
            let x = self.x_for(timestamp, bounds.width);
            let dot = canvas::Path::circle(Point::new(x, dot_y), DOT_RADIUS);
            frame.fill(&dot, palette::BRAND_500);
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_scale_proportionally() {
        let strip = MarkerStrip {
            duration_secs: 100.0,
            loop_region: None,
            bookmarks: vec![],
        };
        assert_eq!(strip.x_for(0.0, 200.0), 0.0);
        assert_eq!(strip.x_for(50.0, 200.0), 100.0);
        assert_eq!(strip.x_for(100.0, 200.0), 200.0);
    }

    #[test]
    fn positions_clamp_to_the_strip() {
        let strip = MarkerStrip {
            duration_secs: 100.0,
            loop_region: None,
            bookmarks: vec![],
        };
        assert_eq!(strip.x_for(150.0, 200.0), 200.0);
        assert_eq!(strip.x_for(-10.0, 200.0), 0.0);
    }
}
