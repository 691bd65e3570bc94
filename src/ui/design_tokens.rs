// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the player UI.
//!
//! Single source of truth for colors, spacing, sizing, and typography.
//! The palette keeps the catalog's dark chrome with an amber brand accent,
//! green for loop state, and the usual semantic colors.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale (dark chrome)
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.08, 0.08, 0.1);
    pub const GRAY_800: Color = Color::from_rgb(0.12, 0.12, 0.15);
    pub const GRAY_700: Color = Color::from_rgb(0.2, 0.2, 0.24);
    pub const GRAY_500: Color = Color::from_rgb(0.42, 0.42, 0.47);
    pub const GRAY_300: Color = Color::from_rgb(0.65, 0.65, 0.7);
    pub const GRAY_100: Color = Color::from_rgb(0.88, 0.88, 0.9);

    // Brand colors (amber scale)
    pub const BRAND_300: Color = Color::from_rgb(0.99, 0.85, 0.45);
    pub const BRAND_500: Color = Color::from_rgb(0.92, 0.7, 0.03);
    pub const BRAND_600: Color = Color::from_rgb(0.79, 0.56, 0.02);

    // Loop state (green scale)
    pub const LOOP_400: Color = Color::from_rgb(0.29, 0.78, 0.45);
    pub const LOOP_600: Color = Color::from_rgb(0.13, 0.55, 0.29);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Interactive element height.
    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Bookmarks sidebar width.
    pub const SIDEBAR_WIDTH: f32 = 300.0;

    /// Bookmark editor dialog width.
    pub const DIALOG_WIDTH: f32 = 380.0;

    /// Height of the timeline marker strip under the scrubber.
    pub const MARKER_STRIP_HEIGHT: f32 = 6.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog and panel headings.
    pub const TITLE: f32 = 20.0;

    /// Section headers, the window title row.
    pub const TITLE_SM: f32 = 17.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Hints, timestamps, badges.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
    assert!(opacity::OPAQUE == 1.0);

    assert!(typography::TITLE > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(palette::BRAND_500.g >= 0.0 && palette::BRAND_500.g <= 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn loop_and_brand_colors_are_distinct() {
        assert_ne!(palette::LOOP_600, palette::BRAND_500);
        assert_ne!(palette::ERROR_500, palette::WARNING_500);
    }
}
