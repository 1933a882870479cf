// SPDX-License-Identifier: MPL-2.0
//! # Design Tokens
//!
//! This module defines the kiosk's design tokens, following the W3C Design
//! Tokens standard.
//!
//! ## Organization
//!
//! - **Palette**: Base colors (campus branding: PLV blue and gold)
//! - **Opacity**: Standardized opacity levels
//! - **Spacing**: Spacing scale (8px grid)
//! - **Sizing**: Component sizes
//! - **Typography**: Font size scale
//! - **Radius**: Border radii
//! - **Shadow**: Shadow definitions
//!
//! Tokens are designed to be consistent; keep the ratios when adjusting
//! (e.g. `MD = XS * 2`) and check the compile-time validation block below.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.9);

    // Brand colors (PLV blue scale, anchored on #004aad)
    pub const PRIMARY_100: Color = Color::from_rgb(0.85, 0.91, 1.0); // Very light blue
    pub const PRIMARY_300: Color = Color::from_rgb(0.45, 0.62, 0.92); // Light blue
    pub const PRIMARY_500: Color = Color::from_rgb(0.0, 0.29, 0.678); // #004aad
    pub const PRIMARY_700: Color = Color::from_rgb(0.0, 0.21, 0.502); // #003580, pressed
    pub const PRIMARY_900: Color = Color::from_rgb(0.0, 0.13, 0.31); // Very dark blue

    // Accent (PLV gold, #ffc300)
    pub const GOLD_300: Color = Color::from_rgb(1.0, 0.85, 0.4);
    pub const GOLD_500: Color = Color::from_rgb(1.0, 0.765, 0.0); // #ffc300

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Touch targets: the kiosk is finger-operated, so interactive elements
    // stay at or above the WCAG 2.5.5 44px minimum.
    pub const TOUCH_TARGET: f32 = 48.0;
    pub const BUTTON_HEIGHT: f32 = 48.0;
    pub const INPUT_HEIGHT: f32 = 56.0;

    // Header bar across the content pages.
    pub const HEADER_HEIGHT: f32 = 64.0;

    // Slide-in sidebar panel.
    pub const SIDEBAR_WIDTH: f32 = 256.0;

    // Pagination dots under the map slideshow.
    pub const DOT_SIZE: f32 = 12.0;

    // Menu tiles on the main menu grid.
    pub const MENU_TILE: f32 = 96.0;

    // Campus logo on the home and login screens.
    pub const LOGO: f32 = 128.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale for the kiosk's text hierarchy. The large-text
    //! accessibility toggle multiplies these by [`LARGE_TEXT_FACTOR`].

    /// Large title - Page headings
    pub const TITLE_LG: f32 = 30.0;

    /// Medium title - App name, card titles
    pub const TITLE_MD: f32 = 22.0;

    /// Small title - Section headers
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Form inputs, emphasis text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;

    /// Multiplier applied when the large-text accessibility toggle is on.
    pub const LARGE_TEXT_FACTOR: f32 = 1.25;

    /// Scales a token by the large-text toggle.
    #[must_use]
    pub fn scaled(size: f32, large_text: bool) -> f32 {
        if large_text {
            size * LARGE_TEXT_FACTOR
        } else {
            size
        }
    }
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 12.0;
    pub const LG: f32 = 24.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Touch-target validation (WCAG 2.5.5 minimum)
    assert!(sizing::TOUCH_TARGET >= 44.0);
    assert!(sizing::BUTTON_HEIGHT >= 44.0);

    // Typography validation
    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
    assert!(typography::LARGE_TEXT_FACTOR > 1.0);
};
