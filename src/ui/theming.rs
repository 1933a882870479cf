// SPDX-License-Identifier: MPL-2.0
//! Extensible theming system.
//!
//! The kiosk ships two schemes: the standard campus look and a
//! high-contrast scheme driven by the accessibility toggle in the sidebar.
//! High contrast is an explicit visitor choice, never detected from the
//! host system.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_inverse: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_pressed: Color,
    pub accent: Color,

    // Semantic colors
    pub error: Color,
    pub success: Color,

    // Overlay colors (modal scrim behind the map view)
    pub overlay_background: Color,
}

impl ColorScheme {
    /// Standard campus scheme.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,
            text_inverse: palette::WHITE,

            brand_primary: palette::PRIMARY_500,
            brand_pressed: palette::PRIMARY_700,
            accent: palette::GOLD_500,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
        }
    }

    /// High-contrast scheme for low-vision visitors.
    ///
    /// Pure black on white surfaces, darker brand blue, and a stronger
    /// modal scrim.
    #[must_use]
    pub fn high_contrast() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::WHITE,

            text_primary: palette::BLACK,
            text_secondary: palette::BLACK,
            text_inverse: palette::WHITE,

            brand_primary: palette::PRIMARY_900,
            brand_pressed: palette::BLACK,
            accent: palette::GOLD_500,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
        }
    }

    /// Selects the scheme for the accessibility toggle.
    #[must_use]
    pub fn for_accessibility(high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else {
            Self::standard()
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::standard()
    }
}
