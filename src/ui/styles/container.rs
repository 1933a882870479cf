// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// White content card with rounded corners.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Card with the gold left-accent treatment (urgent announcements, FAQs).
pub fn accent_card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::WHITE
        })),
        border: Border {
            color: palette::GOLD_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Header bar across the top of the content pages.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.9,
            ..palette::WHITE
        })),
        shadow: shadow::SM,
        ..container::Style::default()
    }
}

/// Blue sidebar panel sliding in from the right.
pub fn sidebar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        shadow: shadow::LG,
        ..container::Style::default()
    }
}

/// Modal scrim behind the map view, from the active color scheme.
pub fn scrim(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.overlay_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

/// Colored badge pill (calendar legend, urgent tag).
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Page background wash behind the content cards.
pub fn page_background(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.surface_secondary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sidebar_is_campus_blue() {
        let style = sidebar(&Theme::Light);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn accent_card_carries_the_gold_border() {
        let style = accent_card(&Theme::Light);
        assert_eq!(style.border.color, palette::GOLD_500);
    }

    #[test]
    fn scrim_tracks_the_color_scheme() {
        let standard = scrim(&ColorScheme::standard())(&Theme::Light);
        let contrast = scrim(&ColorScheme::high_contrast())(&Theme::Light);
        assert_ne!(standard.background, contrast.background);
    }
}
