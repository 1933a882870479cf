// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button in campus blue with the gold border the original
/// kiosk chrome uses.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::GOLD_500,
                width: 2.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_700)),
            text_color: WHITE,
            border: Border {
                color: palette::GOLD_500,
                width: 2.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Square menu tile on the main menu grid.
pub fn menu_tile(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_700,
        _ => palette::PRIMARY_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::GOLD_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Icon button on the header bar (back arrow, sidebar toggle).
pub fn header_icon(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OVERLAY_SUBTLE,
        _ => 0.1,
    };
    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::PRIMARY_500
        })),
        text_color: palette::PRIMARY_500,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Circular prev/next arrow floated over the map slideshow.
///
/// Disabled at the boundary slides, mirroring the slideshow's clamp.
pub fn slide_arrow(_theme: &Theme, status: button::Status) -> button::Style {
    let (alpha, text_color) = match status {
        button::Status::Disabled => (0.4, palette::GRAY_400),
        button::Status::Hovered | button::Status::Pressed => (opacity::OPAQUE, palette::PRIMARY_500),
        _ => (0.8, palette::PRIMARY_500),
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}

/// Pagination dot under the slideshow; filled for the active slide.
pub fn pagination_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(if active {
            palette::PRIMARY_500
        } else {
            palette::GRAY_200
        })),
        text_color: Color::TRANSPARENT,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Transparent row button inside the sidebar panel.
pub fn sidebar_entry(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.1,
        _ => opacity::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Ghost button over a dark scrim (close button on the map view).
pub fn scrim_icon(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => 0.3,
        _ => opacity::OVERLAY_SUBTLE,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
        assert_eq!(style.border.color, palette::GOLD_500);
    }

    #[test]
    fn disabled_primary_button_is_grayed_out() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn slide_arrow_fades_when_disabled() {
        let theme = Theme::Light;
        let active = slide_arrow(&theme, button::Status::Active);
        let disabled = slide_arrow(&theme, button::Status::Disabled);

        let alpha = |style: &button::Style| match style.background {
            Some(Background::Color(c)) => c.a,
            _ => panic!("Expected background color"),
        };
        assert!(alpha(&disabled) < alpha(&active));
    }

    #[test]
    fn pagination_dot_fills_only_the_active_slide() {
        let theme = Theme::Light;
        let on = pagination_dot(true)(&theme, button::Status::Active);
        let off = pagination_dot(false)(&theme, button::Status::Active);
        assert_ne!(on.background, off.background);
    }
}
