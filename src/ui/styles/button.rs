// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn solid(fill: Color, edge: Color, text_color: Color) -> button::Style {
    button::Style {
        background: Some(Background::Color(fill)),
        text_color,
        border: Border {
            color: edge,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

fn muted(theme: &Theme) -> button::Style {
    let is_dark = theme.extended_palette().is_dark;
    button::Style {
        background: Some(Background::Color(if is_dark {
            palette::GRAY_700
        } else {
            palette::GRAY_200
        })),
        text_color: palette::GRAY_400,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Main call to action of a page or dialog.
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => {
            solid(palette::PRIMARY_500, palette::PRIMARY_600, WHITE)
        }
        button::Status::Hovered => solid(palette::PRIMARY_400, palette::PRIMARY_500, WHITE),
        button::Status::Disabled => muted(theme),
    }
}

/// Secondary actions: outlined, no fill.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let text = theme.palette().text;
    let hover = Color {
        a: opacity::SUBTLE,
        ..palette::PRIMARY_400
    };
    let style = button::Style {
        background: None,
        text_color: text,
        border: Border {
            color: palette::PRIMARY_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    };
    match status {
        button::Status::Active => style,
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover)),
            ..style
        },
        button::Status::Disabled => muted(theme),
    }
}

/// Destructive or sign-out actions.
pub fn danger(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => muted(theme),
        _ => solid(palette::ERROR_500, palette::ERROR_500, WHITE),
    }
}

/// Borderless text button used by links, drawer entries and dismiss crosses.
pub fn text_link(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::SUBTLE,
            ..palette::GRAY_400
        })),
        _ => None,
    };
    button::Style {
        background,
        text_color: base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Drawer entry for the page currently shown.
pub fn selected(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => muted(theme),
        _ => button::Style {
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            ..solid(palette::PRIMARY_500, palette::PRIMARY_500, WHITE)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_uses_brand_fill() {
        let style = primary(&Theme::Light, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
        assert_eq!(style.text_color, WHITE);
    }

    #[test]
    fn disabled_buttons_are_muted_in_both_themes() {
        let light = primary(&Theme::Light, button::Status::Disabled);
        let dark = primary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(light.text_color, palette::GRAY_400);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn text_link_highlights_on_hover_only() {
        assert!(text_link(&Theme::Dark, button::Status::Active)
            .background
            .is_none());
        assert!(text_link(&Theme::Dark, button::Status::Hovered)
            .background
            .is_some());
    }
}
