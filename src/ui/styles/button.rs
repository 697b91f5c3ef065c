// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Pill-shaped brand button ("New Post", "Post to Feed").
///
/// The disabled state keeps the brand color at half opacity, matching the
/// "not allowed" look of a blocked submit.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette::SMART_DARK_GREEN,
        button::Status::Disabled => Color {
            a: opacity::DISABLED,
            ..palette::SMART_GREEN
        },
        button::Status::Active => palette::SMART_GREEN,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            Color {
                a: opacity::DISABLED,
                ..WHITE
            }
        } else {
            WHITE
        },
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: if matches!(status, button::Status::Disabled) {
            shadow::NONE
        } else {
            shadow::MD
        },
        snap: true,
    }
}

/// Flat button that only shows a background on hover (interaction bar, photo picker).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(Background::Color(palette.background.weak.color))
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round red button overlaid on the image preview to remove it.
pub fn remove(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered | button::Status::Pressed => opacity::OPAQUE,
        _ => 0.85,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::ERROR_500
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        snap: true,
    }
}
