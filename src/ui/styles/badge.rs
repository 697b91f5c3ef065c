// SPDX-License-Identifier: MPL-2.0
//! Category badge styling.
//!
//! Badge colors are a pure lookup on the lower-cased category tag. Tags
//! outside the known vocabulary get the neutral tone.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Named color pair used for a category badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    EcoAction,
    Learning,
    Exploration,
    Neutral,
}

impl BadgeTone {
    /// Looks up the tone for a category tag, ignoring case.
    #[must_use]
    pub fn for_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "eco-action" | "action" => BadgeTone::EcoAction,
            "learning" => BadgeTone::Learning,
            "exploration" => BadgeTone::Exploration,
            _ => BadgeTone::Neutral,
        }
    }

    /// Background and text colors of the badge.
    #[must_use]
    pub fn colors(self) -> (Color, Color) {
        match self {
            BadgeTone::EcoAction => (
                Color {
                    a: opacity::TINT,
                    ..palette::SMART_GREEN
                },
                palette::SMART_DARK_GREEN,
            ),
            BadgeTone::Learning => (palette::BLUE_100, palette::BLUE_700),
            BadgeTone::Exploration => (palette::YELLOW_100, palette::YELLOW_700),
            BadgeTone::Neutral => (palette::GRAY_100, palette::GRAY_700),
        }
    }
}

/// Pill-shaped badge container for the given tone.
pub fn pill(tone: BadgeTone) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, text) = tone.colors();
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(BadgeTone::for_tag("Action"), BadgeTone::for_tag("action"));
        assert_eq!(BadgeTone::for_tag("ECO-ACTION"), BadgeTone::EcoAction);
        assert_eq!(BadgeTone::for_tag("Learning"), BadgeTone::Learning);
        assert_eq!(BadgeTone::for_tag("exploration"), BadgeTone::Exploration);
    }

    #[test]
    fn unknown_tags_fall_back_to_neutral() {
        assert_eq!(BadgeTone::for_tag("Gardening"), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_tag(""), BadgeTone::Neutral);
        assert_eq!(BadgeTone::for_tag("ünïcødé ✨"), BadgeTone::Neutral);
    }

    #[test]
    fn every_tone_has_distinct_text_color() {
        let tones = [
            BadgeTone::EcoAction,
            BadgeTone::Learning,
            BadgeTone::Exploration,
            BadgeTone::Neutral,
        ];
        for (i, a) in tones.iter().enumerate() {
            for b in &tones[i + 1..] {
                assert_ne!(a.colors().1, b.colors().1);
            }
        }
    }
}
