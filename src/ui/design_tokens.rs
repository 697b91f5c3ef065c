// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Named visual constants for the feed, following the W3C Design Tokens standard.

## Organization

- **Palette**: Brand greens, text colors and badge tones
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use impact_feed::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::GRAY_600
};

let padding = spacing::LG; // 24px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318);
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388);
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859);
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965);

    // Brand colors (green scale)
    pub const SMART_LIGHT_GREEN: Color = Color::from_rgb(0.863, 0.961, 0.890);
    pub const SMART_GREEN: Color = Color::from_rgb(0.133, 0.698, 0.376);
    pub const SMART_DARK_GREEN: Color = Color::from_rgb(0.082, 0.502, 0.239);

    // Text
    pub const TEXT_DARK: Color = Color::from_rgb(0.122, 0.161, 0.216);
    pub const TEXT_LIGHT: Color = Color::from_rgb(0.420, 0.447, 0.502);

    // Page background
    pub const BG_LIGHT: Color = Color::from_rgb(0.969, 0.980, 0.973);

    // Badge tones
    pub const BLUE_100: Color = Color::from_rgb(0.859, 0.918, 0.996);
    pub const BLUE_700: Color = Color::from_rgb(0.114, 0.306, 0.847);
    pub const YELLOW_100: Color = Color::from_rgb(0.996, 0.976, 0.765);
    pub const YELLOW_700: Color = Color::from_rgb(0.631, 0.384, 0.027);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const LIKE_RED: Color = Color::from_rgb(0.937, 0.267, 0.267);
    pub const COMMENT_BLUE: Color = Color::from_rgb(0.231, 0.510, 0.965);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    /// Tinted badge backgrounds
    pub const TINT: f32 = 0.2;
    pub const DISABLED: f32 = 0.5;
    /// Modal backdrop
    pub const BACKDROP: f32 = 0.75;
    pub const OPAQUE: f32 = 1.0;
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
    /// Diameter of the author avatar bubble.
    pub const AVATAR: f32 = 40.0;

    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Dialog title
    pub const TITLE_MD: f32 = 20.0;

    /// Author names, avatar glyphs
    pub const BODY_LG: f32 = 16.0;

    pub const BODY: f32 = 14.0;

    /// Badges, timestamps, role labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 16.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.12);

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: SHADOW_COLOR,
        offset: Vector { x: 0.0, y: 10.0 },
        blur_radius: 20.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
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
    fn brand_greens_are_green_dominant() {
        for color in [palette::SMART_GREEN, palette::SMART_DARK_GREEN] {
            assert!(color.g > color.r && color.g > color.b);
        }
    }
}
