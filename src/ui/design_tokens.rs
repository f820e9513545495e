// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, typography, radii, shadows.
//!
//! Tokens are designed to be consistent; keep ratios intact when adjusting
//! (e.g. `spacing::MD = spacing::XS * 2`).

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.094, 0.102, 0.106);
    pub const GRAY_800: Color = Color::from_rgb(0.137, 0.153, 0.165);
    pub const GRAY_600: Color = Color::from_rgb(0.267, 0.267, 0.267);
    pub const GRAY_500: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_400: Color = Color::from_rgb(0.533, 0.533, 0.533);
    pub const GRAY_300: Color = Color::from_rgb(0.6, 0.6, 0.6);
    pub const GRAY_200: Color = Color::from_rgb(0.8, 0.8, 0.8);
    pub const GRAY_100: Color = Color::from_rgb(0.867, 0.867, 0.867);
    pub const GRAY_50: Color = Color::from_rgb(0.961, 0.961, 0.961);

    // Brand colors (portal orange)
    pub const BRAND_400: Color = Color::from_rgb(0.969, 0.588, 0.239);
    pub const BRAND_500: Color = Color::from_rgb(0.937, 0.498, 0.102);
    pub const BRAND_600: Color = Color::from_rgb(0.843, 0.431, 0.071);

    // Semantic colors
    pub const ERROR_400: Color = Color::from_rgb(1.0, 0.42, 0.42);
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
// Typography Scale
// ============================================================================

pub mod typography {
    pub const XS: f32 = 12.0; // Footer, captions
    pub const SM: f32 = 13.0; // Secondary labels
    pub const MD: f32 = 15.0; // Body, inputs
    pub const LG: f32 = 16.0; // Prominent buttons
    pub const XL: f32 = 22.0; // Card heading
    pub const XXL: f32 = 30.0; // Page title
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 5.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 13.0;
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
        blur_radius: 8.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 18.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(typography::XS < typography::SM);
    assert!(typography::MD < typography::XL);

    assert!(radius::SM < radius::MD);
    assert!(radius::MD < radius::LG);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_colors_are_orange_leaning() {
        assert!(palette::BRAND_500.r > palette::BRAND_500.g);
        assert!(palette::BRAND_500.g > palette::BRAND_500.b);
        assert!(palette::BRAND_400.r > palette::BRAND_600.r);
    }

    #[test]
    fn grayscale_is_ordered_dark_to_light() {
        assert!(palette::GRAY_900.r < palette::GRAY_800.r);
        assert!(palette::GRAY_800.r < palette::GRAY_400.r);
        assert!(palette::GRAY_400.r < palette::GRAY_100.r);
    }
}
