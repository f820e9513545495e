// SPDX-License-Identifier: MPL-2.0
//! Light/Dark theme mode and the color pairs each mode renders with.
//!
//! The toggle is purely cosmetic session state: it defaults to dark, never
//! persists, and has no influence on the submission or correction workflows.

use crate::ui::design_tokens::palette;
use iced::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The opposite mode; pressing the toggle swaps to this.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    /// Label for the toggle button: names the mode it switches to.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "Light",
            ThemeMode::Light => "Dark",
        }
    }
}

/// Color palette for a theme mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub background: Color,
    pub card_background: Color,
    pub result_background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,
    pub footer: Color,
    pub error: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn dark() -> Self {
        Self {
            background: palette::GRAY_900,
            card_background: palette::GRAY_800,
            result_background: palette::GRAY_900,
            text_primary: Color::from_rgb(0.961, 0.965, 0.98),
            text_secondary: palette::GRAY_200,
            border: palette::GRAY_600,
            footer: palette::GRAY_400,
            error: palette::ERROR_400,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        Self {
            background: palette::GRAY_50,
            card_background: palette::WHITE,
            result_background: palette::WHITE,
            text_primary: Color::from_rgb(0.2, 0.2, 0.2),
            text_secondary: palette::GRAY_500,
            border: palette::GRAY_100,
            footer: palette::GRAY_300,
            error: palette::ERROR_400,
        }
    }

    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn toggle_swaps_modes_both_ways() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_label_names_the_target_mode() {
        assert_eq!(ThemeMode::Dark.toggle_label(), "Light");
        assert_eq!(ThemeMode::Light.toggle_label(), "Dark");
    }

    #[test]
    fn dark_scheme_has_dark_surfaces() {
        let scheme = ColorScheme::dark();
        assert!(scheme.background.r < 0.2);
        assert!(scheme.text_primary.r > 0.9);
    }

    #[test]
    fn light_scheme_has_light_surfaces() {
        let scheme = ColorScheme::light();
        assert!(scheme.background.r > 0.9);
        assert!(scheme.text_primary.r < 0.3);
    }
}
