// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Full-window page background.
pub fn page(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.background;
    let text_color = scheme.text_primary;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text_color),
        ..container::Style::default()
    }
}

/// Elevated card hosting the submission form.
pub fn card(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.card_background;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::MD,
        ..container::Style::default()
    }
}

/// Inset panel showing a classification result.
pub fn result(scheme: &ColorScheme) -> impl Fn(&Theme) -> container::Style {
    let background = scheme.result_background;
    let border_color = scheme.border;
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..container::Style::default()
    }
}
