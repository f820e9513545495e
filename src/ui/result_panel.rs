// SPDX-License-Identifier: MPL-2.0
//! Result card: the classified labels plus the discrepancy question that
//! gates the correction workflow.

use crate::api::ClassificationResult;
use crate::ui::correction;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

/// Note shown in place of the team line for awareness-category results.
pub const AWARENESS_NOTE: &str = "Team assignment skipped (awareness query)";

/// Whether the assigned-team line is rendered for this result.
#[must_use]
pub fn shows_team_line(result: &ClassificationResult) -> bool {
    !result.is_awareness()
}

/// Render the result card. The hosted controls all belong to the
/// correction workflow, so the card emits [`correction::Message`].
pub fn view<'a>(
    result: &'a ClassificationResult,
    state: &'a correction::State,
    scheme: &ColorScheme,
) -> Element<'a, correction::Message> {
    let labeled_line = |label: &'static str, value: &'a str| {
        Row::new()
            .spacing(spacing::XXS)
            .push(text(label).size(typography::MD))
            .push(text(value).size(typography::MD))
    };

    let mut card = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(labeled_line("Query:", &result.query))
        .push(labeled_line("Predicted Priority:", &result.priority));

    if shows_team_line(result) {
        card = card.push(labeled_line("Assigned Team:", result.team_label()));
    } else {
        card = card.push(
            text(AWARENESS_NOTE)
                .size(typography::MD)
                .color(scheme.text_secondary),
        );
    }

    card = card.push(
        text("Is there any discrepancy in the results?")
            .size(typography::MD)
            .color(scheme.text_primary),
    );

    let sending = state.is_sending();
    let mut yes_button = button(text("Yes").size(typography::MD))
        .style(styles::button::primary)
        .padding([6, 18]);
    let mut no_button = button(text("No").size(typography::MD))
        .style(styles::button::secondary)
        .padding([6, 18]);
    if !sending {
        yes_button = yes_button.on_press(correction::Message::OpenEditor);
        no_button = no_button.on_press(correction::Message::Dismiss);
    }

    card = card.push(
        Row::new()
            .spacing(spacing::XS)
            .push(yes_button)
            .push(no_button),
    );

    if let correction::State::Editing(edit) = state {
        card = card.push(correction::view(edit));
    }

    container(card)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::result(scheme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(priority: &str, team: Option<&str>) -> ClassificationResult {
        ClassificationResult {
            query: "q".to_string(),
            priority: priority.to_string(),
            team: team.map(str::to_string),
        }
    }

    #[test]
    fn team_line_hidden_for_awareness_results() {
        assert!(!shows_team_line(&result("AWARENESS", None)));
        assert!(!shows_team_line(&result("awareness", None)));
    }

    #[test]
    fn team_line_shown_for_routed_results() {
        assert!(shows_team_line(&result("LOW PRIORITY TECHNICAL", Some("TECH"))));
        // An empty team on a routed result is rendered verbatim, not hidden.
        assert!(shows_team_line(&result("LOW PRIORITY TECHNICAL", None)));
    }

    #[test]
    fn view_renders_for_every_correction_state() {
        let classified = result("LOW PRIORITY TECHNICAL", Some("TECH"));
        let scheme = ColorScheme::dark();

        let _ = view(&classified, &correction::State::Closed, &scheme);
        let _ = view(&classified, &correction::State::AwaitingChoice, &scheme);
        let _ = view(
            &classified,
            &correction::State::Editing(correction::EditState::default()),
            &scheme,
        );
    }
}
