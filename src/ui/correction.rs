// SPDX-License-Identifier: MPL-2.0
//! Correction workflow: a reviewer disputes the predicted labels and files
//! corrected ones.
//!
//! State machine: `Closed -> AwaitingChoice -> {Closed, Editing} -> Closed`.
//! The workflow is only reachable while a classification result is on
//! screen; a fresh result re-enters `AwaitingChoice` via [`open_for_result`]
//! as an explicit transition rule. Both corrected labels must be chosen by
//! hand before confirm becomes reachable; neither pre-selects the model's
//! prediction.

use crate::api::labels::{Priority, Team};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, pick_list, text, Column};
use iced::{Element, Length};

/// Correction workflow state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum State {
    /// No correction in progress; only the discrepancy question (if a
    /// result is visible) remains interactive.
    #[default]
    Closed,
    /// A result is on screen and the reviewer has not yet answered the
    /// discrepancy question.
    AwaitingChoice,
    /// The reviewer answered "Yes" and is choosing corrected labels.
    Editing(EditState),
}

/// Selections inside the correction editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditState {
    pub corrected_priority: Option<Priority>,
    pub corrected_team: Option<Team>,
    /// True while the correction request is outstanding; unwires every
    /// control so the request cannot be re-entered.
    pub sending: bool,
}

impl State {
    /// Whether a correction request is currently outstanding.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        matches!(self, State::Editing(edit) if edit.sending)
    }
}

/// Messages emitted by the correction controls.
#[derive(Debug, Clone)]
pub enum Message {
    /// "Yes" on the discrepancy question.
    OpenEditor,
    /// "No" on the discrepancy question.
    Dismiss,
    PrioritySelected(Priority),
    TeamSelected(Team),
    ConfirmPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Both corrected labels are chosen; send the correction.
    Submit { priority: Priority, team: Team },
}

/// Process a correction message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::OpenEditor => {
            if !state.is_sending() {
                *state = State::Editing(EditState::default());
            }
            Event::None
        }
        Message::Dismiss => {
            if !state.is_sending() {
                *state = State::Closed;
            }
            Event::None
        }
        Message::PrioritySelected(priority) => {
            if let State::Editing(edit) = state {
                if !edit.sending {
                    edit.corrected_priority = Some(priority);
                }
            }
            Event::None
        }
        Message::TeamSelected(team) => {
            if let State::Editing(edit) = state {
                if !edit.sending {
                    edit.corrected_team = Some(team);
                }
            }
            Event::None
        }
        Message::ConfirmPressed => {
            if let State::Editing(edit) = state {
                if !edit.sending {
                    if let (Some(priority), Some(team)) =
                        (edit.corrected_priority, edit.corrected_team)
                    {
                        return Event::Submit { priority, team };
                    }
                }
            }
            Event::None
        }
    }
}

/// A fresh classification result re-opens the discrepancy question and
/// invalidates any in-progress correction.
pub fn open_for_result(state: &mut State) {
    *state = State::AwaitingChoice;
}

/// Marks the editor as sending once its request has been issued.
pub fn mark_sending(state: &mut State) {
    if let State::Editing(edit) = state {
        edit.sending = true;
    }
}

/// Render the corrected-label editor.
pub fn view(edit: &EditState) -> Element<'_, Message> {
    let priority_picker = pick_list(
        Priority::ALL,
        edit.corrected_priority,
        Message::PrioritySelected,
    )
    .placeholder("Select corrected priority")
    .padding(spacing::XS)
    .width(Length::Fill);

    let team_picker = pick_list(Team::ALL, edit.corrected_team, Message::TeamSelected)
        .placeholder("Select corrected team")
        .padding(spacing::XS)
        .width(Length::Fill);

    let ready = edit.corrected_priority.is_some() && edit.corrected_team.is_some() && !edit.sending;
    let confirm_label = if edit.sending {
        "Submitting..."
    } else {
        "Submit Correction"
    };
    let mut confirm_button = button(text(confirm_label).size(typography::MD))
        .style(styles::button::primary)
        .padding([7, 18]);
    if ready {
        confirm_button = confirm_button.on_press(Message::ConfirmPressed);
    }

    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(text("Corrected Priority").size(typography::MD))
        .push(priority_picker)
        .push(text("Corrected Team").size(typography::MD))
        .push(team_picker)
        .push(confirm_button)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(priority: Option<Priority>, team: Option<Team>) -> State {
        State::Editing(EditState {
            corrected_priority: priority,
            corrected_team: team,
            sending: false,
        })
    }

    #[test]
    fn yes_opens_the_editor_with_empty_selections() {
        let mut state = State::AwaitingChoice;
        let _ = update(&mut state, Message::OpenEditor);
        assert_eq!(state, editing(None, None));
    }

    #[test]
    fn no_closes_the_workflow() {
        let mut state = State::AwaitingChoice;
        let _ = update(&mut state, Message::Dismiss);
        assert_eq!(state, State::Closed);
    }

    #[test]
    fn editor_can_reopen_after_no() {
        let mut state = State::Closed;
        let _ = update(&mut state, Message::OpenEditor);
        assert!(matches!(state, State::Editing(_)));
    }

    #[test]
    fn confirm_requires_both_selections() {
        let mut state = editing(None, None);
        assert!(matches!(
            update(&mut state, Message::ConfirmPressed),
            Event::None
        ));

        let mut state = editing(Some(Priority::Awareness), None);
        assert!(matches!(
            update(&mut state, Message::ConfirmPressed),
            Event::None
        ));

        let mut state = editing(None, Some(Team::Tech));
        assert!(matches!(
            update(&mut state, Message::ConfirmPressed),
            Event::None
        ));
    }

    #[test]
    fn confirm_with_both_selections_submits_them() {
        let mut state = editing(Some(Priority::LowTechnical), Some(Team::Unassigned));
        match update(&mut state, Message::ConfirmPressed) {
            Event::Submit { priority, team } => {
                assert_eq!(priority, Priority::LowTechnical);
                assert_eq!(team, Team::Unassigned);
            }
            Event::None => panic!("expected Submit event"),
        }
    }

    #[test]
    fn selections_update_independently() {
        let mut state = editing(None, None);
        let _ = update(&mut state, Message::PrioritySelected(Priority::Awareness));
        assert_eq!(state, editing(Some(Priority::Awareness), None));

        let _ = update(&mut state, Message::TeamSelected(Team::Policy));
        assert_eq!(state, editing(Some(Priority::Awareness), Some(Team::Policy)));
    }

    #[test]
    fn selection_messages_ignored_outside_editor() {
        let mut state = State::AwaitingChoice;
        let _ = update(&mut state, Message::PrioritySelected(Priority::Awareness));
        assert_eq!(state, State::AwaitingChoice);
    }

    #[test]
    fn sending_guard_blocks_every_control() {
        let mut state = State::Editing(EditState {
            corrected_priority: Some(Priority::Awareness),
            corrected_team: Some(Team::Tech),
            sending: true,
        });

        assert!(matches!(
            update(&mut state, Message::ConfirmPressed),
            Event::None
        ));
        let _ = update(&mut state, Message::Dismiss);
        assert!(state.is_sending(), "dismiss must not interrupt a send");
        let _ = update(&mut state, Message::OpenEditor);
        assert!(state.is_sending(), "reopen must not interrupt a send");
        let _ = update(&mut state, Message::PrioritySelected(Priority::LowTechnical));
        match &state {
            State::Editing(edit) => {
                assert_eq!(edit.corrected_priority, Some(Priority::Awareness));
            }
            other => panic!("expected Editing, got {:?}", other),
        }
    }

    #[test]
    fn fresh_result_reopens_the_question() {
        let mut state = editing(Some(Priority::Awareness), Some(Team::Tech));
        open_for_result(&mut state);
        assert_eq!(state, State::AwaitingChoice);
    }

    #[test]
    fn mark_sending_only_affects_the_editor() {
        let mut state = State::Closed;
        mark_sending(&mut state);
        assert_eq!(state, State::Closed);

        let mut state = editing(Some(Priority::Awareness), Some(Team::Tech));
        mark_sending(&mut state);
        assert!(state.is_sending());
    }
}
