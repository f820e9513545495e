// SPDX-License-Identifier: MPL-2.0
//! Submission form component.
//!
//! Owns the four input fields and the busy flag of the submission workflow.
//! Required-field validation happens at the control level: the Classify
//! button is only wired while `name`, `employeeId`, and `query` are
//! non-blank and no request is in flight, so an invalid submit action is
//! unreachable rather than rejected.

use crate::api::SubmissionInput;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, text, text_input, Column, Row};
use iced::{Element, Length};
use std::path::PathBuf;

/// Form field state plus the submission workflow's busy/error markers.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub employee_id: String,
    pub query: String,
    /// Attachment paths in selection order; a new pick replaces the list.
    pub attachments: Vec<PathBuf>,
    /// True from submit until the classification request resolves.
    pub is_submitting: bool,
    /// The single collapsed failure message, when the last attempt failed.
    pub error: Option<String>,
}

impl State {
    /// Whether the three required text fields are non-blank.
    #[must_use]
    pub fn required_fields_filled(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.employee_id.trim().is_empty()
            && !self.query.trim().is_empty()
    }

    /// Whether the submit control is currently reachable.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.required_fields_filled() && !self.is_submitting
    }

    /// Snapshot of the current fields for one classification request.
    #[must_use]
    pub fn submission_input(&self) -> SubmissionInput {
        SubmissionInput {
            name: self.name.clone(),
            employee_id: self.employee_id.clone(),
            query: self.query.clone(),
            files: self.attachments.clone(),
        }
    }
}

/// Messages emitted by the form controls.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    EmployeeIdChanged(String),
    QueryChanged(String),
    PickAttachmentsPressed,
    AttachmentsCleared,
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the attachment picker dialog.
    PickAttachments,
    /// Start the classification request for the current fields.
    Submit,
}

/// Process a form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(value) => {
            state.name = value;
            Event::None
        }
        Message::EmployeeIdChanged(value) => {
            state.employee_id = value;
            Event::None
        }
        Message::QueryChanged(value) => {
            state.query = value;
            Event::None
        }
        Message::PickAttachmentsPressed => {
            if state.is_submitting {
                Event::None
            } else {
                Event::PickAttachments
            }
        }
        Message::AttachmentsCleared => {
            if !state.is_submitting {
                state.attachments.clear();
            }
            Event::None
        }
        Message::SubmitPressed => {
            if state.can_submit() {
                Event::Submit
            } else {
                Event::None
            }
        }
    }
}

/// Render the submission form.
pub fn view<'a>(state: &'a State, scheme: &ColorScheme) -> Element<'a, Message> {
    let field_label = |label: &'a str| text(label).size(typography::MD);

    let name_input = text_input("Name", &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::XS)
        .size(typography::MD)
        .width(Length::Fill);

    let employee_id_input = text_input("Employee ID", &state.employee_id)
        .on_input(Message::EmployeeIdChanged)
        .padding(spacing::XS)
        .size(typography::MD)
        .width(Length::Fill);

    let query_input = text_input("Enter SR data here...", &state.query)
        .on_input(Message::QueryChanged)
        .padding(spacing::XS)
        .size(typography::MD)
        .width(Length::Fill);

    let mut pick_button = button(text("Choose Files...").size(typography::SM))
        .style(styles::button::secondary)
        .padding([6, 12]);
    if !state.is_submitting {
        pick_button = pick_button.on_press(Message::PickAttachmentsPressed);
    }

    let mut attachments_row = Row::new()
        .spacing(spacing::XS)
        .align_y(iced::alignment::Vertical::Center)
        .push(pick_button);

    if state.attachments.is_empty() {
        attachments_row = attachments_row.push(
            text("No files selected")
                .size(typography::SM)
                .color(scheme.text_secondary),
        );
    } else {
        let names: Vec<String> = state
            .attachments
            .iter()
            .map(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("attachment")
                    .to_string()
            })
            .collect();
        attachments_row = attachments_row.push(
            text(names.join(", "))
                .size(typography::SM)
                .color(scheme.text_secondary),
        );

        let mut clear_button = button(text("Clear").size(typography::SM))
            .style(styles::button::secondary)
            .padding([4, 8]);
        if !state.is_submitting {
            clear_button = clear_button.on_press(Message::AttachmentsCleared);
        }
        attachments_row = attachments_row.push(clear_button);
    }

    let submit_label = if state.is_submitting {
        "Classifying..."
    } else {
        "Classify"
    };
    let mut submit_button = button(text(submit_label).size(typography::LG))
        .style(styles::button::primary)
        .padding(spacing::SM)
        .width(Length::Fill);
    if state.can_submit() {
        submit_button = submit_button.on_press(Message::SubmitPressed);
    }

    let mut form = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(field_label("Name"))
        .push(name_input)
        .push(field_label("Employee ID"))
        .push(employee_id_input)
        .push(field_label("SR Data"))
        .push(query_input)
        .push(field_label("Upload Files (PDFs/Images)"))
        .push(attachments_row)
        .push(submit_button);

    if let Some(error) = &state.error {
        form = form.push(
            text(error.as_str())
                .size(typography::MD)
                .color(palette::ERROR_400),
        );
    }

    form.into()
}
