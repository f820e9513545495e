// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! The submission and correction workflows live here as plain transition
//! functions over [`UpdateContext`], so every rule the user can observe is
//! unit-testable without a window.

use super::Message;
use crate::api::labels::{Priority, Team};
use crate::api::{ApiClient, ClassificationResult, CorrectionReport};
use crate::error::Error;
use crate::ui::theming::ThemeMode;
use crate::ui::{correction, form};
use iced::Task;
use std::path::PathBuf;

/// The single collapsed failure message for the classification workflow.
/// Transport errors, bad statuses, and unparsable bodies all read the same.
pub const CLASSIFY_FAILED_MESSAGE: &str = "Failed to classify SR.";

/// Extensions accepted by the attachment picker (PDFs and images).
pub const ATTACHMENT_EXTENSIONS: &[&str] =
    &["pdf", "png", "jpg", "jpeg", "gif", "bmp", "webp", "tiff"];

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub form: &'a mut form::State,
    pub result: &'a mut Option<ClassificationResult>,
    pub correction: &'a mut correction::State,
    pub theme_mode: &'a mut ThemeMode,
    pub api: &'a ApiClient,
}

/// Handles messages from the submission form.
pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    match form::update(ctx.form, message) {
        form::Event::None => Task::none(),
        form::Event::PickAttachments => pick_attachments_task(),
        form::Event::Submit => begin_submission(ctx),
    }
}

/// Enters the `Submitting` state: any previous outcome is dropped before
/// the request goes out, and a stale result can no longer host a
/// correction.
fn begin_submission(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.form.error = None;
    ctx.form.is_submitting = true;
    *ctx.result = None;
    *ctx.correction = correction::State::Closed;

    let api = ctx.api.clone();
    let input = ctx.form.submission_input();
    Task::perform(
        async move { api.classify(input).await },
        Message::Classified,
    )
}

/// Handles completion of the classification request.
pub fn handle_classified(
    ctx: &mut UpdateContext<'_>,
    outcome: Result<ClassificationResult, Error>,
) -> Task<Message> {
    ctx.form.is_submitting = false;
    match outcome {
        Ok(result) => {
            *ctx.result = Some(result);
            // Explicit transition rule: a fresh result reopens the
            // discrepancy question and voids any in-progress correction.
            correction::open_for_result(ctx.correction);
        }
        Err(_) => {
            *ctx.result = None;
            ctx.form.error = Some(CLASSIFY_FAILED_MESSAGE.to_string());
        }
    }
    Task::none()
}

/// Handles messages from the correction workflow.
pub fn handle_correction_message(
    ctx: &mut UpdateContext<'_>,
    message: correction::Message,
) -> Task<Message> {
    match correction::update(ctx.correction, message) {
        correction::Event::None => Task::none(),
        correction::Event::Submit { priority, team } => send_correction(ctx, priority, team),
    }
}

/// Builds the correction payload for the current result.
///
/// Returns `None` when no result is on screen; the correction workflow is
/// unreachable in that case, so this is a guard rather than a user-visible
/// path.
pub fn correction_report(
    form: &form::State,
    result: Option<&ClassificationResult>,
    corrected_priority: Priority,
    corrected_team: Team,
) -> Option<CorrectionReport> {
    result.map(|result| {
        CorrectionReport::new(
            &form.name,
            &form.employee_id,
            result,
            corrected_priority,
            corrected_team,
        )
    })
}

fn send_correction(
    ctx: &mut UpdateContext<'_>,
    corrected_priority: Priority,
    corrected_team: Team,
) -> Task<Message> {
    let Some(report) = correction_report(
        ctx.form,
        ctx.result.as_ref(),
        corrected_priority,
        corrected_team,
    ) else {
        *ctx.correction = correction::State::Closed;
        return Task::none();
    };

    correction::mark_sending(ctx.correction);

    let api = ctx.api.clone();
    Task::perform(
        async move {
            let accepted = api.submit_correction(&report).await.is_ok();
            acknowledge_correction(accepted).await;
            accepted
        },
        Message::CorrectionResolved,
    )
}

/// Blocking acknowledgment after a correction attempt. Success and failure
/// both end here; neither outcome alters the displayed result.
async fn acknowledge_correction(accepted: bool) {
    let (level, title, description) = if accepted {
        (
            rfd::MessageLevel::Info,
            "Correction submitted",
            "Thank you for your feedback!",
        )
    } else {
        (
            rfd::MessageLevel::Error,
            "Correction failed",
            "Failed to submit correction.",
        )
    };

    rfd::AsyncMessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::Ok)
        .show()
        .await;
}

/// Handles dismissal of the correction acknowledgment: the workflow closes
/// and its selections are discarded whatever the outcome was.
pub fn handle_correction_resolved(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.correction = correction::State::Closed;
    Task::none()
}

/// Opens the attachment picker.
pub fn pick_attachments_task() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Upload Files")
                .add_filter("PDFs and images", ATTACHMENT_EXTENSIONS)
                .pick_files()
                .await
                .map(|handles| {
                    handles
                        .into_iter()
                        .map(|handle| handle.path().to_path_buf())
                        .collect()
                })
        },
        Message::AttachmentsPicked,
    )
}

/// Handles the result of the attachment picker. A new pick replaces the
/// previous selection; cancelling keeps it.
pub fn handle_attachments_picked(
    ctx: &mut UpdateContext<'_>,
    picked: Option<Vec<PathBuf>>,
) -> Task<Message> {
    if let Some(paths) = picked {
        ctx.form.attachments = paths;
    }
    Task::none()
}

/// Flips the light/dark flag. Nothing else in the context is touched.
pub fn handle_theme_toggled(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    Task::none()
}
