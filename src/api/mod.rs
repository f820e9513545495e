// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the classification service.
//!
//! Two endpoints are consumed: `POST /classify` takes the submission as
//! `multipart/form-data` and returns the predicted labels as JSON, and
//! `POST /correction` takes a JSON payload with the reviewer's corrected
//! labels. Neither call is retried; a failed request surfaces once and the
//! user decides whether to resubmit.

pub mod labels;

use crate::error::{Error, Result};
use labels::{Priority, Team};
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Multipart field name shared by every attached file.
pub const FILES_FIELD: &str = "files";

/// Base address used when neither the CLI nor the config file provides one.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

const USER_AGENT: &str = concat!("SrPortal/", env!("CARGO_PKG_VERSION"));

/// One submission of the form, captured at the moment the user pressed
/// Classify. Attachment paths keep the order they were selected in; that
/// order is preserved through to the multipart parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionInput {
    pub name: String,
    pub employee_id: String,
    pub query: String,
    pub files: Vec<PathBuf>,
}

impl SubmissionInput {
    /// Assembles the multipart form: the three text fields followed by one
    /// `files` part per attachment, in selection order.
    fn into_form(self) -> Result<Form> {
        let mut form = Form::new()
            .text("name", self.name)
            .text("employeeId", self.employee_id)
            .text("query", self.query);

        for path in &self.files {
            let bytes = std::fs::read(path)?;
            let file_name = path
                .file_name()
                .and_then(|name| name.to_str())
                .unwrap_or("attachment")
                .to_string();
            form = form.part(FILES_FIELD, Part::bytes(bytes).file_name(file_name));
        }

        Ok(form)
    }
}

/// Parsed body of a successful `/classify` response.
///
/// `team` is absent (or JSON `null`) when the predicted priority denotes the
/// awareness category; both decode to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassificationResult {
    pub query: String,
    pub priority: String,
    #[serde(default)]
    pub team: Option<String>,
}

impl ClassificationResult {
    /// Whether the predicted priority denotes the awareness category, in
    /// which case no team line is shown.
    #[must_use]
    pub fn is_awareness(&self) -> bool {
        labels::is_awareness_label(&self.priority)
    }

    /// Team label for display and correction payloads; empty when the
    /// server assigned none.
    #[must_use]
    pub fn team_label(&self) -> &str {
        self.team.as_deref().unwrap_or("")
    }
}

/// JSON body for `POST /correction`.
///
/// Only constructible from an existing [`ClassificationResult`], so the
/// predicted labels always reference what the server actually returned for
/// the query being corrected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionReport {
    pub name: String,
    pub employee_id: String,
    pub query: String,
    pub predicted_priority: String,
    pub predicted_team: String,
    pub corrected_priority: String,
    pub corrected_team: String,
}

impl CorrectionReport {
    pub fn new(
        name: &str,
        employee_id: &str,
        result: &ClassificationResult,
        corrected_priority: Priority,
        corrected_team: Team,
    ) -> Self {
        Self {
            name: name.to_owned(),
            employee_id: employee_id.to_owned(),
            query: result.query.clone(),
            predicted_priority: result.priority.clone(),
            predicted_team: result.team_label().to_owned(),
            corrected_priority: corrected_priority.as_str().to_owned(),
            corrected_team: corrected_team.as_str().to_owned(),
        }
    }
}

/// Thin handle around the service base address. The underlying client is
/// built per request, so a TLS or builder failure surfaces through the same
/// error path as any other transport problem.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn client() -> Result<reqwest::Client> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(client)
    }

    /// Submits the form to `/classify` and decodes the predicted labels.
    ///
    /// # Errors
    ///
    /// Returns an error if an attachment cannot be read, the request fails,
    /// the server answers with a non-success status, or the body is not the
    /// expected JSON shape.
    pub async fn classify(&self, input: SubmissionInput) -> Result<ClassificationResult> {
        let form = input.into_form()?;
        let response = Self::client()?
            .post(self.endpoint("/classify"))
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Http(format!("HTTP status: {}", response.status())));
        }

        let result = response.json::<ClassificationResult>().await?;
        Ok(result)
    }

    /// Posts a reviewer correction to `/correction`.
    ///
    /// The response body is not inspected; only the status matters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the server answers with a
    /// non-success status.
    pub async fn submit_correction(&self, report: &CorrectionReport) -> Result<()> {
        let response = Self::client()?
            .post(self.endpoint("/correction"))
            .json(report)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Http(format!("HTTP status: {}", response.status())));
        }

        Ok(())
    }
}
