// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::ClassificationResult;
use crate::error::Error;
use crate::ui::{correction, form};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Correction(correction::Message),
    /// Result from the attachment picker dialog (`None` = cancelled).
    AttachmentsPicked(Option<Vec<PathBuf>>),
    /// Completion of the classification request.
    Classified(Result<ClassificationResult, Error>),
    /// The correction request finished and its acknowledgment dialog was
    /// dismissed. The flag records whether the server accepted it.
    CorrectionResolved(bool),
    /// The light/dark toggle was pressed.
    ThemeToggled,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional classification service address, overriding the config file.
    pub endpoint: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `SR_PORTAL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
