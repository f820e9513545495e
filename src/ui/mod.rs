// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! module owns a `State`, a `Message` enum, and an `update` reducer that
//! reports an `Event` back to the root application.
//!
//! - [`form`] - Submission form (fields, attachments, busy flag)
//! - [`correction`] - Correction workflow state machine and editor
//! - [`result_panel`] - Classification result card
//! - [`theming`] - Light/Dark mode and color schemes
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (buttons, containers)

pub mod correction;
pub mod design_tokens;
pub mod form;
pub mod result_panel;
pub mod styles;
pub mod theming;
