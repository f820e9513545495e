// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the form, the result
//! panel, and the correction workflow.
//!
//! The `App` struct wires together the submission workflow, the correction
//! workflow, and the cosmetic theme flag, and translates messages into side
//! effects like HTTP requests and dialogs. Workflow rules live in
//! [`update`] as plain transition functions so they stay auditable and
//! unit-testable.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{ApiClient, ClassificationResult, DEFAULT_BASE_URL};
use crate::ui::theming::ThemeMode;
use crate::ui::{correction, form};
use iced::{window, Element, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 560;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

const WINDOW_TITLE: &str = "SR Classifier Portal";

/// Root Iced application state.
pub struct App {
    form: form::State,
    result: Option<ClassificationResult>,
    correction: correction::State,
    theme_mode: ThemeMode,
    api: ApiClient,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_submitting", &self.form.is_submitting)
            .field("has_result", &self.result.is_some())
            .field("theme_mode", &self.theme_mode)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            form: form::State::default(),
            result: None,
            correction: correction::State::default(),
            theme_mode: ThemeMode::default(),
            api: ApiClient::new(DEFAULT_BASE_URL),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce).
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Initializes application state from CLI flags and the config file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) =
            config::load_with_override(flags.config_dir.map(std::path::PathBuf::from));
        if let Some(warning) = warning {
            eprintln!("{warning}");
        }

        let base_url = flags
            .endpoint
            .or(config.api.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let app = App {
            api: ApiClient::new(base_url),
            ..Self::default()
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::Light => Theme::Light,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            form: &mut self.form,
            result: &mut self.result,
            correction: &mut self.correction,
            theme_mode: &mut self.theme_mode,
            api: &self.api,
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Correction(correction_message) => {
                update::handle_correction_message(&mut ctx, correction_message)
            }
            Message::AttachmentsPicked(picked) => {
                update::handle_attachments_picked(&mut ctx, picked)
            }
            Message::Classified(outcome) => update::handle_classified(&mut ctx, outcome),
            Message::CorrectionResolved(_accepted) => {
                update::handle_correction_resolved(&mut ctx)
            }
            Message::ThemeToggled => update::handle_theme_toggled(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            form: &self.form,
            result: self.result.as_ref(),
            correction: &self.correction,
            theme_mode: self.theme_mode,
        })
    }
}
