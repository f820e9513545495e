// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the page from the header, the submission card, the result
//! panel (when a result is on screen), and the footer.

use super::Message;
use crate::api::ClassificationResult;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::theming::{ColorScheme, ThemeMode};
use crate::ui::{correction, form, result_panel, styles};
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{Element, Length};

const PORTAL_TITLE: &str = "SR Classifier Portal";
const PORTAL_BLURB: &str = "Submit Service Request (SR) data along with your name, employee ID, \
and supporting files (PDFs or images). The system classifies the SR's priority and assigns it \
to the appropriate team. All submissions are logged for further review and action.";
const FOOTER_LINE: &str = "\u{a9} 2025 SR Classifier Portal. Internal use only.";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub form: &'a form::State,
    pub result: Option<&'a ClassificationResult>,
    pub correction: &'a correction::State,
    pub theme_mode: ThemeMode,
}

/// Renders the whole page from application state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = ColorScheme::for_mode(ctx.theme_mode);

    let theme_button = button(text(ctx.theme_mode.toggle_label()).size(typography::SM))
        .style(styles::button::secondary)
        .padding([6, 12])
        .on_press(Message::ThemeToggled);
    let top_bar = Row::new()
        .width(Length::Fill)
        .push(Space::new().width(Length::Fill))
        .push(theme_button);

    let header = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(
            text(PORTAL_TITLE)
                .size(typography::XXL)
                .color(palette::BRAND_500),
        )
        .push(
            text(PORTAL_BLURB)
                .size(typography::MD)
                .color(scheme.text_secondary),
        );

    let mut card_content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(
            text("SR Team & Priority Classifier")
                .size(typography::XL)
                .color(palette::BRAND_500),
        )
        .push(form::view(ctx.form, &scheme).map(Message::Form));

    if let Some(result) = ctx.result {
        let panel = result_panel::view(result, ctx.correction, &scheme).map(Message::Correction);
        card_content = card_content.push(panel);
    }

    let card = container(card_content)
        .padding(spacing::LG)
        .width(Length::Fill)
        .style(styles::container::card(&scheme));

    let footer = text(FOOTER_LINE)
        .size(typography::XS)
        .color(scheme.footer);

    let page = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .padding(spacing::LG)
        .push(top_bar)
        .push(header)
        .push(card)
        .push(footer);

    container(scrollable(page))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page(&scheme))
        .into()
}
