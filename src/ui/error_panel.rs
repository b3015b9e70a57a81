// SPDX-License-Identifier: MPL-2.0
//! Inline error panel shown under the form when a submission fails.
//!
//! Displays a localized title and message, an optional retry action, and
//! collapsible technical details (the raw error text).

use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Builder for the error panel.
#[derive(Debug, Clone)]
pub struct ErrorPanel<Message> {
    title: String,
    message: String,
    details: Option<String>,
    show_details: bool,
    retry_label: Option<String>,
    retry_message: Option<Message>,
    toggle_details_message: Option<Message>,
    show_details_label: String,
    hide_details_label: String,
}

impl<Message: Clone + 'static> ErrorPanel<Message> {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            details: None,
            show_details: false,
            retry_label: None,
            retry_message: None,
            toggle_details_message: None,
            show_details_label: "Show details".to_string(),
            hide_details_label: "Hide details".to_string(),
        }
    }

    /// Raw error text shown behind the details toggle.
    pub fn details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn show_details(mut self, show: bool) -> Self {
        self.show_details = show;
        self
    }

    pub fn retry(mut self, label: impl Into<String>, message: Message) -> Self {
        self.retry_label = Some(label.into());
        self.retry_message = Some(message);
        self
    }

    pub fn on_toggle_details(mut self, message: Message) -> Self {
        self.toggle_details_message = Some(message);
        self
    }

    pub fn details_labels(mut self, show: impl Into<String>, hide: impl Into<String>) -> Self {
        self.show_details_label = show.into();
        self.hide_details_label = hide.into();
        self
    }

    pub fn view(self) -> Element<'static, Message> {
        let accent = palette::ERROR_500;

        let marker = text("!")
            .size(typography::HEADING)
            .color(accent)
            .align_x(alignment::Horizontal::Center);

        let mut body = Column::new()
            .spacing(spacing::XS)
            .push(text(self.title).size(typography::BODY).color(accent))
            .push(text(self.message).size(typography::LABEL));

        let mut actions = Row::new().spacing(spacing::SM);
        if let (Some(label), Some(message)) = (self.retry_label, self.retry_message) {
            actions = actions.push(
                button(text(label).size(typography::LABEL))
                    .on_press(message)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::primary),
            );
        }
        if let (Some(_), Some(toggle)) = (self.details.as_ref(), self.toggle_details_message) {
            let label = if self.show_details {
                self.hide_details_label.clone()
            } else {
                self.show_details_label.clone()
            };
            actions = actions.push(
                button(text(label).size(typography::LABEL))
                    .on_press(toggle)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::subtle),
            );
        }
        body = body.push(actions);

        if self.show_details {
            if let Some(details) = self.details {
                body = body.push(
                    container(text(details).size(typography::CAPTION))
                        .padding(spacing::SM)
                        .width(Length::Fill)
                        .style(styles::code_block),
                );
            }
        }

        let row = Row::new()
            .spacing(spacing::SM)
            .push(container(marker).padding([0.0, spacing::XS]))
            .push(body.width(Length::Fill));

        container(row)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(move |theme: &Theme| panel_style(theme, accent))
            .into()
    }
}

fn panel_style(theme: &Theme, accent: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        border: Border {
            color: accent,
            width: 1.0,
            radius: radius::MD.into(),
        },
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}
