// SPDX-License-Identifier: MPL-2.0
//! Screen rendering: the form screen with its preview panel, and the help
//! screen dispatch. Reusable widgets live under `crate::ui`.

use super::{App, Message, Screen};
use crate::form;
use crate::preview::Preview;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::error_panel::ErrorPanel;
use crate::ui::{help, navbar, styles};
use iced::widget::{
    button, container, scrollable, stack, text, text_editor, text_input, Column, Row,
};
use iced::{alignment, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let screen: Element<'_, Message> = match self.screen {
            Screen::Form => self.form_screen(),
            Screen::Help => help::view(&self.i18n, &self.help_state).map(Message::Help),
        };

        let bar = navbar::view(
            &self.i18n,
            self.backend,
            self.screen == Screen::Help,
            Message::SwitchScreen(Screen::Form),
            Message::SwitchScreen(Screen::Help),
        );

        let page: Element<'_, Message> = Column::new().push(bar).push(screen).into();

        if self.notifications.has_notifications() {
            stack(vec![
                page,
                self.notifications.view(&self.i18n).map(Message::Notification),
            ])
            .into()
        } else {
            page
        }
    }

    fn form_screen(&self) -> Element<'_, Message> {
        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .max_width(820)
            .push(self.styles_panel());

        for (index, (key, entry)) in self.form.diagrams().iter().enumerate() {
            content = content.push(self.diagram_panel(index, key, entry));
        }

        content = content.push(self.action_row());

        if self.submitting {
            content = content.push(
                text(self.i18n.tr("form-submitting"))
                    .size(typography::LABEL)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some(error) = &self.error {
            content = content.push(self.error_panel(error));
        }

        if let Some(preview) = &self.preview {
            content = content.push(self.preview_panel(preview));
        }

        scrollable(
            container(content)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center),
        )
        .into()
    }

    fn styles_panel(&self) -> Element<'_, Message> {
        let editor = text_editor(self.form.styles())
            .on_action(|action| Message::Form(form::Message::StylesEdited(action)))
            .height(sizing::STYLES_EDITOR_HEIGHT);

        container(
            Column::new()
                .spacing(spacing::SM)
                .push(text(self.i18n.tr("form-styles-label")).size(typography::HEADING))
                .push(text(self.i18n.tr("form-styles-hint")).size(typography::CAPTION))
                .push(editor),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::panel)
        .into()
    }

    fn diagram_panel<'a>(
        &'a self,
        index: usize,
        key: form::DiagramKey,
        entry: &'a form::DiagramEntry,
    ) -> Element<'a, Message> {
        let title = format!("{} {}", self.i18n.tr("form-diagram-label"), index + 1);

        let editor = text_editor(&entry.tikz)
            .on_action(move |action| Message::Form(form::Message::TikzEdited(key, action)))
            .height(sizing::EDITOR_HEIGHT);

        let subtitle = text_input(
            &self.i18n.tr("form-subtitle-placeholder"),
            &entry.subtitle,
        )
        .on_input(move |value| Message::Form(form::Message::SubtitleEdited(key, value)))
        .size(typography::BODY)
        .padding(spacing::SM);

        container(
            Column::new()
                .spacing(spacing::SM)
                .push(text(title).size(typography::HEADING))
                .push(editor)
                .push(text(self.i18n.tr("form-subtitle-label")).size(typography::LABEL))
                .push(subtitle),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::panel)
        .into()
    }

    fn action_row(&self) -> Element<'_, Message> {
        let add = button(text(self.i18n.tr("form-add-diagram")).size(typography::LABEL))
            .on_press(Message::Form(form::Message::AddDiagram))
            .padding([spacing::SM, spacing::MD])
            .style(styles::subtle);

        let clear = button(text(self.i18n.tr("form-clear-all")).size(typography::LABEL))
            .on_press(Message::Form(form::Message::ClearAll))
            .padding([spacing::SM, spacing::MD])
            .style(styles::danger);

        // Stays pressable while a submission is outstanding; the sequence
        // gate in the update loop discards the superseded completion.
        let submit = button(text(self.i18n.tr("form-submit")).size(typography::LABEL))
            .on_press(Message::Submit)
            .padding([spacing::SM, spacing::MD])
            .style(styles::primary);

        Row::new()
            .spacing(spacing::MD)
            .push(add)
            .push(clear)
            .push(iced::widget::space::horizontal())
            .push(submit)
            .into()
    }

    fn error_panel(&self, error: &crate::submission::SubmissionError) -> Element<'_, Message> {
        ErrorPanel::new(self.i18n.tr("error-submit-title"), self.i18n.tr(error.i18n_key()))
            .details(error.to_string())
            .show_details(self.show_error_details)
            .retry(self.i18n.tr("error-retry"), Message::Submit)
            .on_toggle_details(Message::ToggleErrorDetails)
            .details_labels(
                self.i18n.tr("error-show-details"),
                self.i18n.tr("error-hide-details"),
            )
            .view()
    }

    fn preview_panel<'a>(&'a self, preview: &'a Preview) -> Element<'a, Message> {
        let surface: Element<'a, Message> = if let Some(handle) = preview.current_handle() {
            iced::widget::image(handle.clone())
                .width(sizing::PREVIEW_WIDTH)
                .into()
        } else if preview.decode_failed() {
            text(self.i18n.tr("preview-unavailable"))
                .size(typography::BODY)
                .into()
        } else {
            text(self.i18n.tr("preview-decoding"))
                .size(typography::BODY)
                .into()
        };

        let mut controls = Row::new().spacing(spacing::SM);
        if preview.current_handle().is_some() {
            let label = if preview.is_playing() {
                self.i18n.tr("preview-pause")
            } else {
                self.i18n.tr("preview-play")
            };
            controls = controls.push(
                button(text(label).size(typography::LABEL))
                    .on_press(Message::TogglePlayback)
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::subtle),
            );
        }
        controls = controls.push(
            button(text(self.i18n.tr("preview-download")).size(typography::LABEL))
                .on_press(Message::Download)
                .padding([spacing::XS, spacing::SM])
                .style(styles::primary),
        );

        container(
            Column::new()
                .spacing(spacing::SM)
                .align_x(alignment::Horizontal::Center)
                .push(text(self.i18n.tr("preview-title")).size(typography::HEADING))
                .push(surface)
                .push(controls),
        )
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::panel)
        .into()
    }
}
