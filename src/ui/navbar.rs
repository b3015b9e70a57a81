// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: application title, backend reachability indicator,
//! and the screen switch.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{alignment, Color, Element, Length};

/// Last known reachability of the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendStatus {
    /// The startup probe has not completed yet.
    #[default]
    Unknown,
    Reachable,
    Unreachable,
}

impl BackendStatus {
    fn color(self) -> Color {
        match self {
            BackendStatus::Unknown => palette::GRAY_400,
            BackendStatus::Reachable => palette::SUCCESS_500,
            BackendStatus::Unreachable => palette::ERROR_500,
        }
    }

    fn i18n_key(self) -> &'static str {
        match self {
            BackendStatus::Unknown => "navbar-backend-unknown",
            BackendStatus::Reachable => "navbar-backend-reachable",
            BackendStatus::Unreachable => "navbar-backend-unreachable",
        }
    }
}

/// Renders the navigation bar. `on_form`/`on_help` select the screen; the
/// button for the active screen is rendered without a press handler.
pub fn view<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    status: BackendStatus,
    help_active: bool,
    on_form: Message,
    on_help: Message,
) -> Element<'a, Message> {
    let title = text(i18n.tr("window-title")).size(typography::TITLE);

    let status_dot = text("\u{25CF}").size(typography::LABEL).color(status.color());
    let status_label = text(i18n.tr(status.i18n_key())).size(typography::CAPTION);

    let mut form_button = button(text(i18n.tr("navbar-form")).size(typography::LABEL))
        .padding([spacing::XS, spacing::SM])
        .style(styles::subtle);
    if help_active {
        form_button = form_button.on_press(on_form);
    }

    let mut help_button = button(text(i18n.tr("navbar-help")).size(typography::LABEL))
        .padding([spacing::XS, spacing::SM])
        .style(styles::subtle);
    if !help_active {
        help_button = help_button.on_press(on_help);
    }

    let bar = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(title)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(status_dot)
                .push(status_label),
        )
        .push(iced::widget::space::horizontal())
        .push(form_button)
        .push(help_button);

    container(bar)
        .padding([spacing::SM, spacing::MD])
        .width(Length::Fill)
        .style(styles::panel)
        .into()
}
