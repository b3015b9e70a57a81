// SPDX-License-Identifier: MPL-2.0
//! Help screen with collapsible sections: a welcome note, usage
//! instructions, and copyable example input.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, scrollable, text, Column, Row};
use iced::{alignment, Element, Length};
use std::collections::HashSet;

/// Example style declarations offered to first-time users.
pub const EXAMPLE_STYLES: &str = "\\tikzstyle{red dot}=[fill=red, draw=black, shape=circle]\n\
\\tikzstyle{green dot}=[fill=green, draw=black, shape=circle]";

/// First example diagram.
pub const EXAMPLE_DIAGRAM_1: &str = "\\node [style=none] (0) at (-5, 0) {};\n\
\\node [style=red dot] (1) at (-2, 0) {$a$};\n\
\\node [style=green dot] (2) at (2, -2) {$b$};\n\
\\node [style=red dot] (3) at (3, 2) {$c$};\n\
\\node [style=none] (4) at (5, 0) {};\n\
\\draw (0) to (1);\n\
\\draw [bend right=60, looseness=1.25] (1) to (2);\n\
\\draw [in=-180, out=20, looseness=1.5] (1) to (3);\n\
\\draw [in=-180, out=0, looseness=1.5] (2) to (4);";

/// Second example diagram, a small variation the animation interpolates to.
pub const EXAMPLE_DIAGRAM_2: &str = "\\node [style=none] (0) at (-5, 0) {};\n\
\\node [style=red dot] (1) at (-2, 0) {$a$};\n\
\\node [style=green dot] (2) at (0, -2) {$b$};\n\
\\node [style=red dot] (3) at (3, 2) {$c$};\n\
\\node [style=none] (4) at (5, 0) {};\n\
\\draw (0) to (1);\n\
\\draw [in=160, out=-45, looseness=1.25] (1) to (4);\n\
\\draw [in=-180, out=20, looseness=1.5] (1) to (3);\n\
\\draw [in=-180, out=0, looseness=1.5] (2) to (4);";

/// Help sections that can be expanded or collapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpSection {
    Welcome,
    Usage,
    Example,
}

impl HelpSection {
    /// All sections in display order.
    pub const ALL: [HelpSection; 3] = [
        HelpSection::Welcome,
        HelpSection::Usage,
        HelpSection::Example,
    ];

    fn title_key(self) -> &'static str {
        match self {
            HelpSection::Welcome => "help-welcome-title",
            HelpSection::Usage => "help-usage-title",
            HelpSection::Example => "help-example-title",
        }
    }
}

/// Tracks which sections are expanded.
#[derive(Debug, Clone, Default)]
pub struct State {
    expanded: HashSet<HelpSection>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_expanded(&self, section: HelpSection) -> bool {
        self.expanded.contains(&section)
    }

    pub fn toggle(&mut self, section: HelpSection) {
        if !self.expanded.remove(&section) {
            self.expanded.insert(section);
        }
    }
}

/// Messages emitted by the help screen.
#[derive(Debug, Clone)]
pub enum Message {
    BackToForm,
    ToggleSection(HelpSection),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    BackToForm,
}

pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::BackToForm => Event::BackToForm,
        Message::ToggleSection(section) => {
            state.toggle(section);
            Event::None
        }
    }
}

pub fn view<'a>(i18n: &'a I18n, state: &'a State) -> Element<'a, Message> {
    let mut sections = Column::new().spacing(spacing::MD).width(Length::Fill);

    for section in HelpSection::ALL {
        sections = sections.push(section_view(i18n, state, section));
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::LG)
        .max_width(720)
        .push(text(i18n.tr("help-title")).size(typography::TITLE))
        .push(sections)
        .push(
            button(text(i18n.tr("help-back")).size(typography::LABEL))
                .on_press(Message::BackToForm)
                .padding([spacing::XS, spacing::MD])
                .style(styles::primary),
        );

    scrollable(
        container(content)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center),
    )
    .into()
}

fn section_view<'a>(
    i18n: &'a I18n,
    state: &'a State,
    section: HelpSection,
) -> Element<'a, Message> {
    let expanded = state.is_expanded(section);
    let indicator = if expanded { "\u{25BE}" } else { "\u{25B8}" };

    let header = button(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(text(indicator).size(typography::BODY))
            .push(text(i18n.tr(section.title_key())).size(typography::HEADING)),
    )
    .on_press(Message::ToggleSection(section))
    .padding(spacing::SM)
    .width(Length::Fill)
    .style(styles::subtle);

    let mut block = Column::new().push(header);
    if expanded {
        block = block.push(
            container(section_body(i18n, section))
                .padding(spacing::MD)
                .width(Length::Fill),
        );
    }

    container(block).width(Length::Fill).style(styles::panel).into()
}

fn section_body<'a>(i18n: &'a I18n, section: HelpSection) -> Element<'a, Message> {
    match section {
        HelpSection::Welcome => Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("help-welcome-greeting")).size(typography::BODY))
            .push(text(i18n.tr("help-welcome-scope")).size(typography::BODY))
            .into(),
        HelpSection::Usage => Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("help-usage-styles")).size(typography::BODY))
            .push(text(i18n.tr("help-usage-diagrams")).size(typography::BODY))
            .push(text(i18n.tr("help-usage-submit")).size(typography::BODY))
            .push(text(i18n.tr("help-usage-download")).size(typography::BODY))
            .into(),
        HelpSection::Example => Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("help-example-intro")).size(typography::BODY))
            .push(text(i18n.tr("help-example-styles-label")).size(typography::LABEL))
            .push(code_block(EXAMPLE_STYLES))
            .push(text(i18n.tr("help-example-diagram-1-label")).size(typography::LABEL))
            .push(code_block(EXAMPLE_DIAGRAM_1))
            .push(text(i18n.tr("help-example-diagram-2-label")).size(typography::LABEL))
            .push(code_block(EXAMPLE_DIAGRAM_2))
            .into(),
    }
}

fn code_block<'a>(source: &'a str) -> Element<'a, Message> {
    container(text(source).size(typography::CAPTION).font(iced::Font::MONOSPACE))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::code_block)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_start_collapsed() {
        let state = State::new();
        for section in HelpSection::ALL {
            assert!(!state.is_expanded(section));
        }
    }

    #[test]
    fn toggle_expands_and_collapses() {
        let mut state = State::new();

        let event = update(&mut state, Message::ToggleSection(HelpSection::Usage));
        assert!(matches!(event, Event::None));
        assert!(state.is_expanded(HelpSection::Usage));
        assert!(!state.is_expanded(HelpSection::Welcome));

        update(&mut state, Message::ToggleSection(HelpSection::Usage));
        assert!(!state.is_expanded(HelpSection::Usage));
    }

    #[test]
    fn back_propagates_to_parent() {
        let mut state = State::new();
        let event = update(&mut state, Message::BackToForm);
        assert!(matches!(event, Event::BackToForm));
    }
}
