// SPDX-License-Identifier: MPL-2.0
//! Form state store: the shared style text plus the ordered diagram
//! collection, mutated exclusively through [`Message`] in the update loop.
//!
//! No validation is performed on the text content; any string, including
//! empty, is accepted and submitted as-is.

mod collection;

pub use collection::{DiagramCollection, DiagramEntry, DiagramKey};

use crate::submission::{DiagramPayload, RenderRequest};
use iced::widget::text_editor;

/// Edits emitted by the form screen.
#[derive(Debug, Clone)]
pub enum Message {
    StylesEdited(text_editor::Action),
    TikzEdited(DiagramKey, text_editor::Action),
    SubtitleEdited(DiagramKey, String),
    AddDiagram,
    ClearAll,
}

/// The form state store.
#[derive(Default)]
pub struct State {
    styles: text_editor::Content,
    diagrams: DiagramCollection,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("styles_len", &self.styles.text().len())
            .field("diagrams", &self.diagrams)
            .finish()
    }
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn styles(&self) -> &text_editor::Content {
        &self.styles
    }

    /// Style text with the editor's trailing newline stripped.
    pub fn styles_text(&self) -> String {
        let text = self.styles.text();
        text.strip_suffix('\n').unwrap_or(&text).to_string()
    }

    pub fn diagrams(&self) -> &DiagramCollection {
        &self.diagrams
    }

    /// Applies a form edit. Edits addressed to an unknown key are ignored;
    /// keys are never removed, so this only guards against stale messages.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::StylesEdited(action) => self.styles.perform(action),
            Message::TikzEdited(key, action) => {
                if let Some(entry) = self.diagrams.get_mut(key) {
                    entry.tikz.perform(action);
                }
            }
            Message::SubtitleEdited(key, value) => {
                if let Some(entry) = self.diagrams.get_mut(key) {
                    entry.subtitle = value;
                }
            }
            Message::AddDiagram => {
                self.diagrams.add();
            }
            Message::ClearAll => {
                self.styles = text_editor::Content::new();
                self.diagrams.clear_fields();
            }
        }
    }

    /// Snapshots the store into the wire payload sent to the backend.
    pub fn snapshot(&self) -> RenderRequest {
        RenderRequest {
            styles_input: self.styles_text(),
            diagrams: self
                .diagrams
                .iter()
                .map(|(key, entry)| {
                    (
                        key.as_u32(),
                        DiagramPayload {
                            tikz: entry.tikz_text(),
                            subtitle: entry.subtitle.clone(),
                        },
                    )
                })
                .collect(),
        }
    }
}
