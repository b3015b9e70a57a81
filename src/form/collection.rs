// SPDX-License-Identifier: MPL-2.0
//! Insertion-ordered, integer-keyed collection of diagram entries.
//!
//! Keys are assigned at creation time, monotonically increasing and never
//! reused within a session. The collection is append-only: no operation
//! removes an entry or reorders keys, so keys stay contiguous from 0.

use iced::widget::text_editor;

/// Identifier of a diagram entry, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagramKey(u32);

impl DiagramKey {
    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DiagramKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One diagram input pair: TikZ source and an associated subtitle.
#[derive(Default)]
pub struct DiagramEntry {
    /// Multiline TikZ source buffer.
    pub tikz: text_editor::Content,
    /// Subtitle shown under the diagram in the rendered animation.
    pub subtitle: String,
}

impl std::fmt::Debug for DiagramEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiagramEntry")
            .field("tikz_len", &self.tikz.text().len())
            .field("subtitle", &self.subtitle)
            .finish()
    }
}

impl DiagramEntry {
    /// The TikZ source with the editor's trailing newline stripped, so the
    /// submitted payload matches what the user typed.
    pub fn tikz_text(&self) -> String {
        let text = self.tikz.text();
        text.strip_suffix('\n').unwrap_or(&text).to_string()
    }

    /// Resets both fields to empty without touching the entry's identity.
    pub fn clear(&mut self) {
        self.tikz = text_editor::Content::new();
        self.subtitle.clear();
    }
}

/// Ordered-by-insertion mapping from [`DiagramKey`] to [`DiagramEntry`].
///
/// Always holds at least one entry.
#[derive(Debug)]
pub struct DiagramCollection {
    entries: Vec<(DiagramKey, DiagramEntry)>,
    next_key: u32,
}

impl Default for DiagramCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramCollection {
    /// Creates a collection seeded with a single empty entry.
    pub fn new() -> Self {
        let mut collection = Self {
            entries: Vec::new(),
            next_key: 0,
        };
        collection.add();
        collection
    }

    /// Appends a new empty entry and returns its key.
    pub fn add(&mut self) -> DiagramKey {
        let key = DiagramKey(self.next_key);
        self.next_key += 1;
        self.entries.push((key, DiagramEntry::default()));
        key
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// The collection is never empty; provided for completeness.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: DiagramKey) -> Option<&DiagramEntry> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }

    pub fn get_mut(&mut self, key: DiagramKey) -> Option<&mut DiagramEntry> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == key)
            .map(|(_, entry)| entry)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DiagramKey, &DiagramEntry)> {
        self.entries.iter().map(|(k, entry)| (*k, entry))
    }

    /// Empties every entry's fields while preserving the set of keys.
    pub fn clear_fields(&mut self) {
        for (_, entry) in &mut self.entries {
            entry.clear();
        }
    }
}
