// SPDX-License-Identifier: MPL-2.0
//! Wire payload for the rendering backend.
//!
//! The backend expects a JSON object of the form:
//!
//! ```json
//! {
//!   "stylesInput": "<style definitions>",
//!   "diagrams": {
//!     "0": { "tikz": "<source>", "subtitle": "<caption>" },
//!     "1": { "tikz": "...", "subtitle": "..." }
//!   }
//! }
//! ```
//!
//! Diagram keys are serialized as decimal strings in insertion order.

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// One diagram as the backend sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramPayload {
    pub tikz: String,
    pub subtitle: String,
}

/// Snapshot of the form state, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub styles_input: String,
    /// Diagram entries keyed by their session key, in insertion order.
    pub diagrams: Vec<(u32, DiagramPayload)>,
}

impl Serialize for RenderRequest {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("stylesInput", &self.styles_input)?;
        map.serialize_entry("diagrams", &DiagramsMap(&self.diagrams))?;
        map.end()
    }
}

/// Serializes the diagram list as a JSON object with string keys.
struct DiagramsMap<'a>(&'a [(u32, DiagramPayload)]);

impl Serialize for DiagramsMap<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, payload) in self.0 {
            map.serialize_entry(&key.to_string(), payload)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> RenderRequest {
        RenderRequest {
            styles_input: "\\tikzstyle{x}=[fill=red]".to_string(),
            diagrams: vec![
                (
                    0,
                    DiagramPayload {
                        tikz: "\\node (a) at (0,0) {};".to_string(),
                        subtitle: "step 1".to_string(),
                    },
                ),
                (
                    1,
                    DiagramPayload {
                        tikz: "\\node (b) at (1,1) {};".to_string(),
                        subtitle: String::new(),
                    },
                ),
            ],
        }
    }

    #[test]
    fn serializes_to_the_backend_shape() {
        let json = serde_json::to_string(&sample_request()).expect("serialize");
        assert_eq!(
            json,
            "{\"stylesInput\":\"\\\\tikzstyle{x}=[fill=red]\",\
             \"diagrams\":{\
             \"0\":{\"tikz\":\"\\\\node (a) at (0,0) {};\",\"subtitle\":\"step 1\"},\
             \"1\":{\"tikz\":\"\\\\node (b) at (1,1) {};\",\"subtitle\":\"\"}}}"
        );
    }

    #[test]
    fn diagram_keys_become_decimal_strings() {
        let value = serde_json::to_value(sample_request()).expect("serialize");
        let diagrams = value.get("diagrams").and_then(|d| d.as_object()).unwrap();
        assert!(diagrams.contains_key("0"));
        assert!(diagrams.contains_key("1"));
        assert_eq!(diagrams["0"]["subtitle"], "step 1");
    }

    #[test]
    fn empty_form_still_serializes() {
        let request = RenderRequest {
            styles_input: String::new(),
            diagrams: vec![(
                0,
                DiagramPayload {
                    tikz: String::new(),
                    subtitle: String::new(),
                },
            )],
        };
        let json = serde_json::to_string(&request).expect("serialize");
        assert_eq!(
            json,
            "{\"stylesInput\":\"\",\"diagrams\":{\"0\":{\"tikz\":\"\",\"subtitle\":\"\"}}}"
        );
    }
}
