use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::selection::SelectionState;

/// Structured selection snapshot handed to the output surface
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExportPayload {
    pub instruction: Vec<String>,
    pub interesting_words: Vec<String>,
    pub interesting_sentences: Vec<String>,
}

/// Payload variant used by the menu's export action, carrying the
/// comma-joined lists next to the arrays
#[derive(Debug, Serialize)]
pub struct ContextPayload<'a> {
    pub instruction: &'a [String],
    pub interesting_words: &'a [String],
    pub interesting_sentences: &'a [String],
    pub interesting_words_list: String,
    pub interesting_sentences_list: String,
}

/// Build a fresh payload from the current selection
pub fn format(state: &SelectionState, prompts: &[String]) -> ExportPayload {
    ExportPayload {
        instruction: prompts.to_vec(),
        interesting_words: state.selected_words().to_vec(),
        interesting_sentences: state.selected_sentences().to_vec(),
    }
}

impl ExportPayload {
    pub fn words_list(&self) -> String {
        self.interesting_words.join(", ")
    }

    pub fn sentences_list(&self) -> String {
        self.interesting_sentences.join(", ")
    }

    /// Two-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Interesting Words: {}\nInteresting Sentences: {}",
            self.words_list(),
            self.sentences_list()
        )
    }

    /// JSON with 2-space indentation
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Output surface rendering: the JSON, a blank line, then the summary
    pub fn render(&self) -> Result<String> {
        Ok(format!("{}\n\n{}", self.to_json()?, self.summary()))
    }

    pub fn as_context(&self) -> ContextPayload<'_> {
        ContextPayload {
            instruction: &self.instruction,
            interesting_words: &self.interesting_words,
            interesting_sentences: &self.interesting_sentences,
            interesting_words_list: self.words_list(),
            interesting_sentences_list: self.sentences_list(),
        }
    }

    pub fn context_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.as_context())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Document, SentenceId};

    fn prompts() -> Vec<String> {
        vec!["Focus".to_string()]
    }

    #[test]
    fn test_empty_render_format() {
        let payload = format(&SelectionState::new(), &prompts());
        let expected = "{\n  \"instruction\": [\n    \"Focus\"\n  ],\n  \"interesting_words\": [],\n  \"interesting_sentences\": []\n}\n\nInteresting Words: \nInteresting Sentences: ";
        assert_eq!(payload.render().unwrap(), expected);
    }

    #[test]
    fn test_summary_joins_with_commas() {
        let doc = Document::new("The cat sat. It was happy.");
        let mut state = SelectionState::new();
        let first = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let second = doc.sentence(SentenceId::new(0, 1)).unwrap();
        state.select_sentence(first);
        state.select_sentence(second);
        state.toggle_word(first.word(1).unwrap()).unwrap();
        state.toggle_word(second.word(2).unwrap()).unwrap();

        let payload = format(&state, &prompts());
        assert_eq!(
            payload.summary(),
            "Interesting Words: cat, happy.\nInteresting Sentences: The cat sat., It was happy."
        );
    }

    #[test]
    fn test_context_payload_fields() {
        let payload = ExportPayload {
            instruction: prompts(),
            interesting_words: vec!["a".to_string(), "b".to_string()],
            interesting_sentences: vec![],
        };
        let value: serde_json::Value = serde_json::from_str(&payload.context_json().unwrap()).unwrap();

        assert_eq!(value["interesting_words_list"], "a, b");
        assert_eq!(value["interesting_sentences_list"], "");
        assert_eq!(value["interesting_words"][1], "b");
    }
}
