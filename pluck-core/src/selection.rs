use std::collections::{BTreeSet, HashSet};

use crate::error::{Error, Result};
use crate::model::{Sentence, SentenceId, Word, WordId};

/// Marker transitions emitted by [`SelectionState`] so a rendering layer
/// can keep visual state in sync without reading the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    SentenceMarked(SentenceId),
    SentenceUnmarked(SentenceId),
    WordMarked(WordId),
    WordUnmarked(WordId),
    Cleared,
}

/// Sentence and word selection for one mounted text container
///
/// The selection lists hold display text rather than unit addresses, in
/// selection order. Removal is by value (first matching occurrence), so
/// two units with identical text are indistinguishable once selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected_sentences: Vec<String>,
    selected_words: Vec<String>,
    active_sentences: BTreeSet<SentenceId>,
    marked_words: BTreeSet<WordId>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_sentences(&self) -> &[String] {
        &self.selected_sentences
    }

    pub fn selected_words(&self) -> &[String] {
        &self.selected_words
    }

    pub fn marked_words(&self) -> impl Iterator<Item = WordId> + '_ {
        self.marked_words.iter().copied()
    }

    pub fn is_sentence_active(&self, id: SentenceId) -> bool {
        self.active_sentences.contains(&id)
    }

    pub fn is_word_marked(&self, id: WordId) -> bool {
        self.marked_words.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.selected_sentences.is_empty()
            && self.selected_words.is_empty()
            && self.active_sentences.is_empty()
    }

    /// Move a sentence into sentence-selected mode. Any word marks inside
    /// it are cleared first. No-op when the sentence is already active.
    pub fn select_sentence(&mut self, sentence: &Sentence) -> Vec<SelectionChange> {
        if self.active_sentences.contains(&sentence.id) {
            return Vec::new();
        }

        let mut changes = self.unmark_words_of(sentence, true);

        self.selected_sentences.push(sentence.text.clone());
        self.active_sentences.insert(sentence.id);
        changes.push(SelectionChange::SentenceMarked(sentence.id));

        tracing::debug!(
            paragraph = sentence.id.paragraph_index,
            sentence = sentence.id.sentence_index,
            "sentence selected"
        );
        changes
    }

    /// Drop a sentence and every word belonging to it. Word texts are
    /// removed by value wherever they occur in the word list.
    pub fn deselect_sentence(&mut self, sentence: &Sentence) -> Vec<SelectionChange> {
        if !self.active_sentences.remove(&sentence.id) {
            return Vec::new();
        }

        remove_first(&mut self.selected_sentences, &sentence.text);

        let texts: HashSet<&str> = sentence.words.iter().map(|w| w.text.as_str()).collect();
        self.selected_words.retain(|w| !texts.contains(w.as_str()));

        let mut changes = self.unmark_words_of(sentence, false);
        changes.push(SelectionChange::SentenceUnmarked(sentence.id));

        tracing::debug!(
            paragraph = sentence.id.paragraph_index,
            sentence = sentence.id.sentence_index,
            "sentence deselected"
        );
        changes
    }

    /// Flip a word's selection. Only words of an active sentence may be
    /// toggled; calling this twice on the same word restores the lists.
    pub fn toggle_word(&mut self, word: &Word) -> Result<SelectionChange> {
        if !self.active_sentences.contains(&word.id.sentence()) {
            return Err(Error::InvalidSelection {
                paragraph_index: word.id.paragraph_index,
                sentence_index: word.id.sentence_index,
                word_index: word.id.word_index,
            });
        }

        if self.marked_words.remove(&word.id) {
            remove_first(&mut self.selected_words, &word.text);
            Ok(SelectionChange::WordUnmarked(word.id))
        } else {
            self.marked_words.insert(word.id);
            self.selected_words.push(word.text.clone());
            Ok(SelectionChange::WordMarked(word.id))
        }
    }

    pub fn reset(&mut self) -> SelectionChange {
        self.selected_sentences.clear();
        self.selected_words.clear();
        self.active_sentences.clear();
        self.marked_words.clear();
        SelectionChange::Cleared
    }

    fn unmark_words_of(&mut self, sentence: &Sentence, remove_text: bool) -> Vec<SelectionChange> {
        let mut changes = Vec::new();
        for word in &sentence.words {
            if self.marked_words.remove(&word.id) {
                if remove_text {
                    remove_first(&mut self.selected_words, &word.text);
                }
                changes.push(SelectionChange::WordUnmarked(word.id));
            }
        }
        changes
    }
}

fn remove_first(list: &mut Vec<String>, text: &str) {
    if let Some(pos) = list.iter().position(|t| t == text) {
        list.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Document;

    fn doc() -> Document {
        Document::new("The cat sat. The dog ran.\n\nThe cat sat.")
    }

    #[test]
    fn test_select_sentence_is_idempotent() {
        let doc = doc();
        let sentence = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let mut state = SelectionState::new();

        let changes = state.select_sentence(sentence);
        assert_eq!(changes, vec![SelectionChange::SentenceMarked(sentence.id)]);
        assert!(state.select_sentence(sentence).is_empty());

        assert_eq!(state.selected_sentences(), ["The cat sat."]);
        assert!(state.is_sentence_active(sentence.id));
    }

    #[test]
    fn test_toggle_word_requires_active_sentence() {
        let doc = doc();
        let word = doc.word(WordId::new(0, 0, 1)).unwrap();
        let mut state = SelectionState::new();

        let err = state.toggle_word(word).unwrap_err();
        assert!(matches!(err, Error::InvalidSelection { word_index: 1, .. }));
        assert_eq!(state, SelectionState::new());
    }

    #[test]
    fn test_toggle_word_pair_restores_state() {
        let doc = doc();
        let sentence = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let word = sentence.word(1).unwrap();
        let mut state = SelectionState::new();
        state.select_sentence(sentence);
        let before = state.clone();

        assert_eq!(state.toggle_word(word).unwrap(), SelectionChange::WordMarked(word.id));
        assert_eq!(state.selected_words(), ["cat"]);
        assert_eq!(state.toggle_word(word).unwrap(), SelectionChange::WordUnmarked(word.id));
        assert_eq!(state, before);
    }

    #[test]
    fn test_deselect_cleans_up_words() {
        let doc = doc();
        let sentence = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let word = sentence.word(2).unwrap();
        let mut state = SelectionState::new();
        state.select_sentence(sentence);
        state.toggle_word(word).unwrap();

        let changes = state.deselect_sentence(sentence);
        assert_eq!(
            changes,
            vec![
                SelectionChange::WordUnmarked(word.id),
                SelectionChange::SentenceUnmarked(sentence.id),
            ]
        );
        assert!(state.is_empty());
        assert!(!state.is_word_marked(word.id));
    }

    #[test]
    fn test_deselect_inactive_sentence_is_noop() {
        let doc = doc();
        let first = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let second = doc.sentence(SentenceId::new(0, 1)).unwrap();
        let mut state = SelectionState::new();
        state.select_sentence(first);

        assert!(state.deselect_sentence(second).is_empty());
        assert_eq!(state.selected_sentences(), ["The cat sat."]);
    }

    #[test]
    fn test_identical_text_is_removed_by_value() {
        let doc = doc();
        let first = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let other = doc.sentence(SentenceId::new(0, 1)).unwrap();
        let twin = doc.sentence(SentenceId::new(1, 0)).unwrap();
        let mut state = SelectionState::new();

        state.select_sentence(first);
        state.select_sentence(other);
        state.select_sentence(twin);
        state.toggle_word(first.word(0).unwrap()).unwrap();
        state.toggle_word(other.word(0).unwrap()).unwrap();
        assert_eq!(state.selected_words(), ["The", "The"]);

        // Both "The" entries go, even though only one belongs to `twin`
        state.deselect_sentence(twin);
        assert_eq!(state.selected_sentences(), ["The dog ran.", "The cat sat."]);
        assert!(state.selected_words().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let doc = doc();
        let sentence = doc.sentence(SentenceId::new(1, 0)).unwrap();
        let mut state = SelectionState::new();
        state.select_sentence(sentence);
        state.toggle_word(sentence.word(0).unwrap()).unwrap();

        assert_eq!(state.reset(), SelectionChange::Cleared);
        assert!(state.is_empty());
        assert_eq!(state.marked_words().count(), 0);
    }
}
