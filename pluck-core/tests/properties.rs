use proptest::prelude::*;

use pluck_core::{format, segment, Document, SelectionState, SentenceId};

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("".to_string()),
        "[a-zA-Z .!?]{0,60}",
        "[a-zA-Z .!?\n]{0,200}",
        r"[a-z ]{0,20}\.\n\n[a-z ]{0,20}!",
        "[\u{0020}-\u{007E}\u{00A0}-\u{00FF}\u{4E00}-\u{9FFF}\n]{0,100}",
    ]
}

proptest! {
    #[test]
    fn segmentation_is_deterministic(text in text_strategy()) {
        prop_assert_eq!(segment(&text), segment(&text));
    }

    #[test]
    fn segmentation_never_produces_empty_units(text in text_strategy()) {
        let paragraphs = segment(&text);
        let chunks = text.split("\n\n").count();
        for pair in paragraphs.windows(2) {
            prop_assert!(pair[0].index < pair[1].index);
        }
        for paragraph in &paragraphs {
            let p_index = paragraph.index;
            prop_assert!(p_index < chunks);
            prop_assert!(!paragraph.sentences.is_empty());
            for (s_index, sentence) in paragraph.sentences.iter().enumerate() {
                prop_assert_eq!(sentence.id, SentenceId::new(p_index, s_index));
                prop_assert!(!sentence.words.is_empty());
                for (w_index, word) in sentence.words.iter().enumerate() {
                    prop_assert_eq!(word.id.word_index, w_index);
                    prop_assert!(!word.text.is_empty());
                    prop_assert!(!word.text.contains(' '));
                }
            }
        }
    }

    #[test]
    fn sentences_end_at_most_once(text in "[a-z .!?]{0,80}") {
        for paragraph in segment(&text) {
            for sentence in paragraph.sentences {
                let terminators = sentence.text.chars().filter(|c| matches!(c, '.' | '!' | '?')).count();
                prop_assert!(terminators <= 1);
            }
        }
    }

    #[test]
    fn word_toggle_pairs_restore_state(
        words in prop::collection::hash_set("[a-z]{1,5}", 1..7),
        picks in prop::collection::vec(0usize..7, 0..6)
    ) {
        let text = format!("{}.", words.into_iter().collect::<Vec<_>>().join(" "));
        let doc = Document::new(text);
        let sentence = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let mut state = SelectionState::new();
        state.select_sentence(sentence);

        for pick in picks {
            let word = &sentence.words[pick % sentence.words.len()];
            if !state.is_word_marked(word.id) {
                let before = state.clone();
                state.toggle_word(word).unwrap();
                state.toggle_word(word).unwrap();
                prop_assert_eq!(&state, &before);
            }
            state.toggle_word(word).unwrap();
        }
    }

    #[test]
    fn inactive_word_toggle_never_mutates(text in "[a-z]{1,5}( [a-z]{1,5}){0,6}\\. [a-z]{1,5}\\.") {
        let doc = Document::new(text);
        let first = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let second = doc.sentence(SentenceId::new(0, 1)).unwrap();
        let mut state = SelectionState::new();
        state.select_sentence(first);
        let before = state.clone();

        for word in &second.words {
            prop_assert!(state.toggle_word(word).is_err());
        }
        prop_assert_eq!(state, before);
    }

    #[test]
    fn reset_then_export_is_empty(text in "[a-z]{1,5}( [a-z]{1,5}){0,6}\\.", prompts in prop::collection::vec("[a-z ]{0,10}", 0..3)) {
        let doc = Document::new(text);
        let sentence = doc.sentence(SentenceId::new(0, 0)).unwrap();
        let mut state = SelectionState::new();
        state.select_sentence(sentence);
        state.toggle_word(&sentence.words[0]).unwrap();
        state.reset();

        let payload = format(&state, &prompts);
        prop_assert_eq!(payload.instruction, prompts);
        prop_assert!(payload.interesting_words.is_empty());
        prop_assert!(payload.interesting_sentences.is_empty());
    }
}
