//! Text segmentation into paragraphs, sentences and words
//!
//! Paragraphs are separated by a blank line (`"\n\n"`) and indexed by
//! their position in that split, so a blank chunk yields no paragraph but
//! still takes up an index. A sentence is a
//! run of non-terminator characters followed by at most one `.`, `!` or
//! `?`; a trailing fragment without a terminator is still a sentence.
//! Words are separated by single spaces, and runs of spaces never yield
//! an empty word.

use crate::model::{Paragraph, Sentence, SentenceId, Word};

const PARAGRAPH_SEPARATOR: &str = "\n\n";

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Segment raw text. Total and deterministic: never fails, and empty or
/// blank input yields no paragraphs.
pub fn segment(raw: &str) -> Vec<Paragraph> {
    let mut paragraphs = Vec::new();

    for (index, chunk) in raw.split(PARAGRAPH_SEPARATOR).enumerate() {
        let sentences: Vec<Sentence> = split_sentences(chunk)
            .into_iter()
            .filter_map(build_sentence)
            .enumerate()
            .map(|(sentence_index, (text, words))| {
                let id = SentenceId::new(index, sentence_index);
                Sentence {
                    id,
                    text,
                    words: words
                        .into_iter()
                        .enumerate()
                        .map(|(word_index, text)| Word {
                            id: id.word(word_index),
                            text,
                        })
                        .collect(),
                }
            })
            .collect();

        if sentences.is_empty() {
            continue;
        }

        paragraphs.push(Paragraph {
            index,
            text: chunk.trim().to_string(),
            sentences,
        });
    }

    paragraphs
}

/// Greedy sentence matcher. Terminators that do not follow a run of
/// other characters (e.g. the second `!` in `"Wait!!"`) are dropped.
pub fn split_sentences(paragraph: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start: Option<usize> = None;

    for (i, c) in paragraph.char_indices() {
        if is_terminator(c) {
            if let Some(s) = start.take() {
                sentences.push(&paragraph[s..i + c.len_utf8()]);
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }

    if let Some(s) = start {
        sentences.push(&paragraph[s..]);
    }

    sentences
}

/// Split a sentence on single spaces, dropping empty and blank pieces
pub fn split_words(sentence: &str) -> Vec<String> {
    sentence
        .split(' ')
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect()
}

fn build_sentence(fragment: &str) -> Option<(String, Vec<String>)> {
    let words = split_words(fragment);
    if words.is_empty() {
        return None;
    }
    Some((words.join(" "), words))
}
