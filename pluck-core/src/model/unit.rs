use serde::{Deserialize, Serialize};

/// Address of a sentence inside a segmented document
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub struct SentenceId {
    pub paragraph_index: usize,
    pub sentence_index: usize,
}

impl SentenceId {
    pub fn new(paragraph_index: usize, sentence_index: usize) -> Self {
        Self {
            paragraph_index,
            sentence_index,
        }
    }

    pub fn word(&self, word_index: usize) -> WordId {
        WordId {
            paragraph_index: self.paragraph_index,
            sentence_index: self.sentence_index,
            word_index,
        }
    }
}

/// Address of a word; the word index restarts for every sentence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub struct WordId {
    pub paragraph_index: usize,
    pub sentence_index: usize,
    pub word_index: usize,
}

impl WordId {
    pub fn new(paragraph_index: usize, sentence_index: usize, word_index: usize) -> Self {
        Self {
            paragraph_index,
            sentence_index,
            word_index,
        }
    }

    /// The enclosing sentence
    pub fn sentence(&self) -> SentenceId {
        SentenceId::new(self.paragraph_index, self.sentence_index)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    Paragraph,
    Sentence,
    Word,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub id: WordId,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    pub id: SentenceId,
    /// Display text: the sentence's words joined by single spaces
    pub text: String,
    pub words: Vec<Word>,
}

impl Sentence {
    pub fn word(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
    pub sentences: Vec<Sentence>,
}

impl Paragraph {
    pub fn sentence(&self, index: usize) -> Option<&Sentence> {
        self.sentences.get(index)
    }
}

/// Borrowed view over any segmented unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextUnit<'a> {
    Paragraph(&'a Paragraph),
    Sentence(&'a Sentence),
    Word(&'a Word),
}

impl<'a> TextUnit<'a> {
    pub fn kind(&self) -> UnitKind {
        match self {
            TextUnit::Paragraph(_) => UnitKind::Paragraph,
            TextUnit::Sentence(_) => UnitKind::Sentence,
            TextUnit::Word(_) => UnitKind::Word,
        }
    }

    pub fn text(&self) -> &'a str {
        match self {
            TextUnit::Paragraph(p) => &p.text,
            TextUnit::Sentence(s) => &s.text,
            TextUnit::Word(w) => &w.text,
        }
    }

    pub fn paragraph_index(&self) -> usize {
        match self {
            TextUnit::Paragraph(p) => p.index,
            TextUnit::Sentence(s) => s.id.paragraph_index,
            TextUnit::Word(w) => w.id.paragraph_index,
        }
    }

    pub fn sentence_index(&self) -> Option<usize> {
        match self {
            TextUnit::Paragraph(_) => None,
            TextUnit::Sentence(s) => Some(s.id.sentence_index),
            TextUnit::Word(w) => Some(w.id.sentence_index),
        }
    }

    pub fn word_index(&self) -> Option<usize> {
        match self {
            TextUnit::Word(w) => Some(w.id.word_index),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_id_points_back_to_sentence() {
        let sentence = SentenceId::new(2, 1);
        let word = sentence.word(4);
        assert_eq!(word, WordId::new(2, 1, 4));
        assert_eq!(word.sentence(), sentence);
    }

    #[test]
    fn test_text_unit_indices() {
        let word = Word {
            id: WordId::new(0, 3, 1),
            text: "cat".to_string(),
        };
        let unit = TextUnit::Word(&word);

        assert_eq!(unit.kind(), UnitKind::Word);
        assert_eq!(unit.text(), "cat");
        assert_eq!(unit.paragraph_index(), 0);
        assert_eq!(unit.sentence_index(), Some(3));
        assert_eq!(unit.word_index(), Some(1));
    }
}
