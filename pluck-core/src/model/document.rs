use super::{Paragraph, Sentence, SentenceId, TextUnit, Word, WordId};
use crate::segment;

/// Segmented text of one mounted container
///
/// Units are immutable once built, so addresses stay valid for the
/// lifetime of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    paragraphs: Vec<Paragraph>,
}

impl Document {
    pub fn new(source: impl AsRef<str>) -> Self {
        Self {
            paragraphs: segment::segment(source.as_ref()),
        }
    }

    pub fn paragraphs(&self) -> &[Paragraph] {
        &self.paragraphs
    }

    pub fn paragraph(&self, index: usize) -> Option<&Paragraph> {
        // Blank chunks leave gaps, but indices stay ascending
        let position = self
            .paragraphs
            .binary_search_by_key(&index, |p| p.index)
            .ok()?;
        self.paragraphs.get(position)
    }

    pub fn sentence(&self, id: SentenceId) -> Option<&Sentence> {
        self.paragraph(id.paragraph_index)?
            .sentence(id.sentence_index)
    }

    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.sentence(id.sentence())?.word(id.word_index)
    }

    pub fn sentence_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.sentences.len()).sum()
    }

    pub fn word_count(&self) -> usize {
        self.sentences().map(|s| s.words.len()).sum()
    }

    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.paragraphs.iter().flat_map(|p| p.sentences.iter())
    }

    /// All units in document order, each paragraph before its sentences
    /// and each sentence before its words
    pub fn units(&self) -> Vec<TextUnit<'_>> {
        let mut units = Vec::new();
        for paragraph in &self.paragraphs {
            units.push(TextUnit::Paragraph(paragraph));
            for sentence in &paragraph.sentences {
                units.push(TextUnit::Sentence(sentence));
                units.extend(sentence.words.iter().map(TextUnit::Word));
            }
        }
        units
    }
}
