//! Markup for segmented text
//!
//! Each paragraph becomes a `<p>`, each sentence a `span.sentence` with
//! paragraph and sentence index attributes, and each word a `span.word`
//! with a word index attribute. Marker classes are toggled later by the
//! rendering layer and styled by the host page.

use crate::model::Paragraph;

pub const SENTENCE_CLASS: &str = "sentence";
pub const WORD_CLASS: &str = "word";
pub const SENTENCE_SELECTED_CLASS: &str = "style-s";
pub const WORD_SELECTED_CLASS: &str = "style-w";
pub const HOVERED_CLASS: &str = "hovered";

pub const PARAGRAPH_INDEX_ATTR: &str = "data-paragraph-index";
pub const SENTENCE_INDEX_ATTR: &str = "data-sentence-index";
pub const WORD_INDEX_ATTR: &str = "data-word-index";

pub fn render_html(paragraphs: &[Paragraph]) -> String {
    let mut html = String::new();

    for paragraph in paragraphs {
        html.push_str("<p>");
        for (i, sentence) in paragraph.sentences.iter().enumerate() {
            if i > 0 {
                html.push(' ');
            }
            html.push_str(&format!(
                "<span class=\"{}\" {}=\"{}\" {}=\"{}\">",
                SENTENCE_CLASS,
                SENTENCE_INDEX_ATTR,
                sentence.id.sentence_index,
                PARAGRAPH_INDEX_ATTR,
                sentence.id.paragraph_index
            ));
            for (j, word) in sentence.words.iter().enumerate() {
                if j > 0 {
                    html.push(' ');
                }
                html.push_str(&format!(
                    "<span class=\"{}\" {}=\"{}\">{}</span>",
                    WORD_CLASS,
                    WORD_INDEX_ATTR,
                    word.id.word_index,
                    escape_html(&word.text)
                ));
            }
            html.push_str("</span>");
        }
        html.push_str("</p>");
    }

    html
}

/// Selector for one rendered sentence
pub fn sentence_selector(paragraph_index: usize, sentence_index: usize) -> String {
    format!(
        ".{}[{}=\"{}\"][{}=\"{}\"]",
        SENTENCE_CLASS, PARAGRAPH_INDEX_ATTR, paragraph_index, SENTENCE_INDEX_ATTR, sentence_index
    )
}

/// Selector for a word, relative to its sentence element
pub fn word_selector(word_index: usize) -> String {
    format!(".{}[{}=\"{}\"]", WORD_CLASS, WORD_INDEX_ATTR, word_index)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
