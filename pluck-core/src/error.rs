use thiserror::Error;

/// Errors surfaced by the selection engine and its hosts
#[derive(Debug, Error)]
pub enum Error {
    /// A required host element is missing. Fatal at setup.
    #[error("required element '#{element_id}' not found")]
    Configuration { element_id: String },

    /// A word was toggled while its sentence is not sentence-selected.
    #[error(
        "word {word_index} of sentence {paragraph_index}:{sentence_index} is not inside an active sentence"
    )]
    InvalidSelection {
        paragraph_index: usize,
        sentence_index: usize,
        word_index: usize,
    },

    /// The platform rejected a clipboard write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
