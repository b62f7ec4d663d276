pub mod document;
pub mod unit;

pub use document::Document;
pub use unit::{Paragraph, Sentence, SentenceId, TextUnit, UnitKind, Word, WordId};
