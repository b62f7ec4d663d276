//! Pluck Core - Platform-agnostic sentence and word selection engine
//!
//! This crate segments text into paragraphs, sentences and words, tracks
//! which of them are selected and turns the selection into an export
//! payload. Rendering is left to a [`SelectionView`] so the same state
//! machine runs in the browser and in native tests.

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod menu;
pub mod modal;
pub mod model;
pub mod render;
pub mod segment;
pub mod selection;

pub use config::{SelectionConfig, DEFAULT_PROMPTS};
pub use controller::{
    EventResponse, HitTarget, InputEvent, Key, NativeSelection, SelectionController, SelectionView,
};
pub use error::{Error, Result};
pub use export::{format, ContextPayload, ExportPayload};
pub use menu::{ContainerBox, MenuAction, MenuAnchor, MenuPosition, MenuPresenter};
pub use modal::{next_focus_index, CopyFeedback, CopyStatus, ModalContent};
pub use model::{Document, Paragraph, Sentence, SentenceId, TextUnit, UnitKind, Word, WordId};
pub use segment::segment;
pub use selection::{SelectionChange, SelectionState};
