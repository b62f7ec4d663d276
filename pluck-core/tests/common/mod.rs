//! Shared test fixtures

#![allow(dead_code)]

use std::collections::BTreeSet;

use pluck_core::{
    ContainerBox, Document, SelectionConfig, SelectionController, SelectionView, SentenceId,
    WordId,
};

/// View that records marker classes and output like a DOM would
#[derive(Debug, Default)]
pub struct RecordingView {
    pub sentence_markers: BTreeSet<SentenceId>,
    pub word_markers: BTreeSet<WordId>,
    pub hovered: BTreeSet<WordId>,
    pub output: String,
    pub menu: Option<(f64, f64)>,
    pub native_clears: usize,
    pub container: ContainerBox,
}

impl SelectionView for RecordingView {
    fn set_sentence_marker(&mut self, id: SentenceId, on: bool) {
        if on {
            self.sentence_markers.insert(id);
        } else {
            self.sentence_markers.remove(&id);
        }
    }

    fn set_word_marker(&mut self, id: WordId, on: bool) {
        if on {
            self.word_markers.insert(id);
        } else {
            self.word_markers.remove(&id);
        }
    }

    fn set_hover_marker(&mut self, id: WordId, on: bool) {
        if on {
            self.hovered.insert(id);
        } else {
            self.hovered.remove(&id);
        }
    }

    fn clear_markers(&mut self) {
        self.sentence_markers.clear();
        self.word_markers.clear();
    }

    fn clear_native_selection(&mut self) {
        self.native_clears += 1;
    }

    fn write_output(&mut self, text: &str) {
        self.output = text.to_string();
    }

    fn container_box(&self) -> ContainerBox {
        self.container
    }

    fn show_menu(&mut self, left: f64, top: f64) {
        self.menu = Some((left, top));
    }

    fn hide_menu(&mut self) {
        self.menu = None;
    }
}

pub fn attached(text: &str, is_touch_device: bool) -> SelectionController<RecordingView> {
    let mut controller = SelectionController::new(
        Document::new(text),
        &SelectionConfig::default(),
        is_touch_device,
        RecordingView::default(),
    );
    controller.attach();
    controller
}
