use crate::config::SelectionConfig;
use crate::export::{self, ExportPayload};
use crate::menu::{ContainerBox, MenuAction, MenuAnchor, MenuPresenter};
use crate::modal::ModalContent;
use crate::model::{Document, SentenceId, WordId};
use crate::selection::{SelectionChange, SelectionState};

/// Rendered unit under the pointer, resolved from markup attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Sentence(SentenceId),
    Word(WordId),
    Outside,
}

impl HitTarget {
    pub fn sentence(&self) -> Option<SentenceId> {
        match self {
            HitTarget::Sentence(id) => Some(*id),
            HitTarget::Word(id) => Some(id.sentence()),
            HitTarget::Outside => None,
        }
    }
}

/// Native (browser) text selection observed on mouse-up
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NativeSelection {
    pub is_empty: bool,
    pub inside_container: bool,
    /// Page coordinates of the selection range's end
    pub end_x: f64,
    pub end_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Other,
}

/// Input events, already hit-tested against rendered units
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Click { target: HitTarget, page_x: f64, page_y: f64 },
    DoubleClick { target: HitTarget },
    MouseUp { selection: Option<NativeSelection> },
    /// Pointer pressed anywhere on the page; `inside` when it landed in
    /// this container or its menu
    PointerDown { inside: bool },
    HoverEnter(WordId),
    HoverLeave(WordId),
    KeyDown(Key),
}

/// What the host should do with the native event after handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    pub prevent_default: bool,
}

/// Rendering side of the controller. Implementations keep marker classes,
/// the output surface and the menu element in sync; they hold no
/// selection data of their own.
pub trait SelectionView {
    fn set_sentence_marker(&mut self, id: SentenceId, on: bool);
    fn set_word_marker(&mut self, id: WordId, on: bool);
    fn set_hover_marker(&mut self, id: WordId, on: bool);
    fn clear_markers(&mut self);
    fn clear_native_selection(&mut self);
    fn write_output(&mut self, text: &str);
    fn container_box(&self) -> ContainerBox;
    fn show_menu(&mut self, left: f64, top: f64);
    fn hide_menu(&mut self);
}

/// Per-container selection state machine
///
/// Sentences go Unselected -> Sentence-Selected (word toggles stay in
/// that state) -> Unselected, via double-click or clear-all.
///
/// Several controllers can share one page. Each only reacts to keys
/// while it holds keyboard ownership, which follows the last pointer
/// press.
pub struct SelectionController<V: SelectionView> {
    document: Document,
    state: SelectionState,
    menu: MenuPresenter,
    prompts: Vec<String>,
    hover_enabled: bool,
    attached: bool,
    owns_keyboard: bool,
    view: V,
}

impl<V: SelectionView> SelectionController<V> {
    pub fn new(document: Document, config: &SelectionConfig, is_touch_device: bool, view: V) -> Self {
        Self {
            document,
            state: SelectionState::new(),
            menu: MenuPresenter::new(config.menu_offset),
            prompts: config.prompts.clone(),
            hover_enabled: config.hover_enabled_for(is_touch_device),
            attached: false,
            owns_keyboard: false,
            view,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn menu(&self) -> &MenuPresenter {
        &self.menu
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn hover_enabled(&self) -> bool {
        self.hover_enabled
    }

    pub fn owns_keyboard(&self) -> bool {
        self.owns_keyboard
    }

    /// Start accepting events and publish the initial (empty) payload
    pub fn attach(&mut self) {
        self.attached = true;
        self.publish();
        tracing::debug!(
            sentences = self.document.sentence_count(),
            words = self.document.word_count(),
            "controller attached"
        );
    }

    /// Stop accepting events and drop all selection state
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.view.clear_markers();
        self.state.reset();
        self.hide_menu();
        self.attached = false;
        self.owns_keyboard = false;
        tracing::debug!("controller detached");
    }

    pub fn export(&self) -> ExportPayload {
        export::format(&self.state, &self.prompts)
    }

    pub fn handle(&mut self, event: InputEvent) -> EventResponse {
        if !self.attached {
            return EventResponse::default();
        }

        match event {
            InputEvent::Click {
                target,
                page_x,
                page_y,
            } => {
                self.owns_keyboard = true;
                self.handle_click(target, page_x, page_y);
                EventResponse::default()
            }
            InputEvent::DoubleClick { target } => {
                self.owns_keyboard = true;
                self.handle_double_click(target);
                EventResponse {
                    prevent_default: true,
                }
            }
            InputEvent::MouseUp { selection } => {
                self.owns_keyboard = true;
                self.handle_mouse_up(selection);
                EventResponse::default()
            }
            InputEvent::PointerDown { inside } => {
                self.owns_keyboard = inside;
                EventResponse::default()
            }
            InputEvent::HoverEnter(id) => {
                if self.hover_enabled {
                    self.view.set_hover_marker(id, true);
                }
                EventResponse::default()
            }
            InputEvent::HoverLeave(id) => {
                if self.hover_enabled {
                    self.view.set_hover_marker(id, false);
                }
                EventResponse::default()
            }
            InputEvent::KeyDown(Key::Escape) => {
                if self.owns_keyboard {
                    self.clear_all();
                }
                EventResponse::default()
            }
            InputEvent::KeyDown(Key::Other) => EventResponse::default(),
        }
    }

    fn handle_click(&mut self, target: HitTarget, page_x: f64, page_y: f64) {
        match target {
            HitTarget::Sentence(id) => {
                self.select_sentence(id);
            }
            HitTarget::Word(id) => {
                // A word in an unselected sentence promotes the sentence
                // only; the toggle waits for the next click
                if self.state.is_sentence_active(id.sentence()) {
                    self.toggle_word(id);
                } else {
                    self.select_sentence(id.sentence());
                }
            }
            HitTarget::Outside => return,
        }

        self.publish();
        self.show_menu(MenuAnchor::Point {
            x: page_x,
            y: page_y,
        });
    }

    fn handle_double_click(&mut self, target: HitTarget) {
        self.view.clear_native_selection();
        let Some(id) = target.sentence() else {
            return;
        };
        let Some(sentence) = self.document.sentence(id) else {
            return;
        };
        let changes = self.state.deselect_sentence(sentence);
        self.apply(changes);
        self.publish();
    }

    fn handle_mouse_up(&mut self, selection: Option<NativeSelection>) {
        match selection {
            Some(sel) if !sel.is_empty && sel.inside_container => {
                self.show_menu(MenuAnchor::Point {
                    x: sel.end_x,
                    y: sel.end_y,
                });
            }
            _ => self.hide_menu(),
        }
    }

    fn select_sentence(&mut self, id: SentenceId) {
        let Some(sentence) = self.document.sentence(id) else {
            tracing::debug!(?id, "click on unknown sentence ignored");
            return;
        };
        let changes = self.state.select_sentence(sentence);
        self.apply(changes);
    }

    fn toggle_word(&mut self, id: WordId) {
        let Some(word) = self.document.word(id) else {
            tracing::debug!(?id, "click on unknown word ignored");
            return;
        };
        match self.state.toggle_word(word) {
            Ok(change) => self.apply(vec![change]),
            Err(e) => tracing::warn!("ignoring word toggle: {}", e),
        }
    }

    /// Drop every marker, the native selection and the selection state,
    /// then close the menu
    pub fn clear_all(&mut self) {
        self.view.clear_native_selection();
        let change = self.state.reset();
        self.apply(vec![change]);
        self.publish();
        self.hide_menu();
    }

    /// Run a menu action. Returns content for the modal when the action
    /// has something to show.
    pub fn perform(&mut self, action: MenuAction) -> Option<ModalContent> {
        match action {
            MenuAction::Export => {
                let payload = self.export();
                match payload.context_json() {
                    Ok(json) => Some(ModalContent::new(
                        "Selection context",
                        "Copy this into your tool",
                        json,
                    )),
                    Err(e) => {
                        tracing::warn!("failed to serialize selection: {}", e);
                        None
                    }
                }
            }
            MenuAction::Placeholder(n) => Some(ModalContent::new(
                format!("Action {}", n),
                "",
                format!("Action {} triggered", n),
            )),
            MenuAction::ClearAll => {
                self.clear_all();
                None
            }
        }
    }

    /// Show the menu below the container, independent of any pointer
    pub fn show_menu_below_container(&mut self) {
        self.show_menu(MenuAnchor::BelowContainer);
    }

    fn show_menu(&mut self, anchor: MenuAnchor) {
        let container = self.view.container_box();
        let position = self.menu.show(anchor, &container);
        self.view.show_menu(position.left, position.top);
    }

    fn hide_menu(&mut self) {
        if self.menu.hide() {
            self.view.hide_menu();
        }
    }

    fn apply(&mut self, changes: Vec<SelectionChange>) {
        for change in changes {
            match change {
                SelectionChange::SentenceMarked(id) => self.view.set_sentence_marker(id, true),
                SelectionChange::SentenceUnmarked(id) => self.view.set_sentence_marker(id, false),
                SelectionChange::WordMarked(id) => self.view.set_word_marker(id, true),
                SelectionChange::WordUnmarked(id) => self.view.set_word_marker(id, false),
                SelectionChange::Cleared => self.view.clear_markers(),
            }
        }
    }

    fn publish(&mut self) {
        match self.export().render() {
            Ok(text) => self.view.write_output(&text),
            Err(e) => tracing::warn!("failed to render selection: {}", e),
        }
    }
}
