//! Export modal over host-provided markup
//!
//! Expected markup, located by attribute markers:
//!
//! ```html
//! <div data-modal-overlay hidden>
//!   <div data-modal-dialog tabindex="-1">
//!     <h2 data-modal-title></h2>
//!     <p data-modal-subtitle></p>
//!     <pre data-modal-content></pre>
//!     <button data-modal-copy>Copy</button>
//!     <button data-modal-close>Close</button>
//!   </div>
//! </div>
//! ```
//!
//! If any piece is missing the modal only logs the content it was asked
//! to show. The markup is page-wide, so every mounted container shares
//! one `Modal` through [`Modal::shared`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, Node};

use pluck_core::{next_focus_index, CopyFeedback, ModalContent, SelectionConfig};

use crate::clipboard;
use crate::dom;
use crate::listeners::Listener;

const FOCUSABLE: &str =
    "a[href], button:not([disabled]), input, select, textarea, [tabindex]:not([tabindex='-1'])";

pub type SharedModal = Rc<RefCell<Modal>>;

thread_local! {
    static PAGE_MODAL: RefCell<Weak<RefCell<Modal>>> = RefCell::new(Weak::new());
}

#[derive(Clone)]
struct ModalParts {
    document: Document,
    overlay: HtmlElement,
    dialog: HtmlElement,
    title: Element,
    subtitle: Element,
    content: Element,
    copy: HtmlElement,
    closers: Vec<HtmlElement>,
}

impl ModalParts {
    fn find(document: &Document) -> Option<Self> {
        let overlay = html_element(document.query_selector("[data-modal-overlay]").ok()??)?;
        let dialog = html_element(overlay.query_selector("[data-modal-dialog]").ok()??)?;
        let title = overlay.query_selector("[data-modal-title]").ok()??;
        let subtitle = overlay.query_selector("[data-modal-subtitle]").ok()??;
        let content = overlay.query_selector("[data-modal-content]").ok()??;
        let copy = html_element(overlay.query_selector("[data-modal-copy]").ok()??)?;

        let closers = html_elements(&overlay, "[data-modal-close]");
        if closers.is_empty() {
            return None;
        }

        Some(Self {
            document: document.clone(),
            overlay,
            dialog,
            title,
            subtitle,
            content,
            copy,
            closers,
        })
    }
}

pub struct Modal {
    parts: Option<ModalParts>,
    open: bool,
    previous_focus: Option<HtmlElement>,
    feedback: CopyFeedback,
    listeners: Vec<Listener>,
}

impl Modal {
    /// The page's modal, bound on first use and released with the last
    /// mount holding it. Copy timings come from the first mount's config.
    pub fn shared(document: &Document, config: &SelectionConfig) -> SharedModal {
        if let Some(modal) = PAGE_MODAL.with(|m| m.borrow().upgrade()) {
            return modal;
        }
        let modal = Modal::mount(document, config);
        PAGE_MODAL.with(|m| *m.borrow_mut() = Rc::downgrade(&modal));
        modal
    }

    fn mount(document: &Document, config: &SelectionConfig) -> SharedModal {
        let parts = ModalParts::find(document);
        if parts.is_none() {
            tracing::info!("modal markup not found, modal content will be logged");
        }

        let modal = Rc::new(RefCell::new(Modal {
            parts: parts.clone(),
            open: false,
            previous_focus: None,
            feedback: CopyFeedback::new(config.copy_success_ms, config.copy_failure_ms),
            listeners: Vec::new(),
        }));

        if let Some(parts) = parts {
            match bind(&modal, &parts) {
                Ok(listeners) => modal.borrow_mut().listeners = listeners,
                Err(e) => tracing::warn!("failed to bind modal listeners: {:?}", e),
            }
        }

        modal
    }

    /// Close and drop all listeners
    pub fn unbind(&mut self) {
        self.close();
        self.listeners.clear();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether `node` is part of the modal markup
    pub fn contains(&self, node: &Node) -> bool {
        self.parts
            .as_ref()
            .is_some_and(|p| p.overlay.contains(Some(node)))
    }

    pub fn open(&mut self, content: &ModalContent) {
        let Some(parts) = &self.parts else {
            tracing::info!(title = %content.title, "{}", content.content);
            return;
        };

        parts.title.set_text_content(Some(&content.title));
        parts.subtitle.set_text_content(Some(&content.subtitle));
        parts.content.set_text_content(Some(&content.content));
        parts.copy.set_text_content(Some(self.feedback.label()));

        self.previous_focus = parts.document.active_element().and_then(html_element);
        parts.overlay.set_hidden(false);
        if let Err(e) = parts.overlay.class_list().add_1("open") {
            tracing::warn!("failed to open modal: {:?}", e);
        }

        let first = html_elements(&parts.dialog, FOCUSABLE).into_iter().next();
        let target = first.as_ref().unwrap_or(&parts.dialog);
        if let Err(e) = target.focus() {
            tracing::debug!("failed to focus modal: {:?}", e);
        }

        self.open = true;
    }

    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;

        if let Some(parts) = &self.parts {
            parts.overlay.set_hidden(true);
            if let Err(e) = parts.overlay.class_list().remove_1("open") {
                tracing::warn!("failed to close modal: {:?}", e);
            }
        }

        if let Some(previous) = self.previous_focus.take() {
            if let Err(e) = previous.focus() {
                tracing::debug!("failed to restore focus: {:?}", e);
            }
        }
    }

    /// Tab cycling inside the dialog and Escape to close. Returns true
    /// when the key was consumed.
    fn handle_key(&mut self, event: &KeyboardEvent) -> bool {
        if !self.open {
            return false;
        }
        let Some(parts) = &self.parts else {
            return false;
        };

        match event.key().as_str() {
            "Escape" => {
                self.close();
                true
            }
            "Tab" => {
                let focusable = html_elements(&parts.dialog, FOCUSABLE);
                let active = parts.document.active_element();
                let current = active.as_ref().and_then(|a| {
                    let node: &Node = a;
                    focusable.iter().position(|el| el.is_same_node(Some(node)))
                });
                if let Some(next) = next_focus_index(current, focusable.len(), event.shift_key()) {
                    if let Err(e) = focusable[next].focus() {
                        tracing::debug!("failed to move focus: {:?}", e);
                    }
                }
                true
            }
            _ => false,
        }
    }

    fn set_copy_label(&self) {
        if let Some(parts) = &self.parts {
            parts.copy.set_text_content(Some(self.feedback.label()));
        }
    }

    fn copy_text(&self) -> String {
        self.parts
            .as_ref()
            .and_then(|p| p.content.text_content())
            .unwrap_or_default()
    }
}

fn bind(modal: &SharedModal, parts: &ModalParts) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    for closer in &parts.closers {
        let weak = Rc::downgrade(modal);
        listeners.push(Listener::new(closer, "click", move |_| {
            if let Some(modal) = weak.upgrade() {
                modal.borrow_mut().close();
            }
        })?);
    }

    let weak = Rc::downgrade(modal);
    listeners.push(Listener::new(&parts.overlay, "keydown", move |event| {
        let Some(modal) = weak.upgrade() else {
            return;
        };
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if modal.borrow_mut().handle_key(event) {
            event.prevent_default();
            event.stop_propagation();
        }
    })?);

    let weak = Rc::downgrade(modal);
    listeners.push(Listener::new(&parts.copy, "click", move |_| {
        if let Some(modal) = weak.upgrade() {
            start_copy(&modal);
        }
    })?);

    Ok(listeners)
}

/// Copy the modal content, showing "Copying…" until the platform answers.
/// A second click restarts the cycle; stale completions are ignored.
fn start_copy(modal: &SharedModal) {
    let (ticket, text) = {
        let mut m = modal.borrow_mut();
        let ticket = m.feedback.begin();
        m.set_copy_label();
        (ticket, m.copy_text())
    };

    let weak: Weak<RefCell<Modal>> = Rc::downgrade(modal);
    wasm_bindgen_futures::spawn_local(async move {
        let result = clipboard::write_text(&text).await;

        let Some(modal) = weak.upgrade() else {
            return;
        };
        let delay = {
            let mut m = modal.borrow_mut();
            let delay = m.feedback.finish(ticket, &result);
            m.set_copy_label();
            delay
        };

        if let Some(delay) = delay {
            let weak = Rc::downgrade(&modal);
            let scheduled = dom::set_timeout(delay, move || {
                if let Some(modal) = weak.upgrade() {
                    let mut m = modal.borrow_mut();
                    if m.feedback.revert(ticket) {
                        m.set_copy_label();
                    }
                }
            });
            if let Err(e) = scheduled {
                tracing::warn!("failed to schedule copy label reset: {:?}", e);
            }
        }
    });
}

fn html_element(el: Element) -> Option<HtmlElement> {
    el.dyn_into::<HtmlElement>().ok()
}

fn html_elements(root: &Element, selector: &str) -> Vec<HtmlElement> {
    let Ok(nodes) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<HtmlElement>().ok())
        .collect()
}
