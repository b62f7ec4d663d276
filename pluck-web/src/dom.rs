//! DOM rendering layer and hit testing

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use pluck_core::render::{
    self, HOVERED_CLASS, PARAGRAPH_INDEX_ATTR, SENTENCE_CLASS, SENTENCE_INDEX_ATTR,
    SENTENCE_SELECTED_CLASS, WORD_CLASS, WORD_INDEX_ATTR, WORD_SELECTED_CLASS,
};
use pluck_core::{ContainerBox, HitTarget, NativeSelection, SelectionView, SentenceId, WordId};

/// Marker classes, output text and menu placement on the live page
pub struct DomView {
    container: Element,
    output: Option<Element>,
    menu: HtmlElement,
}

impl DomView {
    pub fn new(container: Element, output: Option<Element>, menu: HtmlElement) -> Self {
        Self {
            container,
            output,
            menu,
        }
    }

    fn sentence_element(&self, id: SentenceId) -> Option<Element> {
        let selector = render::sentence_selector(id.paragraph_index, id.sentence_index);
        self.container.query_selector(&selector).ok().flatten()
    }

    fn word_element(&self, id: WordId) -> Option<Element> {
        let sentence = self.sentence_element(id.sentence())?;
        sentence
            .query_selector(&render::word_selector(id.word_index))
            .ok()
            .flatten()
    }

    fn remove_class_everywhere(&self, class: &str) {
        let Ok(nodes) = self.container.query_selector_all(&format!(".{}", class)) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                set_class(&el, class, false);
            }
        }
    }
}

impl SelectionView for DomView {
    fn set_sentence_marker(&mut self, id: SentenceId, on: bool) {
        if let Some(el) = self.sentence_element(id) {
            set_class(&el, SENTENCE_SELECTED_CLASS, on);
        }
    }

    fn set_word_marker(&mut self, id: WordId, on: bool) {
        if let Some(el) = self.word_element(id) {
            set_class(&el, WORD_SELECTED_CLASS, on);
        }
    }

    fn set_hover_marker(&mut self, id: WordId, on: bool) {
        if let Some(el) = self.word_element(id) {
            set_class(&el, HOVERED_CLASS, on);
        }
    }

    fn clear_markers(&mut self) {
        self.remove_class_everywhere(SENTENCE_SELECTED_CLASS);
        self.remove_class_everywhere(WORD_SELECTED_CLASS);
    }

    fn clear_native_selection(&mut self) {
        let selection = web_sys::window().and_then(|w| w.get_selection().ok().flatten());
        if let Some(selection) = selection {
            if let Err(e) = selection.remove_all_ranges() {
                tracing::warn!("failed to clear native selection: {:?}", e);
            }
        }
    }

    fn write_output(&mut self, text: &str) {
        match &self.output {
            Some(output) => output.set_text_content(Some(text)),
            None => tracing::debug!("no output element, payload:\n{}", text),
        }
    }

    fn container_box(&self) -> ContainerBox {
        let rect = self.container.get_bounding_client_rect();
        let (scroll_x, scroll_y) = web_sys::window().map(|w| page_scroll(&w)).unwrap_or_default();
        ContainerBox {
            left: rect.left(),
            bottom: rect.bottom(),
            scroll_x,
            scroll_y,
        }
    }

    fn show_menu(&mut self, left: f64, top: f64) {
        let style = self.menu.style();
        let result = style
            .set_property("left", &format!("{}px", left))
            .and_then(|_| style.set_property("top", &format!("{}px", top)))
            .and_then(|_| style.set_property("display", "block"))
            .and_then(|_| self.menu.class_list().add_1("show"));
        if let Err(e) = result {
            tracing::warn!("failed to show menu: {:?}", e);
        }
    }

    fn hide_menu(&mut self) {
        let result = self
            .menu
            .class_list()
            .remove_1("show")
            .and_then(|_| self.menu.style().set_property("display", "none"));
        if let Err(e) = result {
            tracing::warn!("failed to hide menu: {:?}", e);
        }
    }
}

fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        tracing::warn!("failed to update class '{}': {:?}", class, e);
    }
}

fn index_attr(el: &Element, name: &str) -> Option<usize> {
    el.get_attribute(name)?.parse().ok()
}

fn sentence_id(el: &Element) -> Option<SentenceId> {
    Some(SentenceId::new(
        index_attr(el, PARAGRAPH_INDEX_ATTR)?,
        index_attr(el, SENTENCE_INDEX_ATTR)?,
    ))
}

/// Resolve an event target to the rendered unit it belongs to
pub fn hit_target(target: &Element) -> HitTarget {
    let classes = target.class_list();

    if classes.contains(WORD_CLASS) {
        let sentence = target
            .closest(&format!(".{}", SENTENCE_CLASS))
            .ok()
            .flatten()
            .and_then(|s| sentence_id(&s));
        return match (sentence, index_attr(target, WORD_INDEX_ATTR)) {
            (Some(id), Some(word_index)) => HitTarget::Word(id.word(word_index)),
            _ => HitTarget::Outside,
        };
    }

    if classes.contains(SENTENCE_CLASS) {
        return sentence_id(target).map_or(HitTarget::Outside, HitTarget::Sentence);
    }

    HitTarget::Outside
}

/// Event target as an element, if it is one
pub fn event_element(event: &web_sys::Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

/// Current native selection relative to `container`
pub fn native_selection(window: &Window, container: &Element) -> Option<NativeSelection> {
    let selection = window.get_selection().ok().flatten()?;
    let text = String::from(selection.to_string());
    let inside_container = container.contains(selection.anchor_node().as_ref());

    if text.is_empty() || selection.range_count() == 0 {
        return Some(NativeSelection {
            is_empty: true,
            inside_container,
            end_x: 0.0,
            end_y: 0.0,
        });
    }

    let rect = selection.get_range_at(0).ok()?.get_bounding_client_rect();
    let (scroll_x, scroll_y) = page_scroll(window);
    Some(NativeSelection {
        is_empty: false,
        inside_container,
        end_x: rect.right() + scroll_x,
        end_y: rect.bottom() + scroll_y,
    })
}

fn page_scroll(window: &Window) -> (f64, f64) {
    (
        window.scroll_x().unwrap_or(0.0),
        window.scroll_y().unwrap_or(0.0),
    )
}

pub fn is_touch_device(document: &web_sys::Document) -> bool {
    document
        .document_element()
        .map(|root| js_sys::Reflect::has(&root, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

/// Run `f` once after `delay_ms`
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Result<i32, JsValue> {
    let window = web_sys::window().ok_or("No window")?;
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        timeout_delay(delay_ms),
    )
}

/// Timer delays are signed on the JS side; oversized values saturate
fn timeout_delay(delay_ms: u32) -> i32 {
    i32::try_from(delay_ms).unwrap_or(i32::MAX)
}
