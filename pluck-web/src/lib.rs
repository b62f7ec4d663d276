//! Pluck Web - WebAssembly front end for sentence and word selection
//!
//! Mount it on a page holding a text container and an output element:
//!
//! ```js
//! import init, { mount } from "./pkg/pluck_web.js";
//! await init();
//! const pluck = mount(JSON.stringify({ container_id: "text-area" }));
//! // later
//! pluck.detach();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent, MouseEvent, Node};

use pluck_core::render::render_html;
use pluck_core::{
    Document, Error, HitTarget, InputEvent, Key, SelectionConfig, SelectionController,
};

mod clipboard;
mod dom;
mod listeners;
mod logging;
mod menu;
mod modal;

use dom::DomView;
use listeners::Listener;
use menu::FloatingMenu;
use modal::{Modal, SharedModal};

type SharedController = Rc<RefCell<SelectionController<DomView>>>;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();
}

/// A mounted text container. Listeners stay bound until `detach` is
/// called or the handle is freed.
#[wasm_bindgen]
pub struct Pluck {
    controller: SharedController,
    modal: Option<SharedModal>,
    menu: FloatingMenu,
    listeners: Vec<Listener>,
}

/// Segment the configured container, render it and start listening.
/// `config_json` may override any field of the default configuration.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<Pluck, JsValue> {
    let config = match config_json {
        Some(json) => SelectionConfig::from_json(&json).map_err(to_js)?,
        None => SelectionConfig::default(),
    };
    logging::init(&config.log_level);

    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let container = document
        .get_element_by_id(&config.container_id)
        .ok_or_else(|| {
            to_js(Error::Configuration {
                element_id: config.container_id.clone(),
            })
        })?;
    let output = document.get_element_by_id(&config.output_id);
    if output.is_none() {
        tracing::warn!("output element '#{}' not found", config.output_id);
    }

    let text = match container.dyn_ref::<HtmlElement>() {
        Some(el) => el.inner_text(),
        None => container.text_content().unwrap_or_default(),
    };
    let text_doc = Document::new(text);
    container.set_inner_html(&render_html(text_doc.paragraphs()));

    let menu = FloatingMenu::create(&document)?;
    let view = DomView::new(container.clone(), output, menu.element().clone());
    let is_touch = dom::is_touch_device(&document);
    let controller = Rc::new(RefCell::new(SelectionController::new(
        text_doc, &config, is_touch, view,
    )));
    let modal = Modal::shared(&document, &config);

    let listeners = match bind_all(&controller, &modal, &container, &menu, &config) {
        Ok(listeners) => listeners,
        Err(e) => {
            menu.remove();
            return Err(e);
        }
    };
    controller.borrow_mut().attach();

    tracing::info!(
        container = %config.container_id,
        sentences = controller.borrow().document().sentence_count(),
        "pluck mounted"
    );

    Ok(Pluck {
        controller,
        modal: Some(modal),
        menu,
        listeners,
    })
}

#[wasm_bindgen]
impl Pluck {
    /// Unbind every listener, drop the selection and remove the menu
    pub fn detach(&mut self) {
        if !self.controller.borrow().is_attached() {
            return;
        }
        self.listeners.clear();
        // Other mounts may still be using the page modal
        if let Some(modal) = self.modal.take() {
            if Rc::strong_count(&modal) == 1 {
                modal.borrow_mut().unbind();
            }
        }
        self.controller.borrow_mut().detach();
        self.menu.remove();
    }

    /// Same as the menu's "Clear All"
    pub fn clear(&self) {
        self.controller.borrow_mut().clear_all();
    }

    /// Current payload as pretty-printed JSON
    #[wasm_bindgen(js_name = exportJson)]
    pub fn export_json(&self) -> Result<String, JsValue> {
        self.controller.borrow().export().to_json().map_err(to_js)
    }

    #[wasm_bindgen(js_name = showMenu)]
    pub fn show_menu(&self) {
        self.controller.borrow_mut().show_menu_below_container();
    }
}

impl Drop for Pluck {
    fn drop(&mut self) {
        self.detach();
    }
}

fn bind_all(
    controller: &SharedController,
    modal: &SharedModal,
    container: &Element,
    menu: &FloatingMenu,
    config: &SelectionConfig,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = bind_container(controller, modal, container, menu.element())?;
    listeners.extend(bind_menu(controller, modal, menu)?);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    if let Some(trigger) = config
        .test_trigger_id
        .as_deref()
        .and_then(|id| document.get_element_by_id(id))
    {
        let controller = controller.clone();
        listeners.push(Listener::new(&trigger, "click", move |_| {
            controller.borrow_mut().show_menu_below_container();
        })?);
    }

    Ok(listeners)
}

fn bind_container(
    controller: &SharedController,
    modal: &SharedModal,
    container: &Element,
    menu: &HtmlElement,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    listeners.push(Listener::new(container, "click", {
        let controller = controller.clone();
        move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let target = dom::event_element(&event).map_or(HitTarget::Outside, |el| dom::hit_target(&el));
            controller.borrow_mut().handle(InputEvent::Click {
                target,
                page_x: f64::from(mouse.page_x()),
                page_y: f64::from(mouse.page_y()),
            });
        }
    })?);

    listeners.push(Listener::new(container, "dblclick", {
        let controller = controller.clone();
        move |event| {
            let target = dom::event_element(&event).map_or(HitTarget::Outside, |el| dom::hit_target(&el));
            let response = controller
                .borrow_mut()
                .handle(InputEvent::DoubleClick { target });
            if response.prevent_default {
                event.prevent_default();
                event.stop_propagation();
            }
        }
    })?);

    listeners.push(Listener::new(container, "mouseup", {
        let controller = controller.clone();
        let container = container.clone();
        move |_| {
            let selection = web_sys::window().and_then(|w| dom::native_selection(&w, &container));
            controller
                .borrow_mut()
                .handle(InputEvent::MouseUp { selection });
        }
    })?);

    if controller.borrow().hover_enabled() {
        for (name, enter) in [("mouseover", true), ("mouseout", false)] {
            let controller = controller.clone();
            listeners.push(Listener::new(container, name, move |event| {
                if let Some(HitTarget::Word(id)) = dom::event_element(&event).map(|el| dom::hit_target(&el)) {
                    let input = if enter {
                        InputEvent::HoverEnter(id)
                    } else {
                        InputEvent::HoverLeave(id)
                    };
                    controller.borrow_mut().handle(input);
                }
            })?);
        }
    }

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;

    // Keyboard ownership follows the last pointer press on the page
    listeners.push(Listener::new(&document, "mousedown", {
        let controller = controller.clone();
        let modal = modal.clone();
        let container = container.clone();
        let menu = menu.clone();
        move |event| {
            let Some(node) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                return;
            };
            if modal.borrow().contains(&node) {
                return;
            }
            let inside = container.contains(Some(&node)) || menu.contains(Some(&node));
            controller
                .borrow_mut()
                .handle(InputEvent::PointerDown { inside });
        }
    })?);

    listeners.push(Listener::new(&document, "keydown", {
        let controller = controller.clone();
        let modal = modal.clone();
        move |event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            // An open modal owns the keyboard for every mount
            if modal.borrow().is_open() {
                return;
            }
            let key = match event.key().as_str() {
                "Escape" => Key::Escape,
                _ => Key::Other,
            };
            controller.borrow_mut().handle(InputEvent::KeyDown(key));
        }
    })?);

    Ok(listeners)
}

fn bind_menu(
    controller: &SharedController,
    modal: &SharedModal,
    menu: &FloatingMenu,
) -> Result<Vec<Listener>, JsValue> {
    let mut listeners = Vec::new();

    for (action, button) in menu.buttons() {
        let action = *action;
        let controller = controller.clone();
        let modal = modal.clone();
        listeners.push(Listener::new(button, "click", move |_| {
            let content = controller.borrow_mut().perform(action);
            if let Some(content) = content {
                modal.borrow_mut().open(&content);
            }
        })?);
    }

    Ok(listeners)
}

fn to_js(err: Error) -> JsValue {
    JsValue::from_str(&err.to_string())
}
