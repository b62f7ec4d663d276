//! Floating menu element

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use pluck_core::MenuAction;

const MENU_ID: &str = "floating-menu";

pub struct FloatingMenu {
    element: HtmlElement,
    buttons: Vec<(MenuAction, HtmlElement)>,
}

impl FloatingMenu {
    /// Build the hidden menu and append it to `<body>`
    pub fn create(document: &Document) -> Result<Self, JsValue> {
        let element: HtmlElement = document.create_element("div")?.dyn_into()?;
        element.set_id(MENU_ID);
        let style = element.style();
        style.set_property("position", "absolute")?;
        style.set_property("display", "none")?;

        let mut buttons = Vec::new();
        for action in MenuAction::all() {
            let button: HtmlElement = document.create_element("button")?.dyn_into()?;
            button.set_inner_text(action.label());
            button.set_attribute("type", "button")?;
            element.append_child(&button)?;
            buttons.push((*action, button));
        }

        let body = document.body().ok_or("No body")?;
        body.append_child(&element)?;
        tracing::debug!("floating menu created");

        Ok(Self { element, buttons })
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    pub fn buttons(&self) -> &[(MenuAction, HtmlElement)] {
        &self.buttons
    }

    pub fn remove(&self) {
        self.element.remove();
    }
}
