//! Explicit attach/detach of DOM event listeners

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// A bound listener; removed from its target on `detach` or drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Option<Closure<dyn FnMut(Event)>>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure: Some(closure),
        })
    }

    pub fn detach(&mut self) {
        if let Some(closure) = self.closure.take() {
            let removed = self
                .target
                .remove_event_listener_with_callback(self.event, closure.as_ref().unchecked_ref());
            if let Err(e) = removed {
                tracing::warn!("failed to remove '{}' listener: {:?}", self.event, e);
            }
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.detach();
    }
}
