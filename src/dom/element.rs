use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::{console, Document, Element as WsElement, Node as WsNode};

use super::{
    attribute::{AttrValue, Attributes, HandlerClosure},
    Location,
};
use crate::reference::Subscription;

/// A created DOM element, along with everything that must stay alive for it to keep working: the
/// handler closures assigned onto it, and the subscriptions feeding its bound properties.
pub struct Element {
    element: WsElement,

    /// Retained event handler closures. Dropping one invalidates the JS function assigned to the
    /// element.
    handlers: Vec<HandlerClosure>,

    /// Subscriptions installed for bound properties. Cancelled when the element is detached.
    bindings: Vec<Subscription>,
}

impl Element {
    /// Create a new element of the provided tag, and copy each entry of the attributes mapping
    /// onto it as a direct object property.
    pub fn create(document: &Document, tag: &str, attributes: Attributes) -> Result<Self, JsValue> {
        console::log_1(&format!("creating <{tag}>").into());

        let element = document.create_element(tag)?;

        let mut handlers = Vec::new();
        let mut bindings = Vec::new();

        for (key, value) in attributes.into_entries() {
            match value {
                AttrValue::Text(text) => {
                    set_property(&element, &key, &JsValue::from_str(&text))?;
                }
                AttrValue::Number(number) => {
                    set_property(&element, &key, &JsValue::from_f64(number))?;
                }
                AttrValue::Bool(value) => {
                    set_property(&element, &key, &JsValue::from_bool(value))?;
                }
                AttrValue::Handler(closure) => {
                    set_property(&element, &key, closure.as_ref())?;
                    handlers.push(closure);
                }
                AttrValue::Bound(bindable) => {
                    // Seed the property with the current value, then re-assign it on every
                    // change.
                    set_property(&element, &key, &JsValue::from_str(&bindable.read()))?;

                    bindings.push(bindable.subscribe(Box::new({
                        let element = element.clone();
                        move |value: &str| {
                            Reflect::set(
                                &element,
                                &JsValue::from_str(&key),
                                &JsValue::from_str(value),
                            )
                            .expect("to assign bound property");
                        }
                    })));
                }
            }
        }

        Ok(Self {
            element,
            handlers,
            bindings,
        })
    }

    /// The underlying [`web_sys::Node`].
    pub fn node(&self) -> &WsNode {
        self.element.as_ref()
    }

    /// Mount the element at the provided [`Location`].
    pub fn mount(&self, location: &Location) {
        location.mount(&self.element);
    }

    /// Remove the element from the DOM, and cancel the subscriptions feeding its bound
    /// properties.
    pub fn detach(&mut self) {
        if let Some(parent) = self.element.parent_node() {
            parent
                .remove_child(self.element.as_ref())
                .expect("to remove child");
        }

        for binding in self.bindings.drain(..) {
            binding.cancel();
        }
    }
}

/// Assign a single property onto the element, `elm[key] = value` style.
fn set_property(element: &WsElement, key: &str, value: &JsValue) -> Result<(), JsValue> {
    Reflect::set(element, &JsValue::from_str(key), value)?;
    Ok(())
}
