use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use web_sys::Event;

use crate::bindable::Bindable;

/// Helper type for a retained event handler closure. Must be kept alive for as long as the
/// element it is assigned to, otherwise the underlying JS function will be invalidated.
pub(crate) type HandlerClosure = Closure<dyn FnMut(Event)>;

/// A value to be assigned onto a node's JS property. Values map 1:1 onto object properties rather
/// than HTML attributes, so a handler under the key `onclick` becomes an event handler, and a
/// string under `textContent` becomes the node's text.
pub enum AttrValue {
    Text(String),
    Number(f64),
    Bool(bool),

    /// A Rust closure to be assigned as an event-handler property.
    Handler(HandlerClosure),

    /// A reactive value. The builder seeds the property from [`Bindable::read()`], and installs a
    /// subscription that re-assigns the property on every change.
    Bound(Rc<dyn Bindable>),
}

/// An ordered mapping of property names to [`AttrValue`]s, to be copied onto a created node. Keys
/// and values are passed through without validation or type checking.
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create a new, empty mapping.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a string-valued property.
    pub fn with_text<K, V>(mut self, key: K, value: V) -> Self
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.entries.push((
            key.as_ref().to_string(),
            AttrValue::Text(value.as_ref().to_string()),
        ));
        self
    }

    /// Add a numeric property.
    pub fn with_number<K>(mut self, key: K, value: f64) -> Self
    where
        K: AsRef<str>,
    {
        self.entries
            .push((key.as_ref().to_string(), AttrValue::Number(value)));
        self
    }

    /// Add a boolean property.
    pub fn with_bool<K>(mut self, key: K, value: bool) -> Self
    where
        K: AsRef<str>,
    {
        self.entries
            .push((key.as_ref().to_string(), AttrValue::Bool(value)));
        self
    }

    /// Add an event-handler property (eg `onclick`). The closure will be retained by the built
    /// element.
    pub fn with_handler<K, F>(mut self, key: K, handler: F) -> Self
    where
        K: AsRef<str>,
        F: 'static + FnMut(Event),
    {
        self.entries.push((
            key.as_ref().to_string(),
            AttrValue::Handler(Closure::<dyn FnMut(Event)>::new(handler)),
        ));
        self
    }

    /// Add a reactive property, wired to any value with the [`Bindable`] capability.
    pub fn with_bound<K, B>(mut self, key: K, bindable: &B) -> Self
    where
        K: AsRef<str>,
        B: 'static + Bindable + Clone,
    {
        self.entries.push((
            key.as_ref().to_string(),
            AttrValue::Bound(Rc::new(bindable.clone())),
        ));
        self
    }

    pub(crate) fn into_entries(self) -> Vec<(String, AttrValue)> {
        self.entries
    }
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}
