mod attribute;
mod element;

pub use attribute::{AttrValue, Attributes};
pub use element::Element;

use wasm_bindgen::JsValue;
use web_sys::{Document, Node as WsNode};

/// A mount target in the DOM: the parent node that elements are appended into. The link between a
/// [`crate::Reference`] and the DOM lives in the element's own bindings, so a location is nothing
/// more than where the built nodes end up.
#[derive(Clone)]
pub struct Location {
    parent: WsNode,
}

impl Location {
    /// Create a location that appends into the provided parent.
    pub fn parent<N>(parent: &N) -> Self
    where
        N: AsRef<WsNode>,
    {
        Self {
            parent: parent.as_ref().clone(),
        }
    }

    /// Append the provided node into the parent. Assumes that the parent is mounted.
    pub fn mount<N>(&self, node: &N)
    where
        N: AsRef<WsNode>,
    {
        self.parent
            .append_child(node.as_ref())
            .expect("node appended to parent");
    }
}

/// Create a `div` element with the provided attributes.
pub fn div(document: &Document, attributes: Attributes) -> Result<Element, JsValue> {
    Element::create(document, "div", attributes)
}

/// Create a `p` element with the provided attributes.
pub fn p(document: &Document, attributes: Attributes) -> Result<Element, JsValue> {
    Element::create(document, "p", attributes)
}

/// Create a `span` element with the provided attributes.
pub fn span(document: &Document, attributes: Attributes) -> Result<Element, JsValue> {
    Element::create(document, "span", attributes)
}

/// Create a `button` element with the provided attributes.
pub fn button(document: &Document, attributes: Attributes) -> Result<Element, JsValue> {
    Element::create(document, "button", attributes)
}

/// Create a `h1` element with the provided attributes.
pub fn h1(document: &Document, attributes: Attributes) -> Result<Element, JsValue> {
    Element::create(document, "h1", attributes)
}

/// A grouping of sibling [`Element`]s that can be mounted as a unit. Retains ownership of its
/// elements, so their handlers and bindings live as long as the fragment does.
pub struct Fragment {
    elements: Vec<Element>,
}

impl Fragment {
    /// Create a new, empty fragment.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Add an element to the fragment.
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// The elements within this fragment, in mount order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Mount every element at the provided [`Location`], in order.
    pub fn mount(&self, location: &Location) {
        for element in &self.elements {
            element.mount(location);
        }
    }

    /// Detach every element, cancelling their bindings.
    pub fn detach(&mut self) {
        for element in &mut self.elements {
            element.detach();
        }
    }
}

impl Default for Fragment {
    fn default() -> Self {
        Self::new()
    }
}
